//! Scan command implementation.
//!
//! Extracts design tokens from a workspace theme directory and prints
//! either the generated safelist stylesheet or a token summary to stdout.

use crate::cli::ScanArgs;
use crate::error::Result;
use crate::ui;
use loupe_server::{scan_theme_dir, THEME_SUBDIR};
use loupe_theme::safelist;

/// Execute the scan command.
pub async fn execute(args: ScanArgs) -> Result<()> {
    let theme_dir = args
        .theme_dir
        .unwrap_or_else(|| args.workspace.join(THEME_SUBDIR));

    if !theme_dir.is_dir() {
        ui::warning(&format!(
            "Theme directory not found: {} (baseline only)",
            theme_dir.display()
        ));
    }

    let discovered = scan_theme_dir(&theme_dir);

    if args.summary {
        println!("Theme directory: {}", theme_dir.display());
        println!("Colors:          {}", format_names(&discovered.colors));
        println!("Spacing:         {}", format_names(&discovered.spacing));
        println!("Text sizes:      {}", format_names(&discovered.text_sizes));
        println!("Fonts:           {}", format_names(&discovered.fonts));
        println!(
            "Utilities:       {}",
            format_names(&discovered.utility_names)
        );
        return Ok(());
    }

    let stylesheet = safelist::generate(&safelist::baseline(), &discovered);
    print!("{stylesheet}");
    Ok(())
}

fn format_names(names: &std::collections::BTreeSet<String>) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_format_names() {
        assert_eq!(format_names(&BTreeSet::new()), "(none)");

        let names: BTreeSet<String> =
            ["brand".to_string(), "accent".to_string()].into_iter().collect();
        assert_eq!(format_names(&names), "accent, brand");
    }
}
