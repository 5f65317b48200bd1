//! Theme directory scanning.
//!
//! Walks the workspace theme directory and unions the tokens extracted from
//! every CSS file. The resulting `TokenSet` is rebuilt from scratch on every
//! scan so regeneration stays a pure function of current file contents.

use loupe_theme::{extract, TokenSet};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Scan a theme directory recursively for design tokens.
///
/// A missing directory yields an empty set without error. A file that cannot
/// be read is logged and skipped; the remaining files still contribute
/// tokens.
pub fn scan_theme_dir(dir: &Path) -> TokenSet {
    let mut tokens = TokenSet::new();

    if !dir.is_dir() {
        debug!(dir = %dir.display(), "theme directory not present, skipping scan");
        return tokens;
    }

    let entries = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("css"))
        });

    for entry in entries {
        match std::fs::read_to_string(entry.path()) {
            Ok(css) => {
                let file_tokens = extract(&css);
                debug!(
                    file = %entry.path().display(),
                    tokens = file_tokens.len(),
                    "scanned theme file"
                );
                tokens.merge(file_tokens);
            }
            Err(error) => {
                warn!(
                    file = %entry.path().display(),
                    %error,
                    "skipping unreadable theme file"
                );
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_directory_yields_empty_set() {
        let tokens = scan_theme_dir(Path::new("/no/such/theme/dir"));
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokens_unioned_across_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("colors.css"), "--color-brand-500: #f0f;").unwrap();
        fs::write(dir.path().join("spacing.css"), "--spacing-3xl: 4rem;").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(
            dir.path().join("nested/utilities.css"),
            "@utility glass { backdrop-filter: blur(8px); }",
        )
        .unwrap();

        let tokens = scan_theme_dir(dir.path());
        assert!(tokens.colors.contains("brand"));
        assert!(tokens.spacing.contains("3xl"));
        assert!(tokens.utility_names.contains("glass"));
    }

    #[test]
    fn test_non_css_files_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "--color-fake-500: #000;").unwrap();

        let tokens = scan_theme_dir(dir.path());
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_repeated_scans_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("theme.css"),
            "--color-a-500: #111;\n--color-b-500: #222;\n--spacing-lg: 2rem;",
        )
        .unwrap();

        let first = scan_theme_dir(dir.path());
        let second = scan_theme_dir(dir.path());
        assert_eq!(first, second);

        let baseline = loupe_theme::safelist::baseline();
        assert_eq!(
            loupe_theme::safelist::generate(&baseline, &first),
            loupe_theme::safelist::generate(&baseline, &second)
        );
    }
}
