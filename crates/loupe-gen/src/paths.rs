//! Relative import path computation.
//!
//! The generated entry point lives inside the preview staging directory and
//! imports the selected component from wherever it sits on disk. Module
//! specifiers must be relative and forward-slash separated regardless of
//! platform or how differently the two paths are rooted.

use path_clean::PathClean;
use std::path::{Component, Path};

/// Compute the relative module specifier from `from_dir` to `target`.
///
/// Standard path-segment diffing: the shared prefix is dropped, remaining
/// `from_dir` segments become `..` hops, and the remaining target segments
/// are appended. A target reachable without ascending is prefixed with `./`
/// so the result is always a valid relative module specifier.
pub fn relative_import(from_dir: &Path, target: &Path) -> String {
    let from = from_dir.clean();
    let target = target.clean();

    let from_parts: Vec<Component<'_>> = from.components().collect();
    let target_parts: Vec<Component<'_>> = target.components().collect();

    let mut shared = 0;
    while shared < from_parts.len()
        && shared < target_parts.len()
        && from_parts[shared] == target_parts[shared]
    {
        shared += 1;
    }

    let ups = from_parts.len() - shared;
    let mut segments: Vec<String> = std::iter::repeat("..".to_string()).take(ups).collect();
    segments.extend(
        target_parts[shared..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    if ups == 0 {
        format!("./{}", segments.join("/"))
    } else {
        segments.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_differently_rooted_paths() {
        let from = PathBuf::from("/ext/preview");
        let target = PathBuf::from("/ws/src/components/Btn.tsx");
        assert_eq!(
            relative_import(&from, &target),
            "../../ws/src/components/Btn.tsx"
        );
    }

    #[test]
    fn test_target_under_from_dir() {
        let from = PathBuf::from("/ext/preview");
        let target = PathBuf::from("/ext/preview/local/Widget.tsx");
        assert_eq!(relative_import(&from, &target), "./local/Widget.tsx");
    }

    #[test]
    fn test_sibling_directory() {
        let from = PathBuf::from("/ws/.loupe");
        let target = PathBuf::from("/ws/src/Button.tsx");
        assert_eq!(relative_import(&from, &target), "../src/Button.tsx");
    }

    #[test]
    fn test_deeply_nested_target() {
        let from = PathBuf::from("/a/b");
        let target = PathBuf::from("/a/b/c/d/e/f.tsx");
        assert_eq!(relative_import(&from, &target), "./c/d/e/f.tsx");
    }

    #[test]
    fn test_unclean_inputs_normalized() {
        let from = PathBuf::from("/ws/./.loupe/../.loupe");
        let target = PathBuf::from("/ws/src/../src/App.tsx");
        assert_eq!(relative_import(&from, &target), "../src/App.tsx");
    }
}
