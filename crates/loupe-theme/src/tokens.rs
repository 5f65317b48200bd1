//! Categorized design-token sets discovered from workspace theme CSS.

use std::collections::BTreeSet;

/// A custom `@utility` block captured verbatim from theme CSS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityBlock {
    /// Utility class name declared after `@utility`.
    pub name: String,
    /// Full text span of the block, from `@utility` through the closing brace.
    pub text: String,
}

/// Design tokens discovered from theme CSS, grouped by category.
///
/// A `TokenSet` is always rebuilt from scratch by a scan, never mutated
/// incrementally, so generated output is a pure function of current file
/// contents. Ordered sets keep downstream generation deterministic
/// regardless of discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    /// Color token names (e.g. "primary" from `--color-primary-500`).
    pub colors: BTreeSet<String>,
    /// Spacing scale names (e.g. "3xl" from `--spacing-3xl`).
    pub spacing: BTreeSet<String>,
    /// Text size names (e.g. "hero" from `--text-hero`).
    pub text_sizes: BTreeSet<String>,
    /// Font family names (e.g. "display" from `--font-display`).
    pub fonts: BTreeSet<String>,
    /// Names of captured `@utility` blocks, for literal safelist inclusion.
    pub utility_names: BTreeSet<String>,
    /// Captured `@utility` blocks, verbatim.
    pub utilities: Vec<UtilityBlock>,
}

impl TokenSet {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no tokens of any category were discovered.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.spacing.is_empty()
            && self.text_sizes.is_empty()
            && self.fonts.is_empty()
            && self.utilities.is_empty()
    }

    /// Total number of discovered tokens across all categories.
    pub fn len(&self) -> usize {
        self.colors.len()
            + self.spacing.len()
            + self.text_sizes.len()
            + self.fonts.len()
            + self.utilities.len()
    }

    /// Union another set into this one.
    ///
    /// Utility blocks are deduplicated by name; the first definition wins,
    /// matching how the styling compiler treats duplicate `@utility` names.
    pub fn merge(&mut self, other: TokenSet) {
        self.colors.extend(other.colors);
        self.spacing.extend(other.spacing);
        self.text_sizes.extend(other.text_sizes);
        self.fonts.extend(other.fonts);
        for block in other.utilities {
            if self.utility_names.insert(block.name.clone()) {
                self.utilities.push(block);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_set() {
        let tokens = TokenSet::new();
        assert!(tokens.is_empty());
        assert_eq!(tokens.len(), 0);
    }

    #[test]
    fn test_merge_unions_categories() {
        let mut a = TokenSet::new();
        a.colors.insert("primary".to_string());
        a.spacing.insert("sm".to_string());

        let mut b = TokenSet::new();
        b.colors.insert("accent".to_string());
        b.colors.insert("primary".to_string());

        a.merge(b);
        assert_eq!(a.colors.len(), 2);
        assert_eq!(a.spacing.len(), 1);
    }

    #[test]
    fn test_merge_dedupes_utilities_by_name() {
        let mut a = TokenSet::new();
        a.utility_names.insert("glass".to_string());
        a.utilities.push(UtilityBlock {
            name: "glass".to_string(),
            text: "@utility glass { backdrop-filter: blur(8px); }".to_string(),
        });

        let mut b = TokenSet::new();
        b.utility_names.insert("glass".to_string());
        b.utilities.push(UtilityBlock {
            name: "glass".to_string(),
            text: "@utility glass { opacity: 0.5; }".to_string(),
        });
        b.utility_names.insert("stripe".to_string());
        b.utilities.push(UtilityBlock {
            name: "stripe".to_string(),
            text: "@utility stripe { background: repeating-linear-gradient(red, blue); }"
                .to_string(),
        });

        a.merge(b);
        assert_eq!(a.utilities.len(), 2);
        // First definition wins.
        assert!(a.utilities[0].text.contains("backdrop-filter"));
    }
}
