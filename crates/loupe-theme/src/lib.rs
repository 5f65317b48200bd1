//! Design-token extraction and safelist generation for Loupe previews.
//!
//! This crate is the pure core of the preview styling pipeline:
//!
//! - [`extract`] parses raw theme CSS text into a categorized [`TokenSet`]
//! - [`safelist::generate`] expands token sets into an exhaustive
//!   utility-class inclusion stylesheet the styling compiler can consume
//!
//! No I/O happens here. Scanning directories and writing output files is the
//! server crate's job; this crate maps text to text, deterministically.
//!
//! # Example
//!
//! ```rust
//! use loupe_theme::{extract, safelist};
//!
//! let tokens = extract("--color-brand-500: #f0f;\n--spacing-3xl: 4rem;");
//! assert!(tokens.colors.contains("brand"));
//!
//! let css = safelist::generate(&safelist::baseline(), &tokens);
//! assert!(css.starts_with("@import \"tailwindcss\";"));
//! ```

mod extract;
pub mod safelist;
mod tokens;

pub use extract::extract;
pub use tokens::{TokenSet, UtilityBlock};
