//! Design-token extraction from raw theme CSS.
//!
//! `extract` is a pure function over CSS text. It never performs I/O and
//! never fails: malformed CSS (unterminated blocks, stray braces) simply
//! yields a partial or empty `TokenSet` rather than an error, so one broken
//! theme file cannot abort a whole workspace scan.

use crate::tokens::{TokenSet, UtilityBlock};
use once_cell::sync::Lazy;
use regex::Regex;

/// Any custom-property declaration: `--<name>:`.
static CUSTOM_PROP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--([A-Za-z][A-Za-z0-9-]*)\s*:").expect("valid regex"));

/// Stricter per-category patterns, anchored to known prefixes. Used for the
/// second pass inside `@theme` blocks.
static THEME_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--color-([A-Za-z][A-Za-z0-9-]*)\s*:").expect("valid regex"));
static THEME_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--(?:spacing|size)-([A-Za-z0-9][A-Za-z0-9-]*)\s*:").expect("valid regex"));
static THEME_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--(?:text|font-size)-([A-Za-z0-9][A-Za-z0-9-]*)\s*:").expect("valid regex"));
static THEME_FONT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"--font(?:-family)?-([A-Za-z][A-Za-z0-9-]*)\s*:").expect("valid regex")
});

/// `@utility <name> {` opener. The body is captured by brace matching.
static UTILITY_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@utility\s+([A-Za-z][A-Za-z0-9_-]*)\s*\{").expect("valid regex"));

/// Identifier shape required for color and font names in the safelist.
static IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").expect("valid regex"));

/// Scale names may lead with a digit (`3xl`, `2xs`), unlike colors/fonts.
static SCALE_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]*$").expect("valid regex"));

/// Semantic/system token names that must not be treated as palette colors
/// when inferred heuristically from a shade suffix. Explicit `--color-*`
/// declarations are exempt: the author named the category themselves.
const SEMANTIC_TOKENS: &[&str] = &[
    "background",
    "foreground",
    "primary",
    "secondary",
    "muted",
    "accent",
    "destructive",
    "border",
    "input",
    "ring",
    "card",
    "popover",
    "chart",
    "sidebar",
];

/// Extract categorized design tokens from raw CSS text.
///
/// Performs three passes:
/// 1. every custom-property declaration, classified by its category prefix
///    (with a shade-suffix heuristic for uncategorized palette variables),
/// 2. `@theme` blocks re-scanned with stricter anchored per-category patterns,
/// 3. `@utility` blocks captured verbatim, name and body.
pub fn extract(css: &str) -> TokenSet {
    let mut tokens = TokenSet::new();

    for caps in CUSTOM_PROP.captures_iter(css) {
        classify(&caps[1], &mut tokens);
    }

    for body in block_bodies(css, "@theme") {
        scan_theme_block(body, &mut tokens);
    }

    capture_utilities(css, &mut tokens);

    tokens
}

/// Classify one custom-property name into a token category.
fn classify(var_name: &str, tokens: &mut TokenSet) {
    if let Some(rest) = var_name.strip_prefix("color-") {
        insert_color(rest, tokens);
        return;
    }
    if let Some(rest) = var_name
        .strip_prefix("spacing-")
        .or_else(|| var_name.strip_prefix("size-"))
    {
        if is_scale_ident(rest) {
            tokens.spacing.insert(rest.to_string());
        }
        return;
    }
    if let Some(rest) = var_name.strip_prefix("font-size-") {
        if is_scale_ident(rest) {
            tokens.text_sizes.insert(rest.to_string());
        }
        return;
    }
    if let Some(rest) = var_name.strip_prefix("text-") {
        if is_scale_ident(rest) {
            tokens.text_sizes.insert(rest.to_string());
        }
        return;
    }
    if let Some(rest) = var_name
        .strip_prefix("font-family-")
        .or_else(|| var_name.strip_prefix("font-"))
    {
        if is_token_ident(rest) {
            tokens.fonts.insert(rest.to_string());
        }
        return;
    }

    // Uncategorized variable with a numeric shade suffix, e.g. `--brand-500`.
    // Best-effort: treat the base as a palette color unless it collides with
    // a semantic token name.
    if let Some(base) = shade_base(var_name) {
        if is_token_ident(base) && !SEMANTIC_TOKENS.contains(&base) {
            tokens.colors.insert(base.to_string());
        }
    }
}

/// Insert a color token, stripping a trailing shade segment when present
/// (`primary-500` contributes "primary", not "primary-500").
fn insert_color(name: &str, tokens: &mut TokenSet) {
    let base = shade_base(name).unwrap_or(name);
    if is_token_ident(base) {
        tokens.colors.insert(base.to_string());
    }
}

/// If `name` ends in a two/three-digit shade segment, return the base name.
fn shade_base(name: &str) -> Option<&str> {
    let (base, suffix) = name.rsplit_once('-')?;
    let digits = suffix.len();
    if (2..=3).contains(&digits) && suffix.bytes().all(|b| b.is_ascii_digit()) && !base.is_empty() {
        Some(base)
    } else {
        None
    }
}

fn is_token_ident(name: &str) -> bool {
    IDENT.is_match(name)
}

fn is_scale_ident(name: &str) -> bool {
    SCALE_IDENT.is_match(name)
}

/// Re-scan an `@theme` block body with the anchored per-category patterns.
fn scan_theme_block(body: &str, tokens: &mut TokenSet) {
    for caps in THEME_COLOR.captures_iter(body) {
        insert_color(&caps[1], tokens);
    }
    for caps in THEME_SPACING.captures_iter(body) {
        if is_scale_ident(&caps[1]) {
            tokens.spacing.insert(caps[1].to_string());
        }
    }
    for caps in THEME_TEXT.captures_iter(body) {
        if is_scale_ident(&caps[1]) {
            tokens.text_sizes.insert(caps[1].to_string());
        }
    }
    for caps in THEME_FONT.captures_iter(body) {
        let name = &caps[1];
        // `--font-size-*` matches the looser font pattern too; text sizes
        // were already captured above.
        if let Some(size) = name.strip_prefix("size-") {
            if is_scale_ident(size) {
                tokens.text_sizes.insert(size.to_string());
            }
            continue;
        }
        if is_token_ident(name) {
            tokens.fonts.insert(name.to_string());
        }
    }
}

/// Capture `@utility` blocks verbatim: the declared name for literal
/// safelist inclusion, and the full text span for re-emission.
fn capture_utilities(css: &str, tokens: &mut TokenSet) {
    for caps in UTILITY_OPEN.captures_iter(css) {
        let whole = caps.get(0).expect("match 0 always present");
        let open = whole.end() - 1;
        // Unterminated block: not captured, scan continues.
        let Some(end) = block_end(css, open) else {
            continue;
        };
        let name = caps[1].to_string();
        let text = css[whole.start()..end].to_string();
        if tokens.utility_names.insert(name.clone()) {
            tokens.utilities.push(UtilityBlock { name, text });
        }
    }
}

/// Yield the body text of each `<at_rule> ... { body }` block in `css`.
/// Blocks with no matching closing brace are skipped.
fn block_bodies<'a>(css: &'a str, at_rule: &str) -> Vec<&'a str> {
    let mut bodies = Vec::new();
    let mut search = 0;
    while let Some(found) = css[search..].find(at_rule) {
        let at = search + found;
        let Some(brace) = css[at..].find('{') else {
            break;
        };
        let open = at + brace;
        match block_end(css, open) {
            Some(end) => {
                bodies.push(&css[open + 1..end - 1]);
                search = end;
            }
            None => break,
        }
    }
    bodies
}

/// Given the index of an opening brace, return the index one past its
/// matching closing brace, or `None` if the block never closes.
fn block_end(text: &str, open: usize) -> Option<usize> {
    debug_assert_eq!(text.as_bytes().get(open), Some(&b'{'));
    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}
