//! Safelist stylesheet generation.
//!
//! The utility-class compiler only emits classes it can statically see in
//! source files. A previewed component's classes are computed at runtime from
//! props and theme tokens, so the pipeline regenerates an exhaustive
//! inclusion stylesheet instead: the base framework import followed by
//! `@source inline(...)` directives covering every token the preview might
//! touch, plus the discovered custom utilities.
//!
//! Output is deterministic: for set-equal inputs the text is byte-identical.
//! Baseline scales are fixed arrays; discovered tokens are kept in ordered
//! sets and appended in sorted order.

use crate::tokens::TokenSet;
use std::collections::BTreeSet;

/// Standard framework palette names.
const BASELINE_COLORS: &[&str] = &[
    "amber", "blue", "cyan", "emerald", "fuchsia", "gray", "green", "indigo", "lime", "neutral",
    "orange", "pink", "purple", "red", "rose", "sky", "slate", "stone", "teal", "violet", "yellow",
    "zinc",
];

/// Fixed shade ladder every color is crossed with.
const SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Standard spacing scale.
const BASELINE_SPACING: &[&str] = &[
    "0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11",
    "12", "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60", "64",
    "72", "80", "96",
];

/// Standard type scale.
const BASELINE_TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

/// Standard font families.
const BASELINE_FONTS: &[&str] = &["sans", "serif", "mono"];

/// Configured responsive breakpoints. Every directive is duplicated under
/// each of these prefixes.
const BREAKPOINTS: &[&str] = &["sm", "md", "lg", "xl", "2xl"];

/// Interaction-state variants applied to color utilities.
const STATE_VARIANTS: &[&str] = &[
    "hover", "focus", "active", "disabled", "dark", "group-hover", "peer-hover",
];

/// Color-consuming utility prefixes: fill, background, text, border, ring,
/// shadow, and gradient stops.
const COLOR_PROPERTIES: &[&str] = &[
    "bg", "border", "fill", "from", "ring", "shadow", "text", "to", "via",
];

/// Spacing-consuming utility prefixes.
const SPACING_PROPERTIES: &[&str] = &[
    "p", "px", "py", "pt", "pr", "pb", "pl", "m", "mx", "my", "mt", "mr", "mb", "ml", "gap",
    "gap-x", "gap-y", "space-x", "space-y", "w", "h", "min-w", "min-h", "max-w", "max-h",
    "inset", "inset-x", "inset-y", "top", "right", "bottom", "left",
];

/// Negative-margin forms.
const NEGATIVE_SPACING_PROPERTIES: &[&str] = &["m", "mx", "my", "mt", "mr", "mb", "ml"];

/// Fixed layout/flex/grid enumeration.
const LAYOUT_UTILITIES: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "hidden",
    "flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse", "flex-wrap", "flex-nowrap",
    "flex-1", "flex-auto", "flex-initial", "flex-none", "grow", "shrink",
    "items-start", "items-end", "items-center", "items-baseline", "items-stretch",
    "justify-start", "justify-end", "justify-center", "justify-between", "justify-around",
    "justify-evenly", "self-start", "self-end", "self-center", "self-stretch",
    "grid-cols-1", "grid-cols-2", "grid-cols-3", "grid-cols-4", "grid-cols-5", "grid-cols-6",
    "grid-cols-12", "col-span-1", "col-span-2", "col-span-3", "col-span-4", "col-span-6",
    "col-span-12", "grid-flow-row", "grid-flow-col",
    "relative", "absolute", "fixed", "sticky", "static",
    "overflow-hidden", "overflow-auto", "overflow-scroll", "overflow-visible",
    "rounded", "rounded-sm", "rounded-md", "rounded-lg", "rounded-xl", "rounded-2xl",
    "rounded-full", "rounded-none",
    "border", "border-2", "border-4", "border-t", "border-r", "border-b", "border-l",
    "shadow", "shadow-sm", "shadow-md", "shadow-lg", "shadow-xl", "shadow-none",
    "font-thin", "font-light", "font-normal", "font-medium", "font-semibold", "font-bold",
    "font-extrabold", "italic", "not-italic", "underline", "line-through", "no-underline",
    "truncate", "text-left", "text-center", "text-right", "text-justify",
    "uppercase", "lowercase", "capitalize", "normal-case",
    "w-full", "w-auto", "w-fit", "w-screen", "h-full", "h-auto", "h-fit", "h-screen",
    "min-h-screen", "max-w-full",
    "transition", "transition-colors", "transition-opacity", "transition-transform",
    "duration-150", "duration-200", "duration-300", "duration-500",
    "ease-in", "ease-out", "ease-in-out", "ease-linear",
    "opacity-0", "opacity-25", "opacity-50", "opacity-75", "opacity-100",
    "cursor-pointer", "cursor-default", "cursor-not-allowed", "select-none",
    "pointer-events-none", "sr-only",
];

/// Baseline framework tokens the generator always includes.
pub fn baseline() -> TokenSet {
    let mut tokens = TokenSet::new();
    tokens.colors.extend(BASELINE_COLORS.iter().map(|s| s.to_string()));
    tokens.spacing.extend(BASELINE_SPACING.iter().map(|s| s.to_string()));
    tokens
        .text_sizes
        .extend(BASELINE_TEXT_SIZES.iter().map(|s| s.to_string()));
    tokens.fonts.extend(BASELINE_FONTS.iter().map(|s| s.to_string()));
    tokens
}

/// Generate the complete safelist stylesheet text.
///
/// Unions `baseline` and `discovered` tokens, deduplicates, and emits
/// inclusion directives. Always valid output: with an empty `discovered` set
/// the result is the baseline-only stylesheet.
pub fn generate(baseline: &TokenSet, discovered: &TokenSet) -> String {
    let colors = merged(&baseline.colors, &discovered.colors);
    let spacing = merged(&baseline.spacing, &discovered.spacing);
    let text_sizes = merged(&baseline.text_sizes, &discovered.text_sizes);
    let fonts = merged(&baseline.fonts, &discovered.fonts);

    let mut out = String::with_capacity(16 * 1024);
    out.push_str("@import \"tailwindcss\";\n");
    out.push('\n');
    out.push_str("/* Generated by loupe; regenerated on every theme change. Do not edit. */\n");

    let variant_group = brace_group_with_empty(STATE_VARIANTS, ":");
    let color_group = brace_group(&colors);
    let shade_group = brace_group_static(SHADES);

    out.push_str("\n/* Color utilities */\n");
    for prefix in breakpoint_prefixes() {
        for property in COLOR_PROPERTIES {
            push_directive(
                &mut out,
                &format!("{prefix}{variant_group}{property}-{color_group}-{shade_group}"),
            );
        }
    }

    let spacing_group = brace_group(&spacing);
    let spacing_props = brace_group_static(SPACING_PROPERTIES);
    let negative_props = brace_group_static(NEGATIVE_SPACING_PROPERTIES);

    out.push_str("\n/* Spacing utilities */\n");
    for prefix in breakpoint_prefixes() {
        push_directive(&mut out, &format!("{prefix}{spacing_props}-{spacing_group}"));
        push_directive(&mut out, &format!("{prefix}-{negative_props}-{spacing_group}"));
    }

    let text_group = brace_group(&text_sizes);
    let font_group = brace_group(&fonts);

    out.push_str("\n/* Typography utilities */\n");
    for prefix in breakpoint_prefixes() {
        push_directive(&mut out, &format!("{prefix}text-{text_group}"));
        push_directive(&mut out, &format!("{prefix}font-{font_group}"));
    }

    let layout_group = brace_group_static(LAYOUT_UTILITIES);

    out.push_str("\n/* Layout primitives */\n");
    for prefix in breakpoint_prefixes() {
        push_directive(&mut out, &format!("{prefix}{layout_group}"));
    }

    if !discovered.utility_names.is_empty() {
        out.push_str("\n/* Discovered custom utilities */\n");
        let names: Vec<String> = discovered.utility_names.iter().cloned().collect();
        push_directive(&mut out, &brace_group(&names));

        let mut blocks: Vec<_> = discovered.utilities.iter().collect();
        blocks.sort_by(|a, b| a.name.cmp(&b.name));
        for block in blocks {
            out.push('\n');
            out.push_str(&block.text);
            out.push('\n');
        }
    }

    out
}

/// Breakpoint prefixes for directive duplication: the bare form first, then
/// one per configured breakpoint.
fn breakpoint_prefixes() -> impl Iterator<Item = String> {
    std::iter::once(String::new()).chain(BREAKPOINTS.iter().map(|bp| format!("{bp}:")))
}

/// Merge a baseline set with discovered tokens, baseline order first, then
/// sorted discovered extras.
fn merged(baseline: &BTreeSet<String>, discovered: &BTreeSet<String>) -> Vec<String> {
    let mut tokens: Vec<String> = baseline.iter().cloned().collect();
    for token in discovered {
        if !baseline.contains(token) {
            tokens.push(token.clone());
        }
    }
    tokens
}

fn push_directive(out: &mut String, pattern: &str) {
    out.push_str("@source inline(\"");
    out.push_str(pattern);
    out.push_str("\");\n");
}

fn brace_group(tokens: &[String]) -> String {
    format!("{{{}}}", tokens.join(","))
}

fn brace_group_static(tokens: &[&str]) -> String {
    format!("{{{}}}", tokens.join(","))
}

/// Brace group of variants with a leading empty alternative, so the bare
/// utility is included alongside each `variant:` form.
fn brace_group_with_empty(tokens: &[&str], suffix: &str) -> String {
    let alternatives: Vec<String> = std::iter::once(String::new())
        .chain(tokens.iter().map(|t| format!("{t}{suffix}")))
        .collect();
    format!("{{{}}}", alternatives.join(","))
}
