//! Class merging with last-writer-wins conflict resolution.
//!
//! Tokens are Tailwind-style utility classes. Two tokens conflict when they
//! carry the same variant modifiers (`hover:`, `focus-visible:`, ...) and set
//! the same CSS property group. When they conflict, the later token survives.
//! Some groups also cover narrower ones: `p-4` removes an earlier `px-2`, but
//! `px-2` after `p-4` keeps both.
//!
//! ```
//! use plinth_core::style::merge_classes;
//!
//! let merged = merge_classes(["px-4 py-2 text-sm", "px-6 text-lg"]);
//! assert_eq!(merged, "py-2 px-6 text-lg");
//! ```

use std::collections::HashSet;

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const SHADOW_SIZES: &[&str] = &["", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

const DISPLAYS: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "contents",
    "flow-root",
    "hidden",
];

const POSITIONS: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

/// Merge any number of class strings into one, resolving conflicts so that
/// later tokens win.
pub fn merge_classes<I, S>(inputs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    merge_tokens(inputs).join(" ")
}

/// Same as [`merge_classes`] but returns the surviving tokens in order.
pub fn merge_tokens<I, S>(inputs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens: Vec<String> = inputs
        .into_iter()
        .flat_map(|s| {
            s.as_ref()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    // Walk backwards so the last writer claims its groups first.
    let mut claimed: HashSet<String> = HashSet::new();
    let mut kept: Vec<String> = Vec::with_capacity(tokens.len());

    for token in tokens.into_iter().rev() {
        let parsed = ParsedClass::parse(&token);
        let scope = parsed.scope();

        match class_group(parsed.utility) {
            Some(group) => {
                let key = format!("{}{}", scope, group);
                if claimed.contains(&key) {
                    continue;
                }
                claimed.insert(key);
                for covered in covered_groups(group) {
                    claimed.insert(format!("{}{}", scope, covered));
                }
            }
            None => {
                let key = format!("{}={}", scope, parsed.utility);
                if !claimed.insert(key) {
                    continue;
                }
            }
        }
        kept.push(token);
    }

    kept.reverse();
    kept
}

/// A class token split into its parts
#[derive(Debug, PartialEq, Eq)]
struct ParsedClass<'a> {
    modifiers: Vec<&'a str>,
    important: bool,
    utility: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;

        for (i, c) in token.char_indices() {
            match c {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    modifiers.push(&token[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }

        let mut utility = &token[start..];
        let mut important = false;
        if let Some(rest) = utility.strip_prefix('!') {
            utility = rest;
            important = true;
        } else if let Some(rest) = utility.strip_suffix('!') {
            utility = rest;
            important = true;
        }

        // Negative values (`-mb-px`) conflict with their positive forms.
        let utility = utility.strip_prefix('-').unwrap_or(utility);

        Self {
            modifiers,
            important,
            utility,
        }
    }

    fn scope(&self) -> String {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort_unstable();
        let mut scope = modifiers.join(":");
        scope.push(':');
        if self.important {
            scope.push('!');
        }
        scope
    }
}

/// `value_of("px-4", "px") == Some("4")`, `value_of("border", "border") == Some("")`
fn value_of<'a>(utility: &'a str, prefix: &str) -> Option<&'a str> {
    if utility == prefix {
        return Some("");
    }
    utility.strip_prefix(prefix)?.strip_prefix('-')
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

fn is_length(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if is_arbitrary(value) {
        let inner = &value[1..value.len() - 1];
        return inner.ends_with("px") || inner.ends_with("rem") || inner.ends_with("em");
    }
    value.chars().all(|c| c.is_ascii_digit())
}

/// Map a utility to the property group it sets. `None` means the utility is
/// not known to conflict with anything but an exact duplicate.
fn class_group(utility: &str) -> Option<&'static str> {
    if DISPLAYS.contains(&utility) {
        return Some("display");
    }
    if POSITIONS.contains(&utility) {
        return Some("position");
    }

    match utility {
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => {
            return Some("flex-direction")
        }
        "flex-wrap" | "flex-nowrap" | "flex-wrap-reverse" => return Some("flex-wrap"),
        "truncate" | "text-ellipsis" | "text-clip" => return Some("text-overflow"),
        "break-words" | "break-all" | "break-normal" | "break-keep" => {
            return Some("word-break")
        }
        "sr-only" | "not-sr-only" => return Some("sr"),
        "underline" | "overline" | "line-through" | "no-underline" => {
            return Some("text-decoration-line")
        }
        "italic" | "not-italic" => return Some("font-style"),
        "tabular-nums" | "proportional-nums" | "normal-nums" => {
            return Some("font-variant-numeric")
        }
        "transform" | "transform-none" | "transform-gpu" | "transform-cpu" => {
            return Some("transform")
        }
        _ => {}
    }

    let spacing: &[(&str, &'static str)] = &[
        ("p", "p"),
        ("px", "px"),
        ("py", "py"),
        ("pt", "pt"),
        ("pr", "pr"),
        ("pb", "pb"),
        ("pl", "pl"),
        ("m", "m"),
        ("mx", "mx"),
        ("my", "my"),
        ("mt", "mt"),
        ("mr", "mr"),
        ("mb", "mb"),
        ("ml", "ml"),
        ("gap-x", "gap-x"),
        ("gap-y", "gap-y"),
        ("w", "w"),
        ("min-w", "min-w"),
        ("max-w", "max-w"),
        ("h", "h"),
        ("min-h", "min-h"),
        ("max-h", "max-h"),
        ("size", "size"),
        ("top", "top"),
        ("right", "right"),
        ("bottom", "bottom"),
        ("left", "left"),
        ("inset", "inset"),
        ("z", "z"),
        ("opacity", "opacity"),
        ("cursor", "cursor"),
        ("pointer-events", "pointer-events"),
        ("overflow-x", "overflow-x"),
        ("overflow-y", "overflow-y"),
        ("overflow", "overflow"),
        ("whitespace", "whitespace"),
        ("leading", "leading"),
        ("tracking", "tracking"),
        ("duration", "duration"),
        ("ease", "ease"),
        ("delay", "delay"),
        ("animate", "animate"),
        ("scale", "scale"),
        ("rotate", "rotate"),
        ("translate-x", "translate-x"),
        ("translate-y", "translate-y"),
        ("content", "content"),
        ("backdrop-blur", "backdrop-blur"),
        ("ring-offset", "ring-offset"),
        ("outline-offset", "outline-offset"),
        ("shrink", "shrink"),
        ("flex-shrink", "shrink"),
        ("grow", "grow"),
        ("flex-grow", "grow"),
    ];
    for (prefix, group) in spacing {
        let bare = matches!(*group, "shrink" | "grow");
        match value_of(utility, prefix) {
            // `ring-offset-2` is a width, `ring-offset-white` a colour.
            Some(v) if *group == "ring-offset" && !v.is_empty() => {
                return Some(if is_length(v) {
                    "ring-offset-w"
                } else {
                    "ring-offset-color"
                });
            }
            Some(v) if !v.is_empty() || bare => return Some(group),
            _ => {}
        }
    }

    if let Some(v) = value_of(utility, "gap") {
        if !v.is_empty() {
            return Some("gap");
        }
    }

    if utility.starts_with("items-") {
        return Some("align-items");
    }
    if utility.starts_with("justify-items-") {
        return Some("justify-items");
    }
    if utility.starts_with("justify-self-") {
        return Some("justify-self");
    }
    if utility.starts_with("justify-") {
        return Some("justify-content");
    }
    if utility.starts_with("transition") {
        return Some("transition");
    }

    if let Some(v) = value_of(utility, "text") {
        if FONT_SIZES.contains(&v) || (is_arbitrary(v) && is_length(v)) {
            return Some("font-size");
        }
        if TEXT_ALIGNS.contains(&v) {
            return Some("text-align");
        }
        if matches!(v, "wrap" | "nowrap" | "balance" | "pretty") {
            return Some("text-wrap");
        }
        if !v.is_empty() {
            return Some("text-color");
        }
    }

    if let Some(v) = value_of(utility, "font") {
        if FONT_WEIGHTS.contains(&v) {
            return Some("font-weight");
        }
        if !v.is_empty() {
            return Some("font-family");
        }
    }

    if let Some(v) = value_of(utility, "bg") {
        return Some(match v {
            "fixed" | "local" | "scroll" => "bg-attachment",
            "auto" | "cover" | "contain" => "bg-size",
            "none" => "bg-image",
            v if v.starts_with("gradient") => "bg-image",
            _ => "bg-color",
        });
    }

    if let Some(v) = value_of(utility, "border") {
        return Some(border_group(v));
    }

    if let Some(v) = value_of(utility, "rounded") {
        return Some(rounded_group(v));
    }

    if let Some(v) = value_of(utility, "shadow") {
        if SHADOW_SIZES.contains(&v) || is_arbitrary(v) {
            return Some("shadow");
        }
        return Some("shadow-color");
    }

    if let Some(v) = value_of(utility, "ring") {
        if v.is_empty() || is_length(v) || v == "inset" {
            return Some("ring-w");
        }
        return Some("ring-color");
    }

    if let Some(v) = value_of(utility, "outline") {
        if v.is_empty() || matches!(v, "none" | "dashed" | "dotted" | "double") {
            return Some("outline-style");
        }
        if is_length(v) {
            return Some("outline-w");
        }
        return Some("outline-color");
    }

    None
}

fn border_group(value: &str) -> &'static str {
    if value.is_empty() || is_length(value) {
        return "border-w";
    }
    if BORDER_STYLES.contains(&value) {
        return "border-style";
    }

    let (side, rest) = match value.split_once('-') {
        Some((side, rest)) => (side, Some(rest)),
        None => (value, None),
    };

    let side_group = |width: &'static str, color: &'static str| match rest {
        None => width,
        Some(r) if is_length(r) => width,
        Some(_) => color,
    };

    match side {
        "x" => side_group("border-w-x", "border-color-x"),
        "y" => side_group("border-w-y", "border-color-y"),
        "t" => side_group("border-w-t", "border-color-t"),
        "r" => side_group("border-w-r", "border-color-r"),
        "b" => side_group("border-w-b", "border-color-b"),
        "l" => side_group("border-w-l", "border-color-l"),
        "s" => side_group("border-w-s", "border-color-s"),
        "e" => side_group("border-w-e", "border-color-e"),
        _ => "border-color",
    }
}

fn rounded_group(value: &str) -> &'static str {
    let side = value.split_once('-').map(|(s, _)| s).unwrap_or(value);
    match side {
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "s" => "rounded-s",
        "e" => "rounded-e",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        _ => "rounded",
    }
}

/// Narrower groups removed along with `group`
fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "inset" => &["top", "right", "bottom", "left"],
        "size" => &["w", "h"],
        "overflow" => &["overflow-x", "overflow-y"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
            "border-w-s",
            "border-w-e",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
            "border-color-s",
            "border-color-e",
        ],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-s",
            "rounded-e",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-b" => &["rounded-bl", "rounded-br"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_padding_wins() {
        assert_eq!(merge_classes(["px-4 py-2", "px-6 py-3"]), "px-6 py-3");
    }

    #[test]
    fn shorthand_covers_axes_but_not_the_reverse() {
        assert_eq!(merge_classes(["px-2 py-1", "p-4"]), "p-4");
        assert_eq!(merge_classes(["p-4", "px-2"]), "p-4 px-2");
    }

    #[test]
    fn text_size_and_colour_do_not_conflict() {
        assert_eq!(
            merge_classes(["text-sm text-gray-500", "text-blue-600"]),
            "text-sm text-blue-600"
        );
        assert_eq!(merge_classes(["text-sm", "text-lg"]), "text-lg");
        assert_eq!(merge_classes(["text-left", "text-center"]), "text-center");
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            merge_classes(["bg-white hover:bg-gray-100", "bg-blue-600"]),
            "hover:bg-gray-100 bg-blue-600"
        );
        assert_eq!(
            merge_classes(["focus:ring-2 hover:focus:ring-4", "focus:hover:ring-1"]),
            "focus:ring-2 focus:hover:ring-1"
        );
    }

    #[test]
    fn border_width_side_and_colour() {
        let merged = merge_classes(["border-b border-gray-200", "flex-col border-r border-b-0"]);
        assert_eq!(merged, "border-gray-200 flex-col border-r border-b-0");

        assert_eq!(
            merge_classes(["border-b-2 border-transparent", "border-blue-600"]),
            "border-b-2 border-blue-600"
        );
        assert_eq!(merge_classes(["border-b", "border-none"]), "border-b border-none");
    }

    #[test]
    fn display_and_flex_direction() {
        assert_eq!(merge_classes(["flex", "hidden"]), "hidden");
        assert_eq!(merge_classes(["flex flex-row", "flex-col"]), "flex flex-col");
    }

    #[test]
    fn rounded_sides() {
        assert_eq!(merge_classes(["rounded-b-lg", "rounded-md"]), "rounded-md");
        assert_eq!(merge_classes(["rounded-md", "rounded-b-lg"]), "rounded-md rounded-b-lg");
        assert_eq!(merge_classes(["rounded-lg", "rounded-full"]), "rounded-full");
    }

    #[test]
    fn shadow_size_and_colour() {
        assert_eq!(
            merge_classes(["shadow-inner shadow-gray-400/60", "shadow-sm"]),
            "shadow-gray-400/60 shadow-sm"
        );
    }

    #[test]
    fn arbitrary_values_keep_their_colons() {
        let merged = merge_classes([
            "active:shadow-[inset_0_4px_8px_rgba(0,0,0,0.4)]",
            "active:shadow-[inset_0_4px_8px_rgba(0,0,0,0.2)]",
        ]);
        assert_eq!(merged, "active:shadow-[inset_0_4px_8px_rgba(0,0,0,0.2)]");
    }

    #[test]
    fn negative_margin_conflicts_with_positive() {
        assert_eq!(merge_classes(["mb-2", "-mb-px"]), "-mb-px");
    }

    #[test]
    fn unknown_utilities_only_dedupe() {
        assert_eq!(
            merge_classes(["custom-tabs foo", "custom-tabs bar"]),
            "foo custom-tabs bar"
        );
    }

    #[test]
    fn whitespace_and_empty_inputs() {
        assert_eq!(merge_classes(["\n   inline-flex  \n items-center ", "", "  "]), "inline-flex items-center");
        assert_eq!(merge_classes(Vec::<String>::new()), "");
    }

    #[test]
    fn important_is_its_own_scope() {
        assert_eq!(merge_classes(["!p-2", "p-4"]), "!p-2 p-4");
    }

    #[test]
    fn ring_offset_width_vs_colour() {
        assert_eq!(
            merge_classes(["ring-offset-2 ring-offset-white", "ring-offset-4"]),
            "ring-offset-white ring-offset-4"
        );
    }
}
