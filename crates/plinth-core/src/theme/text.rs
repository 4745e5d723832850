//! Text theme and class resolution

use serde::{Deserialize, Serialize};

use super::{lookup, overlay, pick, style_map, MergeTheme, StyleMap};
use crate::style::ClassList;

named_enum! {
    /// Typographic scale
    pub enum TextVariant ("text variant") {
        Heading3xl => "heading3xl",
        Heading2xl => "heading2xl",
        HeadingXl => "headingXl",
        HeadingLg => "headingLg",
        HeadingMd => "headingMd",
        HeadingSm => "headingSm",
        HeadingXs => "headingXs",
        BodyLg => "bodyLg",
        #[default]
        BodyMd => "bodyMd",
        BodySm => "bodySm",
        BodyXs => "bodyXs",
    }
}

named_enum! {
    /// Text colour by meaning
    pub enum TextTone ("text tone") {
        #[default]
        Base => "base",
        Subdued => "subdued",
        Disabled => "disabled",
        Success => "success",
        Critical => "critical",
        Caution => "caution",
        Inherit => "inherit",
        Inverse => "text-inverse",
        InverseSecondary => "text-inverse-secondary",
    }
}

named_enum! {
    pub enum TextAlignment ("text alignment") {
        #[default]
        Start => "start",
        Center => "center",
        End => "end",
        Justify => "justify",
    }
}

named_enum! {
    pub enum TextFontWeight ("font weight") {
        Regular => "regular",
        #[default]
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
    }
}

named_enum! {
    pub enum TextDecoration ("text decoration") {
        #[default]
        LineThrough => "line-through",
    }
}

named_enum! {
    /// The element a `Text` renders as
    pub enum TextElement ("text element") {
        #[default]
        P => "p",
        Span => "span",
        Div => "div",
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
        Strong => "strong",
        Em => "em",
        Code => "code",
        Label => "label",
        Legend => "legend",
        Dt => "dt",
        Dd => "dd",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRootTheme {
    pub base: String,
    pub variants: StyleMap,
    pub tones: StyleMap,
    pub alignments: StyleMap,
    pub font_weights: StyleMap,
    pub decorations: StyleMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextRootOverride {
    pub base: Option<String>,
    pub variants: Option<StyleMap>,
    pub tones: Option<StyleMap>,
    pub alignments: Option<StyleMap>,
    pub font_weights: Option<StyleMap>,
    pub decorations: Option<StyleMap>,
}

/// Effective text theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTheme {
    pub root: TextRootTheme,
}

/// Partial text theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextThemeOverride {
    pub root: Option<TextRootOverride>,
}

impl Default for TextTheme {
    fn default() -> Self {
        Self {
            root: TextRootTheme {
                base: "text-gray-900".to_string(),
                variants: style_map(&[
                    ("heading3xl", "text-4xl font-bold leading-tight"),
                    ("heading2xl", "text-3xl font-bold leading-tight"),
                    ("headingXl", "text-2xl font-bold leading-tight"),
                    ("headingLg", "text-xl font-semibold leading-normal"),
                    ("headingMd", "text-lg font-semibold leading-normal"),
                    ("headingSm", "text-base font-semibold leading-normal"),
                    ("headingXs", "text-sm font-semibold leading-normal"),
                    ("bodyLg", "text-lg font-normal leading-relaxed"),
                    ("bodyMd", "text-base font-normal leading-relaxed"),
                    ("bodySm", "text-sm font-normal leading-normal"),
                    ("bodyXs", "text-xs font-normal leading-normal"),
                ]),
                tones: style_map(&[
                    ("base", "text-gray-900"),
                    ("subdued", "text-gray-600"),
                    ("disabled", "text-gray-400"),
                    ("success", "text-green-600"),
                    ("critical", "text-red-600"),
                    ("caution", "text-yellow-600"),
                    ("inherit", "text-inherit"),
                    ("text-inverse", "text-white"),
                    ("text-inverse-secondary", "text-gray-200"),
                ]),
                alignments: style_map(&[
                    ("start", "text-left"),
                    ("center", "text-center"),
                    ("end", "text-right"),
                    ("justify", "text-justify"),
                ]),
                font_weights: style_map(&[
                    ("regular", "font-normal"),
                    ("medium", "font-medium"),
                    ("semibold", "font-semibold"),
                    ("bold", "font-bold"),
                ]),
                decorations: style_map(&[("line-through", "line-through")]),
            },
        }
    }
}

impl MergeTheme for TextTheme {
    type Override = TextThemeOverride;

    fn merge(&self, custom: Option<&TextThemeOverride>) -> Self {
        let Some(root) = custom.and_then(|c| c.root.as_ref()) else {
            return self.clone();
        };

        Self {
            root: TextRootTheme {
                base: pick(&self.root.base, root.base.as_ref()),
                variants: overlay(&self.root.variants, root.variants.as_ref()),
                tones: overlay(&self.root.tones, root.tones.as_ref()),
                alignments: overlay(&self.root.alignments, root.alignments.as_ref()),
                font_weights: overlay(&self.root.font_weights, root.font_weights.as_ref()),
                decorations: overlay(&self.root.decorations, root.decorations.as_ref()),
            },
        }
    }
}

/// Resolved text props that affect styling
///
/// Optional fields add nothing when unset, so the variant's own weight and
/// the base colour apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub variant: TextVariant,
    pub tone: Option<TextTone>,
    pub alignment: Option<TextAlignment>,
    pub font_weight: Option<TextFontWeight>,
    pub decoration: Option<TextDecoration>,
    pub break_word: bool,
    pub truncate: bool,
    pub numeric: bool,
    pub visually_hidden: bool,
    pub custom_classes: Option<String>,
}

/// Classes for the text element
pub fn text_classes(style: &TextStyle, theme: &TextTheme) -> String {
    let root = &theme.root;

    ClassList::new()
        .push(&root.base)
        .push(lookup(&root.variants, style.variant.as_str()))
        .push_opt(style.tone.map(|t| lookup(&root.tones, t.as_str())))
        .push_opt(style.alignment.map(|a| lookup(&root.alignments, a.as_str())))
        .push_opt(style.font_weight.map(|w| lookup(&root.font_weights, w.as_str())))
        .push_opt(style.decoration.map(|d| lookup(&root.decorations, d.as_str())))
        .push_if(style.break_word, "break-words")
        .push_if(style.truncate, "truncate")
        .push_if(style.numeric, "font-mono tabular-nums")
        .push_if(style.visually_hidden, "sr-only")
        .push_opt(style.custom_classes.as_deref())
        .build()
}
