//! Tag theme and class resolution
//!
//! Clickable tags take their colours from `root.variants` (with hover and
//! active states); static tags use `static.variants`, which carry no
//! interaction states.

use serde::{Deserialize, Serialize};

use super::{
    lookup, overlay, pick, style_map, BaseSection, BaseSectionOverride, MergeTheme, SizedSection,
    SizedSectionOverride, StyleMap,
};
use crate::style::ClassList;

named_enum! {
    /// Tag colour variants
    pub enum TagVariant ("tag variant") {
        #[default]
        Default => "default",
        Success => "success",
        Info => "info",
        Warning => "warning",
        Danger => "danger",
        Pending => "pending",
    }
}

named_enum! {
    /// Tag sizes
    pub enum TagSize ("tag size") {
        Xs => "xs",
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRootTheme {
    pub base: String,
    pub variants: StyleMap,
    pub sizes: StyleMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagRootOverride {
    pub base: Option<String>,
    pub variants: Option<StyleMap>,
    pub sizes: Option<StyleMap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStaticTheme {
    pub variants: StyleMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagStaticOverride {
    pub variants: Option<StyleMap>,
}

/// Effective tag theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTheme {
    pub root: TagRootTheme,
    pub content: BaseSection,
    pub icon: SizedSection,
    pub r#static: TagStaticTheme,
}

/// Partial tag theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagThemeOverride {
    pub root: Option<TagRootOverride>,
    pub content: Option<BaseSectionOverride>,
    pub icon: Option<SizedSectionOverride>,
    #[serde(rename = "static")]
    pub r#static: Option<TagStaticOverride>,
}

impl Default for TagTheme {
    fn default() -> Self {
        Self {
            root: TagRootTheme {
                base: "inline-flex items-center justify-center font-medium transition-all duration-200 \
                       focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 \
                       disabled:cursor-not-allowed relative"
                    .to_string(),
                variants: style_map(&[
                    ("default", "bg-gray-100 text-gray-700 hover:bg-gray-200 focus:ring-gray-400 active:bg-gray-200 active:shadow-inner active:shadow-gray-400/60 border border-transparent"),
                    ("success", "bg-green-100 text-green-700 hover:bg-green-200 focus:ring-green-400 active:bg-green-200 active:shadow-inner active:shadow-green-400/60 border border-transparent"),
                    ("info", "bg-blue-100 text-blue-700 hover:bg-blue-200 focus:ring-blue-400 active:bg-blue-200 active:shadow-inner active:shadow-blue-400/60 border border-transparent"),
                    ("warning", "bg-yellow-100 text-yellow-700 hover:bg-yellow-200 focus:ring-yellow-400 active:bg-yellow-200 active:shadow-inner active:shadow-yellow-400/60 border border-transparent"),
                    ("danger", "bg-red-100 text-red-700 hover:bg-red-200 focus:ring-red-400 active:bg-red-200 active:shadow-inner active:shadow-red-400/60 border border-transparent"),
                    ("pending", "bg-orange-100 text-orange-700 hover:bg-orange-200 focus:ring-orange-400 active:bg-orange-200 active:shadow-inner active:shadow-orange-400/60 border border-transparent"),
                ]),
                sizes: style_map(&[
                    ("xs", "px-2 py-0.5 text-xs"),
                    ("sm", "px-2.5 py-1 text-sm"),
                    ("md", "px-3 py-1.5 text-sm"),
                    ("lg", "px-4 py-2 text-base"),
                    ("xl", "px-5 py-2.5 text-lg"),
                ]),
            },
            content: BaseSection::new("flex items-center gap-1.5"),
            icon: SizedSection::new(
                "flex-shrink-0",
                &[
                    ("xs", "w-3 h-3"),
                    ("sm", "w-3.5 h-3.5"),
                    ("md", "w-4 h-4"),
                    ("lg", "w-5 h-5"),
                    ("xl", "w-6 h-6"),
                ],
            ),
            r#static: TagStaticTheme {
                variants: style_map(&[
                    ("default", "bg-gray-100 text-gray-700 border border-transparent"),
                    ("success", "bg-green-100 text-green-700 border border-transparent"),
                    ("info", "bg-blue-100 text-blue-700 border border-transparent"),
                    ("warning", "bg-yellow-100 text-yellow-700 border border-transparent"),
                    ("danger", "bg-red-100 text-red-700 border border-transparent"),
                    ("pending", "bg-orange-100 text-orange-700 border border-transparent"),
                ]),
            },
        }
    }
}

impl MergeTheme for TagTheme {
    type Override = TagThemeOverride;

    fn merge(&self, custom: Option<&TagThemeOverride>) -> Self {
        let Some(custom) = custom else {
            return self.clone();
        };
        let root = custom.root.as_ref();
        let statics = custom.r#static.as_ref();

        Self {
            root: TagRootTheme {
                base: pick(&self.root.base, root.and_then(|r| r.base.as_ref())),
                variants: overlay(&self.root.variants, root.and_then(|r| r.variants.as_ref())),
                sizes: overlay(&self.root.sizes, root.and_then(|r| r.sizes.as_ref())),
            },
            content: self.content.merge(custom.content.as_ref()),
            icon: self.icon.merge(custom.icon.as_ref()),
            r#static: TagStaticTheme {
                variants: overlay(
                    &self.r#static.variants,
                    statics.and_then(|s| s.variants.as_ref()),
                ),
            },
        }
    }
}

/// Resolved tag props that affect styling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStyle {
    pub variant: TagVariant,
    pub size: TagSize,
    pub clickable: bool,
    pub disabled: bool,
    pub custom_classes: Option<String>,
}

/// Classes for the tag root element
pub fn tag_classes(style: &TagStyle, theme: &TagTheme) -> String {
    let variant = if style.clickable {
        lookup(&theme.root.variants, style.variant.as_str())
    } else {
        lookup(&theme.r#static.variants, style.variant.as_str())
    };

    ClassList::new()
        .push(&theme.root.base)
        .push(variant)
        .push(lookup(&theme.root.sizes, style.size.as_str()))
        .push("rounded-full")
        .push_if(style.clickable && !style.disabled, "cursor-pointer")
        .push_if(style.disabled, "opacity-50 cursor-not-allowed")
        .push_opt(style.custom_classes.as_deref())
        .build()
}

/// Classes for the content wrapper
pub fn tag_content_classes(theme: &TagTheme) -> String {
    ClassList::new().push(&theme.content.base).build()
}

/// Classes for an icon wrapper
pub fn tag_icon_classes(style: &TagStyle, theme: &TagTheme) -> String {
    ClassList::new()
        .push(&theme.icon.base)
        .push(theme.icon.size(style.size.as_str()))
        .build()
}
