//! Component themes and theme merging.
//!
//! Each component family has an effective theme (every leaf filled in) and
//! an override type with every field optional. Merging is a shallow overlay:
//!
//! - a scalar leaf (`base`) in the override replaces the default leaf
//! - a map leaf (`variants`, `sizes`, ...) is merged key by key; keys missing
//!   from the override keep their default, unknown keys are carried along
//! - no deeper merging happens below a map entry: an override entry is a
//!   complete replacement
//! - an absent override returns the default unchanged
//!
//! Maps are keyed by the option's wire name (`"primary"`, `"md"`, ...), the
//! same names theme files use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod button;
pub mod tabs;
pub mod tag;
pub mod text;

pub use button::{ButtonTheme, ButtonThemeOverride};
pub use tabs::{TabsTheme, TabsThemeOverride};
pub use tag::{TagTheme, TagThemeOverride};
pub use text::{TextTheme, TextThemeOverride};

/// Ordered map from option wire name to a style leaf
pub type StyleMap<V = String> = BTreeMap<String, V>;

/// A theme that can be overlaid with a partial override
pub trait MergeTheme: Default + Clone {
    /// The partial form, every field optional
    type Override;

    /// Overlay `custom` onto `self`
    fn merge(&self, custom: Option<&Self::Override>) -> Self;
}

/// `merge(default, custom) -> effective`
pub fn merge_theme<T: MergeTheme>(default: &T, custom: Option<&T::Override>) -> T {
    default.merge(custom)
}

/// Resolve a scalar leaf
pub(crate) fn pick(default: &str, custom: Option<&String>) -> String {
    custom.cloned().unwrap_or_else(|| default.to_string())
}

/// Resolve a map leaf key by key
pub(crate) fn overlay<V: Clone>(default: &StyleMap<V>, custom: Option<&StyleMap<V>>) -> StyleMap<V> {
    let mut merged = default.clone();
    if let Some(custom) = custom {
        for (key, value) in custom {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Look up a map leaf, empty when the key is missing
pub(crate) fn lookup<'a>(map: &'a StyleMap, key: &str) -> &'a str {
    map.get(key).map(String::as_str).unwrap_or("")
}

/// Build a [`StyleMap`] from literal entries
pub(crate) fn style_map(entries: &[(&str, &str)]) -> StyleMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A section with only a base leaf
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseSection {
    pub base: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseSectionOverride {
    pub base: Option<String>,
}

impl BaseSection {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
        }
    }

    pub(crate) fn merge(&self, custom: Option<&BaseSectionOverride>) -> Self {
        Self {
            base: pick(&self.base, custom.and_then(|c| c.base.as_ref())),
        }
    }
}

/// A section with a base leaf and per-size leaves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizedSection {
    pub base: String,
    pub sizes: StyleMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizedSectionOverride {
    pub base: Option<String>,
    pub sizes: Option<StyleMap>,
}

impl SizedSection {
    pub fn new(base: &str, sizes: &[(&str, &str)]) -> Self {
        Self {
            base: base.to_string(),
            sizes: style_map(sizes),
        }
    }

    /// Size leaf for `size`
    pub fn size(&self, size: &str) -> &str {
        lookup(&self.sizes, size)
    }

    pub(crate) fn merge(&self, custom: Option<&SizedSectionOverride>) -> Self {
        Self {
            base: pick(&self.base, custom.and_then(|c| c.base.as_ref())),
            sizes: overlay(&self.sizes, custom.and_then(|c| c.sizes.as_ref())),
        }
    }
}
