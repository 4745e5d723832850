//! Theme configuration files.
//!
//! A theme file is a JSON object with one optional key per component family:
//!
//! ```json
//! {
//!   "button": { "root": { "variants": { "primary": "bg-green-600 text-white" } } },
//!   "tabs": { "tabList": { "base": "flex bg-gray-50" } }
//! }
//! ```
//!
//! Each value is a partial override merged onto the family's default theme.
//! Unknown keys are ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::{
    ButtonTheme, ButtonThemeOverride, MergeTheme, TabsTheme, TabsThemeOverride, TagTheme,
    TagThemeOverride, TextTheme, TextThemeOverride,
};

/// Component family names accepted in theme files
pub const FAMILIES: &[&str] = &["button", "tag", "tabs", "text"];

/// Optional overrides for every component family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSet {
    pub button: Option<ButtonThemeOverride>,
    pub tag: Option<TagThemeOverride>,
    pub tabs: Option<TabsThemeOverride>,
    pub text: Option<TextThemeOverride>,
}

/// Effective themes for every family
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedThemes {
    pub button: ButtonTheme,
    pub tag: TagTheme,
    pub tabs: TabsTheme,
    pub text: TextTheme,
}

impl ThemeSet {
    pub fn from_json_str(json: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a theme file from disk
    pub fn load(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let set = Self::from_json_str(&json)?;
        debug!(path = %path.display(), families = ?set.families(), "loaded theme file");
        Ok(set)
    }

    /// Replace one family's override from a JSON fragment
    pub fn set_family(&mut self, family: &str, json: &str) -> ThemeResult<()> {
        match family {
            "button" => self.button = Some(serde_json::from_str(json)?),
            "tag" => self.tag = Some(serde_json::from_str(json)?),
            "tabs" => self.tabs = Some(serde_json::from_str(json)?),
            "text" => self.text = Some(serde_json::from_str(json)?),
            other => return Err(ThemeError::UnknownFamily(other.to_string())),
        }
        Ok(())
    }

    /// Names of the families that carry an override
    pub fn families(&self) -> Vec<&'static str> {
        let present = [
            self.button.is_some(),
            self.tag.is_some(),
            self.tabs.is_some(),
            self.text.is_some(),
        ];
        FAMILIES
            .iter()
            .zip(present)
            .filter_map(|(name, set)| set.then_some(*name))
            .collect()
    }

    /// Merge every override onto the defaults
    pub fn resolve(&self) -> ResolvedThemes {
        ResolvedThemes {
            button: ButtonTheme::default().merge(self.button.as_ref()),
            tag: TagTheme::default().merge(self.tag.as_ref()),
            tabs: TabsTheme::default().merge(self.tabs.as_ref()),
            text: TextTheme::default().merge(self.text.as_ref()),
        }
    }
}
