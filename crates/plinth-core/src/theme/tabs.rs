//! Tabs theme and class resolution for the tab list, tabs and panels

use serde::{Deserialize, Serialize};

use super::{lookup, overlay, pick, style_map, MergeTheme, StyleMap};
use crate::style::ClassList;

named_enum! {
    /// Tab strip styles
    pub enum TabsVariant ("tabs variant") {
        #[default]
        Default => "default",
        Pills => "pills",
        Underline => "underline",
        Cards => "cards",
    }
}

named_enum! {
    pub enum TabsSize ("tabs size") {
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
    }
}

named_enum! {
    /// Layout direction of the tab list
    pub enum Orientation ("orientation") {
        #[default]
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

impl Orientation {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

/// Classes for a tab in each selection state. Overrides replace the whole
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStateClasses {
    pub inactive: String,
    pub active: String,
}

impl TabStateClasses {
    fn new(inactive: &str, active: &str) -> Self {
        Self {
            inactive: inactive.to_string(),
            active: active.to_string(),
        }
    }

    pub fn for_state(&self, active: bool) -> &str {
        if active {
            &self.active
        } else {
            &self.inactive
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabListTheme {
    pub base: String,
    pub variants: StyleMap,
    pub sizes: StyleMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabListOverride {
    pub base: Option<String>,
    pub variants: Option<StyleMap>,
    pub sizes: Option<StyleMap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabTheme {
    pub base: String,
    pub variants: StyleMap<TabStateClasses>,
    pub sizes: StyleMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabOverride {
    pub base: Option<String>,
    pub variants: Option<StyleMap<TabStateClasses>>,
    pub sizes: Option<StyleMap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanelTheme {
    pub base: String,
    pub variants: StyleMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabPanelOverride {
    pub base: Option<String>,
    pub variants: Option<StyleMap>,
}

/// Effective tabs theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsTheme {
    pub tab_list: TabListTheme,
    pub tab: TabTheme,
    pub tab_panel: TabPanelTheme,
}

/// Partial tabs theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabsThemeOverride {
    pub tab_list: Option<TabListOverride>,
    pub tab: Option<TabOverride>,
    pub tab_panel: Option<TabPanelOverride>,
}

impl Default for TabsTheme {
    fn default() -> Self {
        let mut tab_variants = StyleMap::new();
        tab_variants.insert(
            "default".to_string(),
            TabStateClasses::new(
                "text-gray-500 hover:text-gray-700 border-b-2 border-transparent hover:border-gray-300",
                "text-blue-600 border-b-2 border-blue-600",
            ),
        );
        tab_variants.insert(
            "pills".to_string(),
            TabStateClasses::new(
                "text-gray-600 hover:text-gray-900 rounded-md hover:bg-white/50",
                "text-blue-600 bg-white rounded-md shadow-sm",
            ),
        );
        tab_variants.insert(
            "underline".to_string(),
            TabStateClasses::new("text-gray-500 hover:text-gray-700", "text-blue-600"),
        );
        tab_variants.insert(
            "cards".to_string(),
            TabStateClasses::new(
                "text-gray-500 hover:text-gray-700 border-b border-transparent hover:border-gray-300 bg-transparent",
                "text-blue-600 border-b border-blue-600 bg-white -mb-px",
            ),
        );

        Self {
            tab_list: TabListTheme {
                base: "flex bg-white".to_string(),
                variants: style_map(&[
                    ("default", "border-b border-gray-200"),
                    ("pills", "border-none bg-gray-100 rounded-lg p-1"),
                    ("underline", "border-b-2 border-gray-200"),
                    ("cards", "border-b border-gray-200 bg-gray-50"),
                ]),
                sizes: style_map(&[("sm", "text-sm"), ("md", "text-base"), ("lg", "text-lg")]),
            },
            tab: TabTheme {
                base: "inline-flex items-center justify-center px-4 py-2 font-medium \
                       transition-all duration-200 cursor-pointer \
                       focus:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 focus-visible:ring-blue-500 \
                       disabled:opacity-50 disabled:cursor-not-allowed"
                    .to_string(),
                variants: tab_variants,
                sizes: style_map(&[
                    ("sm", "px-3 py-1.5 text-sm"),
                    ("md", "px-4 py-2 text-base"),
                    ("lg", "px-6 py-3 text-lg"),
                ]),
            },
            tab_panel: TabPanelTheme {
                base: "focus:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 focus-visible:ring-blue-500"
                    .to_string(),
                variants: style_map(&[
                    ("default", "pt-6 px-6 pb-4"),
                    ("pills", "pt-6 px-6 pb-4"),
                    ("underline", "pt-6 px-6 pb-4"),
                    (
                        "cards",
                        "pt-6 px-6 pb-6 bg-white border-l border-r border-b border-gray-200 rounded-b-lg",
                    ),
                ]),
            },
        }
    }
}

impl MergeTheme for TabsTheme {
    type Override = TabsThemeOverride;

    fn merge(&self, custom: Option<&TabsThemeOverride>) -> Self {
        let Some(custom) = custom else {
            return self.clone();
        };
        let list = custom.tab_list.as_ref();
        let tab = custom.tab.as_ref();
        let panel = custom.tab_panel.as_ref();

        Self {
            tab_list: TabListTheme {
                base: pick(&self.tab_list.base, list.and_then(|l| l.base.as_ref())),
                variants: overlay(&self.tab_list.variants, list.and_then(|l| l.variants.as_ref())),
                sizes: overlay(&self.tab_list.sizes, list.and_then(|l| l.sizes.as_ref())),
            },
            tab: TabTheme {
                base: pick(&self.tab.base, tab.and_then(|t| t.base.as_ref())),
                variants: overlay(&self.tab.variants, tab.and_then(|t| t.variants.as_ref())),
                sizes: overlay(&self.tab.sizes, tab.and_then(|t| t.sizes.as_ref())),
            },
            tab_panel: TabPanelTheme {
                base: pick(&self.tab_panel.base, panel.and_then(|p| p.base.as_ref())),
                variants: overlay(
                    &self.tab_panel.variants,
                    panel.and_then(|p| p.variants.as_ref()),
                ),
            },
        }
    }
}

/// Badge shown after a tab label
pub const TAB_BADGE_CLASSES: &str =
    "ml-2 inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium bg-gray-100 text-gray-700";

/// Classes for the `role="tablist"` container
pub fn tab_list_classes(
    variant: TabsVariant,
    size: TabsSize,
    orientation: Orientation,
    custom: Option<&str>,
    theme: &TabsTheme,
) -> String {
    ClassList::new()
        .push(&theme.tab_list.base)
        .push(lookup(&theme.tab_list.variants, variant.as_str()))
        .push(lookup(&theme.tab_list.sizes, size.as_str()))
        .push_if(!orientation.is_horizontal(), "flex-col border-r border-b-0")
        .push("relative")
        .push_opt(custom)
        .build()
}

/// Resolved props of one tab that affect styling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStyle {
    pub variant: TabsVariant,
    pub size: TabsSize,
    pub orientation: Orientation,
    pub active: bool,
    pub custom_classes: Option<String>,
}

/// Classes for one `role="tab"` button
pub fn tab_classes(style: &TabStyle, theme: &TabsTheme) -> String {
    let state = theme
        .tab
        .variants
        .get(style.variant.as_str())
        .map(|v| v.for_state(style.active))
        .unwrap_or("");

    ClassList::new()
        .push(&theme.tab.base)
        .push(state)
        .push(lookup(&theme.tab.sizes, style.size.as_str()))
        .push_if(!style.orientation.is_horizontal(), "w-full justify-start")
        .push_opt(style.custom_classes.as_deref())
        .build()
}

/// Classes for one `role="tabpanel"` element
pub fn tab_panel_classes(variant: TabsVariant, custom: Option<&str>, theme: &TabsTheme) -> String {
    ClassList::new()
        .push(&theme.tab_panel.base)
        .push(lookup(&theme.tab_panel.variants, variant.as_str()))
        .push_opt(custom)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(classes: &str, class: &str) -> bool {
        classes.split(' ').any(|c| c == class)
    }

    fn list(variant: TabsVariant, size: TabsSize, orientation: Orientation) -> String {
        tab_list_classes(variant, size, orientation, None, &TabsTheme::default())
    }

    #[test]
    fn tab_list_variants() {
        assert!(has(&list(TabsVariant::Default, TabsSize::Md, Orientation::Horizontal), "border-gray-200"));
        let pills = list(TabsVariant::Pills, TabsSize::Md, Orientation::Horizontal);
        assert!(has(&pills, "bg-gray-100"));
        assert!(has(&pills, "rounded-lg"));
        assert!(!has(&pills, "bg-white"));
        assert!(has(&list(TabsVariant::Underline, TabsSize::Md, Orientation::Horizontal), "border-b-2"));
        assert!(has(&list(TabsVariant::Cards, TabsSize::Md, Orientation::Horizontal), "bg-gray-50"));
    }

    #[test]
    fn tab_list_sizes() {
        assert!(has(&list(TabsVariant::Default, TabsSize::Sm, Orientation::Horizontal), "text-sm"));
        assert!(has(&list(TabsVariant::Default, TabsSize::Md, Orientation::Horizontal), "text-base"));
        assert!(has(&list(TabsVariant::Default, TabsSize::Lg, Orientation::Horizontal), "text-lg"));
    }

    #[test]
    fn vertical_tab_list() {
        let c = list(TabsVariant::Default, TabsSize::Md, Orientation::Vertical);
        assert!(has(&c, "flex-col"));
        assert!(has(&c, "border-r"));
        assert!(has(&c, "border-b-0"));
        assert!(!has(&c, "border-b"));
        assert!(has(&c, "relative"));
    }

    #[test]
    fn tab_list_custom_classes() {
        let c = tab_list_classes(
            TabsVariant::Default,
            TabsSize::Md,
            Orientation::Horizontal,
            Some("custom-tab-list"),
            &TabsTheme::default(),
        );
        assert!(has(&c, "custom-tab-list"));
    }

    #[test]
    fn active_and_inactive_tab() {
        let theme = TabsTheme::default();
        let active = tab_classes(
            &TabStyle {
                active: true,
                ..Default::default()
            },
            &theme,
        );
        assert!(has(&active, "text-blue-600"));
        assert!(has(&active, "border-blue-600"));
        assert!(!has(&active, "text-gray-500"));

        let inactive = tab_classes(&TabStyle::default(), &theme);
        assert!(has(&inactive, "text-gray-500"));
        assert!(has(&inactive, "border-transparent"));
    }

    #[test]
    fn tab_size_overrides_base_padding() {
        let c = tab_classes(
            &TabStyle {
                size: TabsSize::Lg,
                ..Default::default()
            },
            &TabsTheme::default(),
        );
        assert!(has(&c, "px-6"));
        assert!(has(&c, "py-3"));
        assert!(!has(&c, "px-4"));
    }

    #[test]
    fn vertical_tab_is_full_width() {
        let c = tab_classes(
            &TabStyle {
                orientation: Orientation::Vertical,
                ..Default::default()
            },
            &TabsTheme::default(),
        );
        assert!(has(&c, "w-full"));
        assert!(has(&c, "justify-start"));
        assert!(!has(&c, "justify-center"));
    }

    #[test]
    fn cards_panel() {
        let c = tab_panel_classes(TabsVariant::Cards, Some("p-2"), &TabsTheme::default());
        assert!(has(&c, "rounded-b-lg"));
        assert!(has(&c, "p-2"));
        assert!(!has(&c, "pt-6"));
    }

    #[test]
    fn merge_tab_variant_record_is_replaced_whole() {
        let custom: TabsThemeOverride = serde_json::from_str(
            r#"{ "tabList": { "base": "custom-base-class" },
                 "tab": { "variants": { "pills": { "inactive": "a", "active": "b" } } } }"#,
        )
        .unwrap();
        let default = TabsTheme::default();
        let merged = default.merge(Some(&custom));

        assert_eq!(merged.tab_list.base, "custom-base-class");
        assert_eq!(merged.tab_list.variants, default.tab_list.variants);
        assert_eq!(merged.tab.variants["pills"], TabStateClasses::new("a", "b"));
        assert_eq!(merged.tab.variants["default"], default.tab.variants["default"]);
        assert_eq!(merged.tab_panel, default.tab_panel);
    }

    #[test]
    fn orientation_parse() {
        assert_eq!("vertical".parse::<Orientation>().unwrap(), Orientation::Vertical);
        assert!(Orientation::default().is_horizontal());
    }
}
