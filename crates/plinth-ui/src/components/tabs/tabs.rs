//! Tabs Component
//!
//! All-in-one tab strip and panels driven by a list of [`TabItem`]s.
//!
//! Without `model_value` the component keeps its own selection, starting on
//! `default_value` (or the first tab). With `model_value` it is controlled:
//! clicks emit `on_update_model_value` and `on_change`, and the selection
//! only moves once the caller writes the new value back.

use dioxus::prelude::*;
use plinth_core::style::ClassList;
use plinth_core::tabs::{Orientation, TabDescriptor, TabsSize, TabsVariant};
use plinth_core::theme::{MergeTheme, TabsTheme, TabsThemeOverride};

use super::group::{use_tab_group, TabGroupConfig, TabGroupOptions};
use super::{Tab, TabGroup, TabList, TabPanel};

/// A tab descriptor plus the rendered pieces that cannot be serialized
#[derive(Clone, PartialEq)]
pub struct TabItem {
    pub descriptor: TabDescriptor,
    pub left_icon: Option<Element>,
    pub right_icon: Option<Element>,
    /// Panel content; falls back to the descriptor's text content
    pub panel: Option<Element>,
}

impl TabItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        TabDescriptor::new(value, label).into()
    }

    pub fn disabled(mut self) -> Self {
        self.descriptor.disabled = true;
        self
    }

    pub fn badge(mut self, badge: impl ToString) -> Self {
        self.descriptor.badge = Some(badge.to_string());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.descriptor.content = Some(content.into());
        self
    }

    pub fn panel(mut self, panel: Element) -> Self {
        self.panel = Some(panel);
        self
    }

    pub fn left_icon(mut self, icon: Element) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn right_icon(mut self, icon: Element) -> Self {
        self.right_icon = Some(icon);
        self
    }

    pub fn value(&self) -> &str {
        &self.descriptor.value
    }
}

impl From<TabDescriptor> for TabItem {
    fn from(descriptor: TabDescriptor) -> Self {
        Self {
            descriptor,
            left_icon: None,
            right_icon: None,
            panel: None,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TabsProps {
    pub tabs: Vec<TabItem>,
    /// Caller-owned selection; makes the component controlled
    #[props(default, into)]
    pub model_value: Option<ReadOnlySignal<String>>,
    #[props(default, into)]
    pub default_value: Option<String>,
    #[props(default)]
    pub variant: TabsVariant,
    #[props(default)]
    pub size: TabsSize,
    #[props(default)]
    pub orientation: Orientation,
    #[props(default = true)]
    pub animated: bool,
    /// Mount panels on first activation only
    #[props(default = false)]
    pub lazy: bool,
    #[props(default = true)]
    pub show_panels: bool,
    #[props(default, into)]
    pub custom_classes: Option<String>,
    #[props(default, into)]
    pub tab_list_classes: Option<String>,
    #[props(default, into)]
    pub panels_container_classes: Option<String>,
    #[props(default)]
    pub theme: Option<TabsThemeOverride>,
    #[props(default)]
    pub on_update_model_value: Option<EventHandler<String>>,
    #[props(default)]
    pub on_change: Option<EventHandler<String>>,
    #[props(default)]
    pub on_tab_click: Option<EventHandler<TabItem>>,
}

/// Tab strip with panels
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| "account".to_string());
///
/// rsx! {
///     Tabs {
///         tabs: vec![
///             TabItem::new("account", "Account").content("Account settings"),
///             TabItem::new("billing", "Billing").badge(2),
///             TabItem::new("admin", "Admin").disabled(),
///         ],
///         model_value: selected,
///         on_update_model_value: move |value| selected.set(value),
///         variant: TabsVariant::Underline,
///     }
/// }
/// ```
#[component]
pub fn Tabs(props: TabsProps) -> Element {
    let descriptors: Vec<TabDescriptor> = props.tabs.iter().map(|t| t.descriptor.clone()).collect();
    let group = use_tab_group(TabGroupOptions {
        model_value: props.model_value,
        default_value: props.default_value.clone(),
        tabs: descriptors,
        config: TabGroupConfig {
            variant: props.variant,
            size: props.size,
            orientation: props.orientation,
            animated: props.animated,
            lazy: props.lazy,
            theme: TabsTheme::default().merge(props.theme.as_ref()),
        },
        on_update_model_value: props.on_update_model_value,
        on_change: props.on_change,
    });

    let panels_class = ClassList::new()
        .push("flex-1")
        .push_opt(props.panels_container_classes.as_deref())
        .build();
    let on_tab_click = props.on_tab_click;

    rsx! {
        TabGroup { group: group.clone(), class: props.custom_classes.clone(),
            TabList {
                group: group.clone(),
                show_indicator: props.animated,
                custom_classes: props.tab_list_classes.clone(),
                for item in props.tabs.iter().cloned() {
                    Tab {
                        key: "{item.descriptor.value}",
                        group: group.clone(),
                        value: item.descriptor.value.clone(),
                        disabled: item.descriptor.disabled,
                        badge: item.descriptor.badge.clone(),
                        left_icon: item.left_icon.clone(),
                        right_icon: item.right_icon.clone(),
                        custom_classes: item.descriptor.custom_classes.clone(),
                        on_click: {
                            let item = item.clone();
                            move |_: String| {
                                if let Some(handler) = &on_tab_click {
                                    handler.call(item.clone());
                                }
                            }
                        },
                        "{item.descriptor.label}"
                    }
                }
            }
            if props.show_panels {
                div { class: "{panels_class}",
                    for item in props.tabs.iter().cloned() {
                        TabPanel {
                            key: "{item.descriptor.value}",
                            group: group.clone(),
                            value: item.descriptor.value.clone(),
                            custom_classes: item.descriptor.panel_classes.clone(),
                            {
                                match (item.panel.clone(), item.descriptor.content.clone()) {
                                    (Some(panel), _) => panel,
                                    (None, Some(text)) => rsx! { "{text}" },
                                    (None, None) => rsx! {},
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_item_builder() {
        let item = TabItem::new("inbox", "Inbox").badge(3).content("Messages").disabled();
        assert_eq!(item.value(), "inbox");
        assert_eq!(item.descriptor.badge.as_deref(), Some("3"));
        assert_eq!(item.descriptor.content.as_deref(), Some("Messages"));
        assert!(item.descriptor.disabled);
        assert!(item.panel.is_none());
    }

    fn three_tab_items() -> Vec<TabItem> {
        vec![
            TabItem::new("tab1", "Tab 1").content("First"),
            TabItem::new("tab2", "Tab 2").content("Second"),
            TabItem::new("tab3", "Tab 3").content("Third").disabled(),
        ]
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// The opening tag of the element carrying `attribute`
    fn open_tag<'a>(html: &'a str, attribute: &str) -> &'a str {
        let at = html
            .find(attribute)
            .unwrap_or_else(|| panic!("{attribute} not rendered in {html}"));
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..=end]
    }

    fn eager_tabs() -> Element {
        rsx! {
            Tabs { tabs: three_tab_items(), animated: false }
        }
    }

    fn lazy_tabs() -> Element {
        rsx! {
            Tabs { tabs: three_tab_items(), lazy: true }
        }
    }

    fn vertical_tabs() -> Element {
        rsx! {
            Tabs { tabs: three_tab_items(), orientation: Orientation::Vertical }
        }
    }

    #[test]
    fn tab_list_attributes() {
        let html = render(eager_tabs);
        let list = open_tag(&html, r#"role="tablist""#);
        assert!(list.contains(r#"aria-orientation="horizontal""#), "{list}");

        let html = render(vertical_tabs);
        let list = open_tag(&html, r#"role="tablist""#);
        assert!(list.contains(r#"aria-orientation="vertical""#), "{list}");
    }

    #[test]
    fn tab_attributes() {
        let html = render(eager_tabs);

        let first = open_tag(&html, r#"id="tab-tab1""#);
        assert!(first.contains(r#"role="tab""#), "{first}");
        assert!(first.contains(r#"aria-controls="panel-tab1""#), "{first}");
        assert!(first.contains(r#"aria-selected="true""#), "{first}");
        assert!(first.contains(r#"tabindex="0""#), "{first}");

        let second = open_tag(&html, r#"id="tab-tab2""#);
        assert!(second.contains(r#"aria-controls="panel-tab2""#), "{second}");
        assert!(second.contains(r#"aria-selected="false""#), "{second}");
        assert!(second.contains(r#"tabindex="-1""#), "{second}");

        let third = open_tag(&html, r#"id="tab-tab3""#);
        assert!(third.contains(r#"aria-selected="false""#), "{third}");
        assert!(third.contains(" disabled="), "{third}");
        assert!(!first.contains(" disabled="), "{first}");
    }

    #[test]
    fn panel_attributes() {
        let html = render(eager_tabs);
        assert_eq!(html.matches(r#"role="tabpanel""#).count(), 3);

        let active = open_tag(&html, r#"id="panel-tab1""#);
        assert!(active.contains(r#"aria-labelledby="tab-tab1""#), "{active}");
        assert!(active.contains(r#"tabindex="0""#), "{active}");
        assert!(!active.contains(" hidden="), "{active}");

        let inactive = open_tag(&html, r#"id="panel-tab2""#);
        assert!(inactive.contains(r#"aria-labelledby="tab-tab2""#), "{inactive}");
        assert!(inactive.contains(r#"tabindex="0""#), "{inactive}");
        assert!(inactive.contains(" hidden="), "{inactive}");
    }

    #[test]
    fn lazy_group_mounts_only_the_active_panel() {
        let html = render(lazy_tabs);
        assert_eq!(html.matches(r#"role="tabpanel""#).count(), 1);
        assert!(html.contains(r#"id="panel-tab1""#));
        assert!(!html.contains(r#"id="panel-tab2""#));
        assert!(html.contains("First"));
    }

    #[test]
    fn tab_item_from_descriptor() {
        let item: TabItem = TabDescriptor::new("a", "A").into();
        assert_eq!(item.descriptor.label, "A");
        assert!(item.left_icon.is_none());
    }
}
