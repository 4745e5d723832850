use dioxus::prelude::*;
use plinth_core::layout::Spacing;
use plinth_core::tabs::{Orientation, TabDescriptor, TabsSize, TabsVariant};
use plinth_core::theme::button::{ButtonSize, ButtonVariant};
use plinth_core::{ResolvedThemes, ThemeSet};
use plinth_ui::{
    use_tab_group, Button, HStack, Tab, TabGroup, TabGroupConfig, TabGroupOptions, TabItem,
    TabList, TabPanel, Tabs, Text, VStack,
};
use tracing::info;

use super::Section;

fn account_tabs() -> Vec<TabItem> {
    vec![
        TabItem::new("profile", "Profile").content("Name, avatar and bio."),
        TabItem::new("security", "Security")
            .badge(2)
            .content("Two pending security reviews."),
        TabItem::new("billing", "Billing").content("Plan and invoices."),
        TabItem::new("admin", "Admin").disabled().content("Restricted."),
    ]
}

#[component]
pub fn TabsStory() -> Element {
    let themes = use_context::<ThemeSet>();
    let theme = themes.tabs.clone();
    let mut selected = use_signal(|| "security".to_string());
    let mut changes = use_signal(Vec::<String>::new);
    let history = changes.read().join(" → ");

    rsx! {
        Section { title: "Variants", note: "Uncontrolled; arrow keys, Home and End move between tabs.",
            VStack { spacing: Spacing::Lg, width: "full",
                for variant in TabsVariant::ALL.iter().copied() {
                    Tabs {
                        key: "{variant}",
                        tabs: account_tabs(),
                        variant,
                        theme: theme.clone(),
                        panels_container_classes: "pt-3 text-sm text-gray-600",
                    }
                }
            }
        }
        Section {
            title: "Controlled",
            note: "The selection only moves once the parent writes the new value back.",
            HStack { spacing: Spacing::Sm,
                for value in ["profile", "security", "billing"] {
                    Button {
                        key: "{value}",
                        size: ButtonSize::Sm,
                        variant: if selected() == value { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                        onclick: move |_| selected.set(value.to_string()),
                        "{value}"
                    }
                }
            }
            Tabs {
                tabs: account_tabs(),
                model_value: selected,
                variant: TabsVariant::Pills,
                theme: theme.clone(),
                custom_classes: "mt-4",
                on_update_model_value: move |value: String| selected.set(value),
                on_change: move |value: String| {
                    info!(%value, "tab changed");
                    changes.write().push(value);
                },
            }
            Text { custom_classes: "mt-2", "Changes: {history}" }
        }
        Section { title: "Vertical and lazy", note: "Panels mount on first visit and stay mounted.",
            Tabs {
                tabs: account_tabs(),
                orientation: Orientation::Vertical,
                size: TabsSize::Sm,
                lazy: true,
                theme: theme.clone(),
                tab_list_classes: "w-40",
                panels_container_classes: "pl-4",
            }
        }
        Section { title: "Composed", note: "Tab list and panels laid out by hand around one group.",
            ComposedTabs {}
        }
    }
}

#[component]
fn ComposedTabs() -> Element {
    let themes = use_context::<ResolvedThemes>();
    let descriptors = vec![
        TabDescriptor::new("inbox", "Inbox").badge(12),
        TabDescriptor::new("sent", "Sent"),
        TabDescriptor::new("archive", "Archive"),
    ];
    let group = use_tab_group(TabGroupOptions {
        tabs: descriptors.clone(),
        config: TabGroupConfig {
            variant: TabsVariant::Cards,
            animated: true,
            theme: themes.tabs.clone(),
            ..Default::default()
        },
        ..Default::default()
    });

    rsx! {
        TabGroup { group: group.clone(),
            TabList { group: group.clone(), show_indicator: true,
                for tab in descriptors.iter() {
                    Tab {
                        key: "{tab.value}",
                        group: group.clone(),
                        value: tab.value.clone(),
                        badge: tab.badge.clone(),
                        "{tab.label}"
                    }
                }
            }
            div { class: "rounded-b-md border border-gray-200 p-4",
                for tab in descriptors.iter() {
                    TabPanel { key: "{tab.value}", group: group.clone(), value: tab.value.clone(),
                        Text { "Messages in {tab.label}" }
                    }
                }
            }
        }
    }
}
