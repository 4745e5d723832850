use dioxus::prelude::*;
use plinth_core::layout::{Align, Spacing};
use plinth_core::theme::tag::{TagSize, TagVariant};
use plinth_core::ThemeSet;
use plinth_ui::{HStack, Tag, Text};
use tracing::debug;

use super::Section;

#[component]
pub fn TagStory() -> Element {
    let themes = use_context::<ThemeSet>();
    let theme = themes.tag.clone();
    let mut pressed = use_signal(|| false);
    let mut filters = use_signal(|| vec!["rust".to_string(), "dioxus".to_string(), "tailwind".to_string()]);

    rsx! {
        Section { title: "Variants",
            HStack { spacing: Spacing::Sm, wrap: true,
                for variant in TagVariant::ALL.iter().copied() {
                    Tag { key: "{variant}", variant, theme: theme.clone(), label: variant.as_str() }
                }
            }
        }
        Section { title: "Sizes",
            HStack { spacing: Spacing::Sm, align: Align::Center,
                for size in TagSize::ALL.iter().copied() {
                    Tag { key: "{size}", size, variant: TagVariant::Info, theme: theme.clone(), "Size {size}" }
                }
            }
        }
        Section { title: "Toggle", note: "Clickable tags respond to Enter and Space.",
            HStack { spacing: Spacing::Sm, align: Align::Center,
                Tag {
                    clickable: true,
                    pressed: pressed(),
                    variant: if pressed() { TagVariant::Success } else { TagVariant::Default },
                    theme: theme.clone(),
                    on_click: move |_| pressed.toggle(),
                    if pressed() { "Following" } else { "Follow" }
                }
                Tag { clickable: true, disabled: true, theme: theme.clone(), "Disabled" }
            }
        }
        Section { title: "Closable",
            HStack { spacing: Spacing::Sm, wrap: true,
                for filter in filters() {
                    Tag {
                        key: "{filter}",
                        closable: true,
                        variant: TagVariant::Pending,
                        theme: theme.clone(),
                        on_close: {
                            let filter = filter.clone();
                            move |_: ()| {
                                debug!(%filter, "tag closed");
                                filters.write().retain(|f| f != &filter);
                            }
                        },
                        "{filter}"
                    }
                }
            }
            if filters.read().is_empty() {
                Text { custom_classes: "mt-2", "All filters removed." }
            }
        }
    }
}
