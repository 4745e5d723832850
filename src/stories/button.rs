use dioxus::prelude::*;
use plinth_core::layout::Spacing;
use plinth_core::theme::button::{ButtonRounded, ButtonSize, ButtonVariant};
use plinth_core::ThemeSet;
use plinth_ui::{Button, HStack, Text};

use super::Section;

#[component]
pub fn ButtonStory() -> Element {
    let themes = use_context::<ThemeSet>();
    let theme = themes.button.clone();
    let mut clicks = use_signal(|| 0u32);
    let mut loading = use_signal(|| false);

    rsx! {
        Section { title: "Variants",
            HStack { spacing: Spacing::Sm, wrap: true,
                for variant in ButtonVariant::ALL.iter().copied() {
                    Button {
                        key: "{variant}",
                        variant,
                        theme: theme.clone(),
                        onclick: move |_| clicks += 1,
                        label: variant.as_str(),
                    }
                }
            }
            Text { custom_classes: "mt-3", "Clicked {clicks} times" }
        }
        Section { title: "Sizes",
            HStack { spacing: Spacing::Sm, align: plinth_core::layout::Align::Center,
                for size in ButtonSize::ALL.iter().copied() {
                    Button { key: "{size}", size, theme: theme.clone(), "Size {size}" }
                }
            }
        }
        Section { title: "Rounding",
            HStack { spacing: Spacing::Sm,
                for rounded in ButtonRounded::ALL.iter().copied() {
                    Button {
                        key: "{rounded}",
                        rounded,
                        variant: ButtonVariant::Secondary,
                        theme: theme.clone(),
                        "{rounded}"
                    }
                }
            }
        }
        Section { title: "States", note: "Disabled and loading buttons ignore clicks.",
            HStack { spacing: Spacing::Sm,
                Button { disabled: true, theme: theme.clone(), "Disabled" }
                Button { loading: loading(), theme: theme.clone(), onclick: move |_| clicks += 1, "Save" }
                Button {
                    variant: ButtonVariant::Tertiary,
                    theme: theme.clone(),
                    onclick: move |_| loading.toggle(),
                    if loading() { "Stop loading" } else { "Start loading" }
                }
            }
        }
        Section { title: "Icons",
            HStack { spacing: Spacing::Sm,
                Button { left_icon: rsx! { "←" }, theme: theme.clone(), "Back" }
                Button { right_icon: rsx! { "→" }, theme: theme.clone(), "Next" }
                Button { icon_only: true, aria_label: "Close", theme: theme.clone(), "✕" }
                Button { full_width: true, variant: ButtonVariant::Success, theme: theme.clone(), "Full width" }
            }
        }
    }
}
