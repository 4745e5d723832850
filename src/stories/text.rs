use dioxus::prelude::*;
use plinth_core::layout::Spacing;
use plinth_core::theme::text::{
    TextAlignment, TextDecoration, TextElement, TextFontWeight, TextTone, TextVariant,
};
use plinth_core::ThemeSet;
use plinth_ui::{Text, VStack};

use super::Section;

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog";

#[component]
pub fn TextStory() -> Element {
    let themes = use_context::<ThemeSet>();
    let theme = themes.text.clone();

    rsx! {
        Section { title: "Variants",
            VStack { spacing: Spacing::Xs,
                for variant in TextVariant::ALL.iter().copied() {
                    Text { key: "{variant}", variant, theme: theme.clone(), "{variant}: {SAMPLE}" }
                }
            }
        }
        Section { title: "Tones",
            VStack { spacing: Spacing::Xs,
                for tone in TextTone::ALL.iter().copied() {
                    Text {
                        key: "{tone}",
                        tone,
                        theme: theme.clone(),
                        custom_classes: if matches!(tone, TextTone::Inverse | TextTone::InverseSecondary) { "bg-gray-900 px-2" } else { "" },
                        "{tone}"
                    }
                }
            }
        }
        Section { title: "Weight and alignment",
            VStack { spacing: Spacing::Xs, width: "full",
                for weight in TextFontWeight::ALL.iter().copied() {
                    Text { key: "{weight}", font_weight: weight, theme: theme.clone(), "{weight}" }
                }
                for alignment in TextAlignment::ALL.iter().copied() {
                    Text { key: "{alignment}", alignment, theme: theme.clone(), "Aligned {alignment}" }
                }
            }
        }
        Section { title: "Flags",
            VStack { spacing: Spacing::Xs,
                Text { decoration: TextDecoration::LineThrough, theme: theme.clone(), "Struck through" }
                Text { numeric: true, theme: theme.clone(), "1,234,567.89" }
                div { class: "w-48",
                    Text { truncate: true, theme: theme.clone(), "{SAMPLE} and keeps going past the edge" }
                }
                Text { visually_hidden: true, theme: theme.clone(), "Only screen readers see this" }
                Text { element: TextElement::Code, variant: TextVariant::BodySm, theme: theme.clone(), "TextElement::Code" }
            }
        }
    }
}
