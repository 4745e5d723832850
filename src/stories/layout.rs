use dioxus::prelude::*;
use plinth_core::layout::{Align, Justify, Spacing, SpacingKind, SpacingSide};
use plinth_ui::{HStack, SpacingBox, Text, VStack};

use super::Section;

#[component]
fn Swatch(#[props(into)] label: String) -> Element {
    rsx! {
        div { class: "rounded bg-indigo-100 px-3 py-2 text-xs text-indigo-900", "{label}" }
    }
}

#[component]
pub fn LayoutStory() -> Element {
    let spacings = [Spacing::None, Spacing::Xs, Spacing::Base, Spacing::Lg, Spacing::Xl2];

    rsx! {
        Section { title: "HStack spacing",
            VStack { spacing: Spacing::Sm,
                for spacing in spacings {
                    HStack { key: "{spacing}", spacing, align: Align::Center,
                        Text { custom_classes: "w-16 text-xs", "{spacing}" }
                        Swatch { label: "A" }
                        Swatch { label: "B" }
                        Swatch { label: "C" }
                    }
                }
            }
        }
        Section { title: "Justify",
            VStack { spacing: Spacing::Sm, width: "full",
                for justify in [Justify::Start, Justify::Center, Justify::Between, Justify::Evenly] {
                    HStack {
                        key: "{justify}",
                        justify,
                        width: "full",
                        padding: "2",
                        class: "rounded border border-dashed border-gray-300",
                        Swatch { label: justify.as_str() }
                        Swatch { label: "end" }
                    }
                }
            }
        }
        Section { title: "SpacingBox",
            HStack { spacing: Spacing::Md,
                SpacingBox { size: Spacing::Lg, kind: SpacingKind::Padding, class: "bg-gray-200",
                    Swatch { label: "p-6" }
                }
                SpacingBox { size: Spacing::Md, kind: SpacingKind::Padding, direction: SpacingSide::X, class: "bg-gray-200",
                    Swatch { label: "px-4" }
                }
                SpacingBox { size: Spacing::Sm, kind: SpacingKind::Margin, direction: SpacingSide::Top, class: "bg-gray-200",
                    Swatch { label: "mt-2" }
                }
            }
        }
    }
}
