use dioxus::prelude::*;
use plinth_core::pointer::DynamicStyleOptions;
use plinth_core::theme::text::{TextTone, TextVariant};
use plinth_ui::{use_pointer_styles, Text, POINTER};

use super::Section;

#[component]
fn GlowCard(#[props(into)] title: String, radius: &'static str) -> Element {
    let glow = use_pointer_styles(DynamicStyleOptions {
        border_radius: radius.to_string(),
        ..Default::default()
    });

    rsx! {
        div {
            class: "dynamic-bg flex h-32 w-56 items-center justify-center text-white",
            style: glow.style(),
            onmounted: move |e| glow.mounted(e),
            onresize: move |e| glow.resized(e),
            "{title}"
        }
    }
}

#[component]
pub fn PointerStory() -> Element {
    let pointer = POINTER();
    let position = format!("({:.0}, {:.0})", pointer.x, pointer.y);

    rsx! {
        Section {
            title: "Pointer-lit surfaces",
            note: "Gradient angle and shadows follow the pointer relative to each card's centre.",
            div { class: "flex gap-10 p-6",
                GlowCard { title: "Pill", radius: "9999px !important" }
                GlowCard { title: "Card", radius: "16px" }
            }
            Text { variant: TextVariant::BodySm, tone: TextTone::Subdued,
                "Pointer at {position}"
            }
        }
    }
}
