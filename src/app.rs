use dioxus::prelude::*;
use plinth_core::ThemeSet;
use plinth_ui::PointerTracker;

use crate::stories::{
    ButtonStory, LayoutStory, Overview, PointerStory, TabsStory, TagStory, TextStory,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Keyframes for tab panel transitions and the pointer-lit card
const GALLERY_STYLES: &str = r#"
@keyframes slide-left-in {
    from { opacity: 0; transform: translateX(24px); }
    to { opacity: 1; transform: translateX(0); }
}
@keyframes slide-right-in {
    from { opacity: 0; transform: translateX(-24px); }
    to { opacity: 1; transform: translateX(0); }
}
.slide-left { animation: slide-left-in 300ms ease-in-out; }
.slide-right { animation: slide-right-in 300ms ease-in-out; }
.dynamic-bg {
    background: linear-gradient(var(--gradient-angle), #6366f1, #ec4899);
    box-shadow: var(--shadow-x) var(--shadow-y) 12px rgba(99, 102, 241, 0.45),
                var(--shadow-x2) var(--shadow-y2) 6px rgba(236, 72, 153, 0.35);
}
"#;

/// Gallery routes, one per story.
///
/// - `/` - Overview
/// - `/button`, `/tag`, `/text`, `/tabs`, `/layout`, `/pointer` - component stories
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Overview {},
        #[route("/button")]
        ButtonStory {},
        #[route("/tag")]
        TagStory {},
        #[route("/text")]
        TextStory {},
        #[route("/tabs")]
        TabsStory {},
        #[route("/layout")]
        LayoutStory {},
        #[route("/pointer")]
        PointerStory {},
}

/// Stories selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Story {
    Button,
    Tag,
    Text,
    Tabs,
    Layout,
    Pointer,
}

impl Story {
    pub const ALL: &'static [Story] = &[
        Story::Button,
        Story::Tag,
        Story::Text,
        Story::Tabs,
        Story::Layout,
        Story::Pointer,
    ];

    pub fn route(self) -> Route {
        match self {
            Story::Button => Route::ButtonStory {},
            Story::Tag => Route::TagStory {},
            Story::Text => Route::TextStory {},
            Story::Tabs => Route::TabsStory {},
            Story::Layout => Route::LayoutStory {},
            Story::Pointer => Route::PointerStory {},
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Story::Button => "Button",
            Story::Tag => "Tag",
            Story::Text => "Text",
            Story::Tabs => "Tabs",
            Story::Layout => "Layout",
            Story::Pointer => "Pointer",
        }
    }
}

/// Root application component.
///
/// Provides the theme overrides, global styles and routing.
#[component]
pub fn App() -> Element {
    let themes = use_context_provider(crate::themes);
    use_context_provider(move || themes.resolve());

    rsx! {
        script { src: TAILWIND_CDN }
        style { {GALLERY_STYLES} }
        Router::<Route> {}
    }
}

/// Navigation sidebar around the current story
#[component]
fn Shell() -> Element {
    let nav = navigator();
    use_hook(move || {
        if let Some(story) = crate::start_story() {
            let _ = nav.replace(story.route());
        }
    });

    let themes = use_context::<ThemeSet>();
    let overridden = themes.families().join(", ");

    rsx! {
        PointerTracker { class: "flex min-h-screen bg-gray-50 text-gray-900",
            nav { class: "w-48 shrink-0 border-r border-gray-200 bg-white p-4 flex flex-col gap-1",
                Link { to: Route::Overview {}, class: "font-semibold mb-3", "Plinth" }
                for story in Story::ALL.iter().copied() {
                    Link {
                        key: "{story.title()}",
                        to: story.route(),
                        class: "rounded px-2 py-1 text-sm hover:bg-gray-100",
                        active_class: "bg-gray-100 font-medium",
                        "{story.title()}"
                    }
                }
                if !overridden.is_empty() {
                    p { class: "mt-auto text-xs text-gray-500",
                        "Theme overrides: {overridden}"
                    }
                }
            }
            main { class: "flex-1 overflow-auto p-8",
                Outlet::<Route> {}
            }
        }
    }
}
