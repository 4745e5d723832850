//! Tab group state shared by a tab list, its tabs and their panels.
//!
//! [`use_tab_group`] creates the state once per component and returns a
//! [`TabGroupHandle`]. The handle is passed explicitly to [`TabList`],
//! [`Tab`] and [`TabPanel`] as a prop, so every piece sees the same
//! configuration and active value.
//!
//! [`TabList`]: super::TabList
//! [`Tab`]: super::Tab
//! [`TabPanel`]: super::TabPanel

use std::collections::BTreeMap;
use std::rc::Rc;

use dioxus::prelude::*;
use plinth_core::style::ClassList;
use plinth_core::tabs::{
    Orientation, TabDescriptor, TabEvent, TabGroupState, TabsSize, TabsVariant, Transition,
};
use plinth_core::theme::TabsTheme;
use tracing::debug;

/// Presentation settings shared by every part of a tab group
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabGroupConfig {
    pub variant: TabsVariant,
    pub size: TabsSize,
    pub orientation: Orientation,
    pub animated: bool,
    pub lazy: bool,
    pub theme: TabsTheme,
}

/// Inputs to [`use_tab_group`]
#[derive(Clone, Default)]
pub struct TabGroupOptions {
    /// Caller-owned active value; makes the group controlled
    pub model_value: Option<ReadOnlySignal<String>>,
    pub default_value: Option<String>,
    pub tabs: Vec<TabDescriptor>,
    pub config: TabGroupConfig,
    pub on_update_model_value: Option<EventHandler<String>>,
    pub on_change: Option<EventHandler<String>>,
}

/// Shared handle to one tab group
#[derive(Clone, PartialEq)]
pub struct TabGroupHandle {
    state: Signal<TabGroupState>,
    elements: Signal<BTreeMap<String, Rc<MountedData>>>,
    pub config: TabGroupConfig,
    on_update_model_value: Option<EventHandler<String>>,
    on_change: Option<EventHandler<String>>,
}

impl TabGroupHandle {
    /// Current active value (subscribes the caller)
    pub fn active(&self) -> String {
        self.state.read().active()
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.active() == value
    }

    pub fn state(&self) -> Signal<TabGroupState> {
        self.state
    }

    /// Request a new active tab and emit the resulting events
    pub fn select(&self, value: &str) -> Transition {
        let mut state = self.state;
        let transition = state.write().set_active_tab(value);

        for event in transition.events() {
            match event {
                TabEvent::UpdateModelValue(v) => {
                    if let Some(handler) = &self.on_update_model_value {
                        handler.call(v.clone());
                    }
                }
                TabEvent::Change(v) => {
                    if let Some(handler) = &self.on_change {
                        handler.call(v.clone());
                    }
                }
            }
        }
        transition
    }

    pub(crate) fn register(&self, value: &str, dom_id: &str, disabled: bool) {
        let mut state = self.state;
        state.write().registry_mut().register(value, dom_id, disabled);
    }

    pub(crate) fn unregister(&self, value: &str) {
        let mut state = self.state;
        // the group may already be gone when the whole tree unmounts
        if let Ok(mut state) = state.try_write() {
            state.registry_mut().unregister(value);
        }
        let mut elements = self.elements;
        if let Ok(mut elements) = elements.try_write() {
            elements.remove(value);
        };
    }

    pub(crate) fn set_element(&self, value: &str, element: Rc<MountedData>) {
        let mut elements = self.elements;
        elements.write().insert(value.to_string(), element);
    }

    pub(crate) fn element(&self, value: &str) -> Option<Rc<MountedData>> {
        self.elements.read().get(value).cloned()
    }

    /// Move keyboard focus to the tab for `value`
    pub(crate) fn focus(&self, value: &str) {
        let Some(element) = self.elements.peek().get(value).cloned() else {
            return;
        };
        let dom_id = self.state.peek().registry().dom_id(value).map(str::to_string);
        spawn(async move {
            if let Err(err) = element.set_focus(true).await {
                debug!(?err, ?dom_id, "failed to focus tab");
            }
        });
    }
}

/// Create the state for one tab group.
///
/// Controlled or uncontrolled mode is fixed by whether `model_value` is set
/// on the first render.
pub fn use_tab_group(options: TabGroupOptions) -> TabGroupHandle {
    let TabGroupOptions {
        model_value,
        default_value,
        tabs,
        config,
        on_update_model_value,
        on_change,
    } = options;

    let initial_tabs = tabs.clone();
    let mut state = use_signal(move || match model_value {
        Some(model) => TabGroupState::controlled(move || model(), &initial_tabs),
        None => TabGroupState::uncontrolled(default_value.as_deref(), &initial_tabs),
    });
    let elements = use_signal(BTreeMap::new);

    use_effect(use_reactive((&tabs,), move |(tabs,)| {
        state.write().set_tabs(&tabs);
    }));

    // Controlled groups learn about fed-back values here
    use_effect(move || {
        if let Some(model) = model_value {
            let _ = model.read();
            state.write().observe_active();
        }
    });

    TabGroupHandle {
        state,
        elements,
        config,
        on_update_model_value,
        on_change,
    }
}

/// Container around a tab list and its panels
#[component]
pub fn TabGroup(
    group: TabGroupHandle,
    #[props(default, into)] class: Option<String>,
    children: Element,
) -> Element {
    let layout = if group.config.orientation.is_horizontal() {
        "flex flex-col"
    } else {
        "flex flex-row"
    };
    let class = ClassList::new().push(layout).push_opt(class.as_deref()).build();

    rsx! {
        div { class: "{class}", {children} }
    }
}
