//! Tab group logic.
//!
//! A tab group owns one active value shared by its tab list and panels.
//!
//! ```text
//!   click / keydown
//!         │
//!         ▼
//!   keyboard::resolve_navigation ──► TabGroupState::set_active_tab ──► Transition
//!                                          │                              │
//!                                          ▼                              ▼
//!                                   HasBeenActive               UpdateModelValue / Change
//!                                          │
//!                                          ▼
//!                                   panel::should_mount
//! ```

pub mod aria;
pub mod descriptor;
pub mod indicator;
pub mod keyboard;
pub mod panel;
pub mod registry;
pub mod state;

pub use crate::theme::tabs::{Orientation, TabsSize, TabsVariant};
pub use aria::{panel_id, tab_id, tab_index};
pub use descriptor::TabDescriptor;
pub use crate::pointer::Rect;
pub use indicator::{indicator_classes, indicator_style, IndicatorStyle};
pub use keyboard::{next_index, resolve_navigation, NavigationKey};
pub use panel::{is_visible, panel_transition_classes, should_mount};
pub use registry::{TabRegistry, TabRegistryEntry};
pub use state::{
    ActiveSource, HasBeenActive, NavigationDirection, TabEvent, TabGroupState, Transition,
    ValueProvider,
};
