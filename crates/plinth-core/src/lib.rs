//! Plinth Core Library
//!
//! Framework-free logic behind the Plinth component library.
//!
//! ## Overview
//!
//! Nothing in this crate renders anything. It answers the questions a
//! component asks while rendering or handling input:
//!
//! - **Themes**: default style tokens per component family, overlaid with
//!   partial user overrides ([`theme`])
//! - **Classes**: ordered class composition with last-writer-wins conflict
//!   resolution ([`style`])
//! - **Tabs**: registry, active-tab state machine, keyboard navigation, lazy
//!   panel mounting and the selection indicator ([`tabs`])
//! - **Pointer**: pointer-relative CSS custom properties ([`pointer`])
//! - **Layout**: stack alignment and spacing tokens ([`layout`])
//!
//! ## Quick Start
//!
//! ```
//! use plinth_core::tabs::{TabDescriptor, TabGroupState, Transition};
//!
//! let tabs = vec![
//!     TabDescriptor::new("tab1", "Tab 1"),
//!     TabDescriptor::new("tab2", "Tab 2"),
//!     TabDescriptor::new("tab3", "Tab 3").disabled(),
//! ];
//!
//! let mut state = TabGroupState::uncontrolled(Some("tab1"), &tabs);
//! assert_eq!(state.active(), "tab1");
//!
//! assert_eq!(state.set_active_tab("tab3"), Transition::Ignored);
//! assert!(state.set_active_tab("tab2").is_changed());
//! assert_eq!(state.active(), "tab2");
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod layout;
pub mod pointer;
pub mod style;
pub mod tabs;
pub mod theme;

// Re-exports
pub use config::{ResolvedThemes, ThemeSet};
pub use error::{ThemeError, ThemeResult};
pub use style::{merge_classes, resolve, ClassList};
pub use theme::{ButtonTheme, MergeTheme, TabsTheme, TagTheme, TextTheme};
