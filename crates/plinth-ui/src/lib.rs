//! Plinth UI Components
//!
//! Dioxus components built on the framework-free logic in `plinth-core`.
//!
//! ## Components
//!
//! - **Button**: variants, sizes, icons, loading state
//! - **Tag**: static or clickable label with optional close button
//! - **Text**: typography on any text element
//! - **Tabs**: accessible tab strip with panels, keyboard navigation and
//!   controlled or uncontrolled selection
//! - **Layout**: `HStack`, `VStack`, `SpacingBox`, `ScreenView`
//!
//! Every component accepts a partial theme override which is merged onto the
//! family's default theme before classes are resolved.
//!
//! ## Hooks
//!
//! - [`use_tab_group`]: state shared by a tab list and its panels
//! - [`use_pointer_styles`]: pointer-driven gradient and shadow properties

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::*;
