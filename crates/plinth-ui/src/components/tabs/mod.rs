//! Tab components
//!
//! [`Tabs`] renders a whole tab strip from a list of [`TabItem`]s. For custom
//! layouts, create a group with [`use_tab_group`] and compose [`TabGroup`],
//! [`TabList`], [`Tab`] and [`TabPanel`] by hand, passing the same
//! [`TabGroupHandle`] to each.

mod group;
mod tab;
mod tab_list;
mod tab_panel;
mod tabs;

pub use group::*;
pub use tab::*;
pub use tab_list::*;
pub use tab_panel::*;
pub use tabs::*;
