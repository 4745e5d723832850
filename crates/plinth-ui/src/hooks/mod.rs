//! Hooks shared by Plinth components

mod pointer;

pub use crate::components::tabs::use_tab_group;
pub use pointer::*;
