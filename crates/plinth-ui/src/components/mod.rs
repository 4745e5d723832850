//! Presentational components
//!
//! Classes come from the `plinth-core` resolvers; components only wire props,
//! events and accessibility attributes.

mod button;
mod layout;
mod tag;
mod text;
pub mod tabs;

pub use button::*;
pub use layout::*;
pub use tabs::*;
pub use tag::*;
pub use text::*;
