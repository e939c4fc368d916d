pub mod pointer;
pub mod scroll;

pub use pointer::wire_viewport;
pub use scroll::{measure_sections, wire_dot_sync, wire_nav_links, DotSync};
