//! Presentation-side logic kept out of the aggregation core.
//!
//! - Search and listing filter
//! - Pagination arithmetic
//! - Stats box drag offsets
//! - Immutable view state

pub mod drag;
pub mod pagination;
pub mod search;
pub mod state;

pub use drag::{centered_offset, BoxSize, DragSession, Point, PointerEvent};
pub use pagination::{Page, Pagination};
pub use search::{filter_listing, matches_search};
pub use state::{StatsBox, ViewState};
