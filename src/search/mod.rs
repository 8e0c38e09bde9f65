//! Query views over a catalog
//!
//! Pure functions: filtering precedes sorting and neither touches the
//! catalog they borrow from.

pub mod filters;
pub mod query;

pub use filters::{ALL_TIERS, BrowseFilter, filter_by_tier};
pub use query::{browse, search, sort_by_composite};
