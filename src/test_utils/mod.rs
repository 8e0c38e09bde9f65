//! Shared test utilities for skillhub.

pub mod fixtures;

pub use fixtures::{SourceDirFixture, record, scored_record};
