//! Property tests for catalog invariants.

mod registry_props;
