//! Shared fixtures for the integration tests of the workspace.

mod arrays;
mod traces;

pub use arrays::TestArrays;
pub use traces::assert_well_formed;
