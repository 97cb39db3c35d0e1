//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The repositories are hand-written in-memory stores rather than mockall
//! mocks: tests drive real create/update/delete sequences through them and
//! assert on the resulting state. The `Renderer` port is simple enough for
//! mockall and uses its generated `MockRenderer`.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
