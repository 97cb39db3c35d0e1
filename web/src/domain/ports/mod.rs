//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod renderer;
pub mod repositories;

#[cfg(test)]
pub use renderer::MockRenderer;
pub use renderer::{RenderError, Renderer};
pub use repositories::{ResumeItemRepository, ResumeRepository};
