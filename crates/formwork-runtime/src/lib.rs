//! Runtime support for generated builders.
//!
//! The formwork generator emits one builder type per `#[formwork::buildable]`
//! struct; the emitted code links against this crate and nothing else in the
//! workspace. Nothing in here generates anything.

mod builder;
mod checks;
mod error;

pub use builder::*;
pub use checks::*;
pub use error::*;
