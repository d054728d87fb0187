/// Re-exporting the clap version used for `cli`.
///
/// We recommend you depend on this rather than adding an explicit dependency on `clap`
/// when authoring formwork processors.
pub use clap as clap;

/// Entry-point scaffolding for processor executables.
pub mod cli;

/// The channel processors report diagnostics through.
pub mod diagnostics;

/// The per-invocation environment a host build hands to a processor.
pub mod env;

/// Resolution of the directory that generated sources are written into.
pub mod filer;

mod error;

pub use error::{Error, Result};
