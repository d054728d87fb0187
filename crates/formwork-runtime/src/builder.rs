use crate::error::BuildResult;

/// Implemented by every generated builder.
///
/// `build` consumes the builder and assembles the target struct. Parameters
/// the caller never supplied surface as
/// [`BuildError::MissingParameter`](crate::BuildError::MissingParameter)
/// unless the target declares a default for them.
pub trait Builder: Sized {
    /// The struct this builder assembles.
    type Target;

    fn build(self) -> BuildResult<Self::Target>;
}
