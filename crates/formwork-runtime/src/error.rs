use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error("required parameter missing: `{name}`")]
    MissingParameter { name: &'static str },

    #[error("illegal changelog value: {changelog:#b}")]
    IllegalChangelog { changelog: u64 },
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;
