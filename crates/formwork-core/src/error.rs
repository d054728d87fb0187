use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Can't generate files.")]
    NoGeneratedDir,

    #[error("malformed option `{arg}`: expected `KEY=VALUE`")]
    MalformedOption { arg: String },
}

pub type Result<T> = std::result::Result<T, Error>;
