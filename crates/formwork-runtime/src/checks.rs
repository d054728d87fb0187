use crate::error::{BuildError, BuildResult};

/// A changelog word recording which tracked parameters a builder has seen,
/// one bit per parameter.
///
/// Builders with 32 or fewer tracked parameters use `u32`; wider builders get
/// `u64`. The generator assigns the bits.
pub trait ChangelogFlags: Copy {
    /// Whether every bit of `flag` is set in `self`.
    fn contains_flag(self, flag: Self) -> bool;
}

impl ChangelogFlags for u32 {
    fn contains_flag(self, flag: Self) -> bool {
        self & flag == flag
    }
}

impl ChangelogFlags for u64 {
    fn contains_flag(self, flag: Self) -> bool {
        self & flag == flag
    }
}

/// Fails with [`BuildError::MissingParameter`] unless `changelog` records
/// `flag`. Generated accessors call this before exposing a tracked parameter
/// that has no default.
pub fn check_contains_flag<F: ChangelogFlags>(
    changelog: F,
    flag: F,
    name: &'static str,
) -> BuildResult<()> {
    if changelog.contains_flag(flag) {
        Ok(())
    } else {
        Err(BuildError::MissingParameter { name })
    }
}

/// Unwraps a required parameter, failing with
/// [`BuildError::MissingParameter`] when the builder never saw a value for it.
pub fn check_set<T>(value: Option<T>, name: &'static str) -> BuildResult<T> {
    match value {
        Some(value) => Ok(value),
        None => Err(BuildError::MissingParameter { name }),
    }
}
