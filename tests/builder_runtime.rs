//! Exercises formwork-runtime through a builder written out by hand, shaped
//! exactly like the code the generator emits for a marked struct.

use formwork_runtime::{
    check_contains_flag, check_set, BuildError, BuildResult, Builder, ChangelogFlags,
};

#[formwork::buildable]
#[derive(Debug, PartialEq, Eq)]
struct Profile {
    id: u32,
    name: String,
    nickname: Option<String>,
    retries: u32,
}

const NICKNAME_FLAG: u32 = 0b01;
const RETRIES_FLAG: u32 = 0b10;

// Only parameters with declared defaults participate in branch selection,
// so the mask covers `retries` alone.
const DEFAULTS_MASK: u32 = RETRIES_FLAG;

#[derive(Default)]
struct ProfileBuilder {
    id: Option<u32>,
    name: Option<String>,
    nickname: Option<String>,
    retries: u32,
    changelog: u32,
}

impl ProfileBuilder {
    fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self.changelog |= NICKNAME_FLAG;
        self
    }

    fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self.changelog |= RETRIES_FLAG;
        self
    }

    /// Reads `retries` back out of the builder, the way generated accessors
    /// expose tracked parameters before `build`.
    fn peek_retries(&self) -> BuildResult<u32> {
        check_contains_flag(self.changelog, RETRIES_FLAG, "retries")?;
        Ok(self.retries)
    }
}

impl Builder for ProfileBuilder {
    type Target = Profile;

    fn build(self) -> BuildResult<Profile> {
        let id = check_set(self.id, "id")?;
        let name = check_set(self.name, "name")?;

        match self.changelog & DEFAULTS_MASK {
            RETRIES_FLAG => Ok(Profile {
                id,
                name,
                nickname: self.nickname,
                retries: self.retries,
            }),
            0 => Ok(Profile {
                id,
                name,
                nickname: self.nickname,
                retries: 3,
            }),
            changelog => Err(BuildError::IllegalChangelog {
                changelog: u64::from(changelog),
            }),
        }
    }
}

#[test]
fn build_with_everything_set() -> anyhow::Result<()> {
    let profile = ProfileBuilder::default()
        .id(7)
        .name("alice")
        .nickname("al")
        .retries(5)
        .build()?;

    assert_eq!(
        profile,
        Profile {
            id: 7,
            name: "alice".to_string(),
            nickname: Some("al".to_string()),
            retries: 5,
        }
    );
    Ok(())
}

#[test]
fn unset_tracked_parameters_fall_back_to_defaults() -> anyhow::Result<()> {
    let profile = ProfileBuilder::default().id(7).name("alice").build()?;

    assert_eq!(profile.retries, 3);
    assert_eq!(profile.nickname, None);
    Ok(())
}

#[test]
fn missing_required_parameter_fails_the_build() {
    let err = ProfileBuilder::default().name("alice").build().unwrap_err();

    assert!(matches!(err, BuildError::MissingParameter { name: "id" }));
    assert_eq!(err.to_string(), "required parameter missing: `id`");
}

#[test]
fn required_parameters_are_checked_in_declaration_order() {
    let err = ProfileBuilder::default().build().unwrap_err();

    assert!(matches!(err, BuildError::MissingParameter { name: "id" }));
}

#[test]
fn peeking_an_unset_tracked_parameter_fails() -> anyhow::Result<()> {
    let builder = ProfileBuilder::default().id(7).name("alice");
    assert!(matches!(
        builder.peek_retries(),
        Err(BuildError::MissingParameter { name: "retries" })
    ));

    let builder = builder.retries(9);
    assert_eq!(builder.peek_retries()?, 9);
    Ok(())
}

#[test]
fn contains_flag_matches_on_every_bit() {
    assert!(0b1010_u32.contains_flag(0b1000));
    assert!(0b1010_u32.contains_flag(0b1010));
    assert!(!0b1010_u32.contains_flag(0b0100));
    assert!(!0b1010_u32.contains_flag(0b0110));

    // Builders tracking more than 32 parameters get a u64 word.
    let wide: u64 = (1 << 40) | 1;
    assert!(wide.contains_flag(1 << 40));
    assert!(wide.contains_flag(1));
    assert!(!wide.contains_flag(1 << 41));
}

#[test]
fn illegal_changelog_renders_in_binary() {
    let err = BuildError::IllegalChangelog { changelog: 0b101 };
    assert_eq!(err.to_string(), "illegal changelog value: 0b101");
}
