use camino::Utf8PathBuf;

use crate::env::ProcessingEnv;
use crate::error::{Error, Result};

/// The well-known option naming the directory that generated sources go into.
///
/// Hosts that want generated code to participate in the surrounding build set
/// this to a directory they will compile afterwards. Hosts that only want
/// diagnostics may leave it unset.
pub const GENERATED_DIR_OPTION: &str = "target.generated.dir";

/// Hands out the location for generated source files.
///
/// A filer is constructed unconditionally, whether or not the host supplied
/// [`GENERATED_DIR_OPTION`]. A missing option produces a single warning at
/// construction time and nothing else; processing that never writes a file
/// proceeds normally. Only [`Filer::generated_dir`] turns the missing option
/// into a hard error, at the moment a file is actually about to be created.
#[derive(Clone, Debug)]
pub struct Filer {
    generated_dir: Option<String>,
}

impl Filer {
    /// Create a filer for this invocation.
    ///
    /// Warns through the environment's messager when [`GENERATED_DIR_OPTION`]
    /// is absent. The warning fires once, here; later calls do not repeat it.
    pub fn from_env(env: &ProcessingEnv) -> Self {
        let generated_dir = env.option(GENERATED_DIR_OPTION).map(String::from);

        if generated_dir.is_none() {
            env.messager()
                .warning("Can't find the target directory for generated files.");
        }

        Self { generated_dir }
    }

    /// The directory generated files belong in.
    ///
    /// Errors when the host never supplied [`GENERATED_DIR_OPTION`]. The
    /// returned path is exactly the configured value; it is not required to
    /// exist yet, since hosts routinely create it during the build.
    pub fn generated_dir(&self) -> Result<Utf8PathBuf> {
        match &self.generated_dir {
            Some(dir) => Ok(Utf8PathBuf::from(dir)),
            None => Err(Error::NoGeneratedDir),
        }
    }
}
