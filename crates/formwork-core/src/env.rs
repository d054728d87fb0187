use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Messager;
use crate::error::{Error, Result};

/// The options a host build supplies for one compiler invocation.
///
/// Keys are option names, such as
/// [`GENERATED_DIR_OPTION`](crate::filer::GENERATED_DIR_OPTION); values are
/// uninterpreted strings. The host assembles the mapping and freezes it for
/// the duration of the invocation; processors only ever read it. On the wire
/// this is a plain JSON object, which is how drivers hand options to
/// processor executables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    map: BTreeMap<String, String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host-side assembly. Returns the value previously stored under `name`, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.map.insert(name.into(), value.into())
    }

    /// Look up a single option by exact name match.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    /// The option names present, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Split one `KEY=VALUE` argument of the kind hosts forward on the
    /// command line. The value may be empty; the key may not.
    pub fn parse_pair(arg: &str) -> Result<(String, String)> {
        match arg.split_once('=') {
            Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
            _ => Err(Error::MalformedOption {
                arg: arg.to_string(),
            }),
        }
    }
}

impl FromIterator<(String, String)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// Everything a processor receives from the host for one invocation: the
/// frozen options mapping and the diagnostics channel.
///
/// Nothing in here changes after construction, so an environment can be
/// shared freely until the invocation ends.
pub struct ProcessingEnv {
    options: Options,
    messager: Box<dyn Messager>,
}

impl ProcessingEnv {
    pub fn new(options: Options, messager: impl Messager + 'static) -> Self {
        Self {
            options,
            messager: Box::new(messager),
        }
    }

    /// Look up a single option by name.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The channel for reporting back to the host.
    pub fn messager(&self) -> &dyn Messager {
        &*self.messager
    }
}

impl std::fmt::Debug for ProcessingEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessingEnv")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
