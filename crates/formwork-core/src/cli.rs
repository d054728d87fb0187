//! A formwork processor is an executable that inspects builder-annotated
//! types on behalf of a host build. Most processor crates can use the Clap
//! structs defined in this file.

use std::str::FromStr;

use clap::Parser;

use crate::diagnostics::{Messager, StderrMessager};
use crate::env::{Options, ProcessingEnv};
use crate::filer::GENERATED_DIR_OPTION;

/// Trait implemented by formwork processor applications; `main` should hand
/// the implementing value to [`run`][].
/// By convention, types that implement this trait are named `FormworkX` where `X` is the name of your processor.
pub trait Processor {
    /// Returns the processor name used to announce diagnostics, e.g., for `formwork-dummy`, returns `"dummy"`.
    fn name(&self) -> String;

    /// The option names this processor consumes. Anything else the host
    /// passes draws a warning before processing starts. The default covers
    /// the options formwork itself understands.
    fn supported_options(&self) -> Vec<&'static str> {
        vec![GENERATED_DIR_OPTION]
    }

    /// Run one round of processing against `env`.
    fn process(self, env: &ProcessingEnv) -> anyhow::Result<()>;
}

/// The "main" function for a formwork processor. Defines standard argument parsing.
pub fn run(processor: impl Processor) -> anyhow::Result<()> {
    let args = Cli::try_parse()?;
    match args.command {
        FormworkCommand::Process {
            options,
            options_json,
        } => {
            let mut assembled: Options = match options_json {
                Some(json) => json.into(),
                None => Options::new(),
            };
            for arg in options {
                assembled.insert(arg.name, arg.value);
            }

            let prefix = format!("[{} processor]", processor.name());
            process_with(processor, assembled, StderrMessager::with_prefix(prefix))
        }
    }
}

/// Process `options`, sending diagnostics to `messager`.
///
/// This is the embedding entry point. Hosts that already hold an assembled
/// options mapping, and want diagnostics somewhere other than stderr, call
/// this directly; [`run`][] bottoms out here after argument parsing.
pub fn process_with(
    processor: impl Processor,
    options: Options,
    messager: impl Messager + 'static,
) -> anyhow::Result<()> {
    let supported = processor.supported_options();
    let unrecognized: Vec<String> = options
        .names()
        .filter(|name| !supported.iter().any(|s| s == name))
        .map(String::from)
        .collect();

    let env = ProcessingEnv::new(options, messager);
    if !unrecognized.is_empty() {
        env.messager().warning(&format!(
            "options not recognized by this processor: {}",
            unrecognized.join(", ")
        ));
    }

    processor.process(&env)
}

#[derive(clap::Parser)]
struct Cli {
    #[command(subcommand)]
    command: FormworkCommand,
}

/// The subcommands every processor executable responds to.
#[derive(clap::Subcommand)]
enum FormworkCommand {
    Process {
        /// Individual options, given as `KEY=VALUE`. These override entries
        /// from `--options-json`.
        #[arg(short = 'A', value_name = "KEY=VALUE")]
        options: Vec<OptionArg>,

        /// The whole options mapping as a single JSON object.
        #[arg(long, value_name = "JSON")]
        options_json: Option<OptionsJsonArg>,
    },
}

/// A wrapper around one `KEY=VALUE` pair that implements [`FromStr`][],
/// permitting it to be used from the CLI.
#[derive(Clone, Debug)]
struct OptionArg {
    name: String,
    value: String,
}

impl FromStr for OptionArg {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = Options::parse_pair(s)?;
        Ok(OptionArg { name, value })
    }
}

/// A wrapper around the [`Options`] mapping that implements [`FromStr`][],
/// so the whole mapping can be passed as one JSON argument.
#[derive(Clone, Debug)]
struct OptionsJsonArg {
    options: Options,
}

impl FromStr for OptionsJsonArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OptionsJsonArg {
            options: serde_json::from_str(s)?,
        })
    }
}

impl From<OptionsJsonArg> for Options {
    fn from(val: OptionsJsonArg) -> Self {
        val.options
    }
}
