//! `quill convert` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use quill_config::{CliSettings, Config};
use quill_directive::{Converter, Node, OutputFormat};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// File holding the directive body, taken verbatim.
    input: PathBuf,

    /// Directive name the body was written with.
    #[arg(short, long, default_value = "code-block")]
    directive: String,

    /// Directive argument (e.g., the code block language).
    #[arg(short, long)]
    argument: Option<String>,

    /// Output format to generate; repeat for several (overrides config).
    #[arg(short, long = "format")]
    formats: Vec<OutputFormat>,

    /// Directory for generated files (overrides config; default: stdout).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long, env = "QUILL_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ConvertArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            formats: (!self.formats.is_empty()).then(|| self.formats.clone()),
            output_dir: self.output_dir.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let text = std::fs::read_to_string(&self.input)?;
        let node = read_literal(&self.directive, self.argument.as_deref(), &text);
        tracing::info!(
            input = %self.input.display(),
            directive = node.name(),
            tokens = node.tokens().len(),
            "Read input"
        );

        let converter = Converter::standard(config.convert_options());
        let rendered = converter.convert(&[node])?;

        for document in &rendered {
            let options = config.output_resolved.serialize_options(document.format);
            let markup = document.document.to_markup(&options);

            match &config.output_resolved.dir {
                Some(dir) => {
                    let path = output_path(dir, &self.input, document.format);
                    std::fs::create_dir_all(dir)?;
                    std::fs::write(&path, markup)?;
                    output.success(&format!("Wrote {}", path.display()));
                }
                None => output.document(&markup),
            }
        }

        Ok(())
    }
}

/// Build a node from a verbatim directive body.
///
/// Each line becomes one token with its line ending kept, so concatenating the
/// tokens reproduces `text` exactly.
fn read_literal(directive: &str, argument: Option<&str>, text: &str) -> Node {
    let node = Node::new(directive).with_tokens(text.split_inclusive('\n'));
    match argument {
        Some(argument) => node.with_argument(argument),
        None => node,
    }
}

/// Output file path: the input's file stem with the format's extension.
fn output_path(dir: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".into(), |s| s.to_string_lossy());
    dir.join(format!("{stem}.{}", format.extension()))
}
