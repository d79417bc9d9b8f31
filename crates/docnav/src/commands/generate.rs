//! Navigation generation command.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use docnav_config::{CliSettings, Config, NavConfig, NavFormat};
use docnav_tree::{ClassifierOptions, NavBuilder, NavOptions, OutputFormat, render};

use crate::error::CliError;
use crate::output::Output;

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum FormatArg {
    /// `MkDocs` `nav:` YAML block.
    Mkdocs,
    /// JSON document.
    Json,
}

impl From<FormatArg> for NavFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Mkdocs => Self::Mkdocs,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Arguments for navigation generation.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Write navigation to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compare generated navigation with --output instead of writing it.
    #[arg(long, requires = "output")]
    check: bool,

    /// Skip entries whose names start with '.'.
    #[arg(long)]
    skip_hidden: bool,

    /// Enable verbose output (info-level logs on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the documentation tree cannot
    /// be classified, or output cannot be written. Nothing is written to
    /// stdout on error.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            format: self.format.map(NavFormat::from),
            include_hidden: self.skip_hidden.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            tracing::info!(config = %path.display(), "Loaded configuration");
        }
        tracing::info!(
            source_dir = %config.docs_resolved.source_dir.display(),
            "Generating navigation"
        );

        let builder = NavBuilder::new(&config.docs_resolved.source_dir, nav_options(&config.nav));
        let nodes = builder.build()?;
        let rendered = render(&nodes, output_format(config.nav.format))?;

        match (self.output, self.check) {
            (Some(path), true) => {
                let existing = match std::fs::read_to_string(&path) {
                    Ok(existing) => existing,
                    Err(source) => return Err(CliError::ReadOutput { path, source }),
                };
                if existing != rendered {
                    return Err(CliError::OutOfDate(path));
                }
                output.success(&format!("Navigation in {} is up to date", path.display()));
            }
            (Some(path), false) => {
                std::fs::write(&path, &rendered)?;
                output.success(&format!("Navigation written to {}", path.display()));
            }
            (None, _) => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

/// Map configuration to builder options.
fn nav_options(nav: &NavConfig) -> NavOptions {
    NavOptions {
        classifier: ClassifierOptions {
            extension: nav.extension.clone(),
            include_hidden: nav.include_hidden,
        },
        home_title: nav.home_title.clone(),
        index_name: nav.index_name.clone(),
    }
}

fn output_format(format: NavFormat) -> OutputFormat {
    match format {
        NavFormat::Mkdocs => OutputFormat::Mkdocs,
        NavFormat::Json => OutputFormat::Json,
    }
}
