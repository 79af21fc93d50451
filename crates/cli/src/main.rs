use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use dep_filter::commands::{filter_command, inspect_command, show_config_command, ConfigFormat};
use dep_filter::{init_tracing, ConfigOverrides};

/// Dependency-graph denylist filter.
///
/// This CLI is a thin wrapper around `depfilter-core` (exposed in code as
/// `depfilter_core`). Run without a subcommand to filter `filtered_deps.dot`
/// into `filtered_deps2.dot` using the default denylist.
#[derive(Parser, Debug)]
#[command(
    name = "dep-filter",
    version,
    about = "Strip SDK and driver nodes from CMake dependency graphs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// Filter config file (.json, .yaml or .yml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Additional label prefix to deny. Repeatable.
    #[arg(long = "deny", value_name = "PREFIX")]
    deny: Vec<String>,

    /// Deny only the prefixes given with --deny, ignoring configured ones.
    #[arg(long, default_value_t = false)]
    replace_denylist: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter a graph document and write the reduced graph.
    Filter {
        #[command(flatten)]
        config: ConfigArgs,

        /// Input graph document. Defaults to `filtered_deps.dot`.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output path (created or overwritten). Defaults to `filtered_deps2.dot`.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Emit the summary as JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Report which nodes and edges would be dropped, without writing anything.
    Inspect {
        #[command(flatten)]
        config: ConfigArgs,

        /// Input graph document. Defaults to `filtered_deps.dot`.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the effective filter configuration.
    ShowConfig {
        #[command(flatten)]
        config: ConfigArgs,

        #[arg(long, value_enum, default_value = "json")]
        format: ConfigFormat,
    },
}

fn overrides(
    config: ConfigArgs,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> ConfigOverrides {
    ConfigOverrides {
        config: config.config,
        input,
        output,
        deny: config.deny,
        replace_denylist: config.replace_denylist,
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Default to filtering with the built-in config if no subcommand is given.
    match cli.command {
        None => {
            filter_command(&ConfigOverrides::default(), false)?;
        }
        Some(Command::Filter { config, input, output, json }) => {
            filter_command(&overrides(config, input, output), json)?;
        }
        Some(Command::Inspect { config, input, json }) => {
            inspect_command(&overrides(config, input, None), json)?;
        }
        Some(Command::ShowConfig { config, format }) => {
            show_config_command(&overrides(config, None, None), format)?;
        }
    }

    Ok(())
}
