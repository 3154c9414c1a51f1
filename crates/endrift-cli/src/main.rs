use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod report;

#[derive(Parser)]
#[command(
    name = "endrift",
    version,
    about = "Check regional English localizations against the reference strings"
)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare one locale against the reference and report drift
    Check {
        /// Locale to check, e.g. en-GB
        locale: String,

        /// Write accepted case fixes back into the candidate files
        #[arg(long, default_value_t = false)]
        write: bool,

        /// Pull the candidate repository from its remote before comparing
        #[arg(long, default_value_t = false)]
        update: bool,

        /// English reference repository (overrides endrift.toml)
        #[arg(long)]
        reference: Option<PathBuf>,

        /// Directory holding one candidate repository per locale
        #[arg(long)]
        locales_root: Option<PathBuf>,

        /// Directory holding exclusions/, spelling/ and output/
        #[arg(long)]
        data_root: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let use_color = !cli.no_color
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();

    match cli.cmd {
        Commands::Check {
            locale,
            write,
            update,
            reference,
            locales_root,
            data_root,
        } => commands::check::run_check(
            &locale,
            write,
            update,
            reference,
            locales_root,
            data_root,
            use_color,
        ),
    }
}
