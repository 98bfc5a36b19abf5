use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use requires::{
    initialize, output, DirTemplates, EmbeddedTemplates, InitOptions, Roots, TemplateSource,
};

/// Claude Code /command for requirements-driven development
#[derive(Parser)]
#[command(name = "requires")]
#[command(author, version, about)]
struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new "requires" project (requires/ tree and .claude/commands/requires.md)
    Init {
        /// Install the command into ~/.claude/commands instead of the current project
        #[arg(short, long)]
        global: bool,

        /// Overwrite files that already exist
        #[arg(short, long)]
        force: bool,

        /// Read templates from this directory instead of the embedded ones
        #[arg(long, value_name = "DIR", env = "REQUIRES_TEMPLATES_DIR")]
        templates: Option<PathBuf>,
    },
}

fn run_init(options: InitOptions, templates: Option<PathBuf>, json: bool) -> Result<()> {
    let roots = Roots::from_env();

    let source: Box<dyn TemplateSource> = match templates {
        Some(dir) => Box::new(DirTemplates::new(dir)),
        None => Box::new(EmbeddedTemplates),
    };

    let report = initialize(options, &roots, source.as_ref())?;

    if json {
        output::print_json(&report)
    } else {
        output::print_report(&report);
        Ok(())
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Init {
            global,
            force,
            templates,
        } => run_init(InitOptions { global, force }, templates, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
