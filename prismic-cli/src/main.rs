//! Prismic CLI entry point.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::{Parser, Subcommand};
use commands::{InitCommand, TemplatesCommand};
use console::style;
use prismic_cli::ScaffoldError;

#[derive(Parser)]
#[command(name = "prismic")]
#[command(version)]
#[command(about = "Bootstrap Prismic projects from hosted starter templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Prismic project
    Init {
        /// Repository name, also used as the project folder by default
        repository: String,
        /// Project template key (see `prismic templates`)
        #[arg(short, long)]
        template: Option<String>,
        /// Folder to create the project in, relative to the current directory
        #[arg(short, long)]
        folder: Option<String>,
        /// Disable ANSI coloring, here and in the installer
        #[arg(long)]
        no_ansi: bool,
    },
    /// List the available templates
    Templates,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            repository,
            template,
            folder,
            no_ansi,
        } => InitCommand::new(repository, template, folder, no_ansi).execute(),
        Commands::Templates => TemplatesCommand::execute(),
    };

    if let Err(error) = result {
        eprintln!("{} {error:#}", style("error:").red().bold());
        let code = error
            .downcast_ref::<ScaffoldError>()
            .map_or(1, ScaffoldError::exit_code);
        std::process::exit(code);
    }
}
