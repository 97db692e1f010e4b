use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Glide: an embeddable floating chat widget, driven from the terminal.
#[derive(Parser, Debug)]
#[command(name = "glide", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reply language (en, de, zh, fr).
    #[arg(long)]
    pub locale: Option<String>,

    /// Widget profile (assistant, storefront).
    #[arg(long)]
    pub profile: Option<String>,

    /// Fixed RNG seed for reproducible reply delays.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the scripted showcase and exit.
    Demo,
    /// Drive the widget interactively.
    Chat,
}

pub fn parse() -> Args {
    Args::parse()
}
