use anyhow::Context;
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tracing::Level;

mod error;
mod texture;

use error::Error;

/// Adds a texture XML file next to every PNG in the current folder
#[derive(Debug, Parser)]
#[command(name = "texture-xml", version, about)]
struct Cli {
    /// Also process every subfolder
    #[arg(long = "r")]
    r: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout only carries the notices
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("recursive: {}", cli.r);

    let root = working_root()?;
    texture::generate(&root, cli.r)
        .with_context(|| format!("texture pass over {} failed", root.display()))?;

    Ok(())
}

/// Folder the pass runs on
fn working_root() -> error::Result<PathBuf> {
    env::current_dir().map_err(Error::CurrentDir)
}
