pub mod inputs;
pub mod run;
pub mod status;

use anyhow::Context;
use jet_core::config::{Directories, DirectoryOverrides};
use std::path::PathBuf;

/// Directory flags shared by every subcommand. `None` falls back to the
/// conventional subpath of the main working directory.
#[derive(Debug, clap::Args)]
pub struct DirArgs {
    /// Main working directory (default: current directory)
    #[arg(long = "main", env = "JET_MAIN_DIRECTORY")]
    pub main: Option<PathBuf>,

    /// Static reference-data directory
    #[arg(long = "static")]
    pub static_dir: Option<PathBuf>,

    /// SRTM elevation directory
    #[arg(long = "srtm")]
    pub srtm: Option<PathBuf>,

    /// L2T STARS sources directory
    #[arg(long = "stars-sources")]
    pub stars_sources: Option<PathBuf>,

    /// L3T L4T JET sources directory
    #[arg(long = "jet-sources")]
    pub jet_sources: Option<PathBuf>,

    /// Cal/val output archive root (default: <main>/output)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl DirArgs {
    pub fn resolve(self) -> anyhow::Result<Directories> {
        let main = match self.main {
            Some(dir) => dir,
            None => std::env::current_dir().context("cannot determine current directory")?,
        };
        Ok(Directories::resolve(
            main,
            DirectoryOverrides {
                static_dir: self.static_dir,
                srtm: self.srtm,
                stars_sources: self.stars_sources,
                jet_sources: self.jet_sources,
                output: self.output,
            },
        ))
    }
}
