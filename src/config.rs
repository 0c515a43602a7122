//! Runner configuration: defaults, then environment, then command line.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::types::{DEFAULT_DROP_INTERVAL_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Smallest and largest accepted well dimension.
pub const MIN_DIMENSION: usize = 4;
pub const MAX_DIMENSION: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "well-tetris", version, about = "Falling-block puzzle in the terminal")]
pub struct GameConfig {
    /// Well width in cells
    #[arg(long, env = "WELL_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Well height in cells
    #[arg(long, env = "WELL_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Milliseconds between automatic drop steps
    #[arg(
        long = "drop-interval",
        env = "WELL_DROP_INTERVAL_MS",
        default_value_t = DEFAULT_DROP_INTERVAL_MS
    )]
    pub drop_interval_ms: u32,

    /// Fixed piece seed; a random one is picked when unset
    #[arg(long, env = "WELL_SEED")]
    pub seed: Option<u32>,

    /// Write tracing output to this file. Nothing is logged when unset.
    #[arg(long = "log-file", env = "WELL_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            seed: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Parse the process arguments and environment.
    ///
    /// `--help` and `--version` print and exit here, as do malformed flags.
    pub fn load() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Parse an explicit argument list (first item is the program name).
    pub fn try_load_from<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Self::try_parse_from(args)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let dims = MIN_DIMENSION..=MAX_DIMENSION;
        if !dims.contains(&self.width) {
            bail!(
                "width {} out of range {}..={}",
                self.width,
                MIN_DIMENSION,
                MAX_DIMENSION
            );
        }
        if !dims.contains(&self.height) {
            bail!(
                "height {} out of range {}..={}",
                self.height,
                MIN_DIMENSION,
                MAX_DIMENSION
            );
        }
        if self.drop_interval_ms == 0 {
            bail!("drop interval must be at least 1ms");
        }
        Ok(())
    }
}
