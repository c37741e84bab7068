use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::{AsvcleanError, Result};

/// Conservative default matching the blastn default search behavior.
pub const DEFAULT_EVALUE: f64 = 10.0;

pub const DEFAULT_OUTDIR: &str = "cleaned";
pub const DEFAULT_TMPDIR: &str = "temporary";

/// Values that may be supplied from a TOML configuration file.
/// Command-line flags always win over file values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub database: Option<String>,
    pub evalue: Option<f64>,
    pub outdir: Option<PathBuf>,
    pub tmpdir: Option<PathBuf>,
}

/// Resolved configuration threaded through the pipeline entry point.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input: PathBuf,
    pub database: Option<String>,
    pub seq_table: Option<PathBuf>,
    pub tax_table: Option<PathBuf>,
    pub species_table: Option<PathBuf>,
    pub evalue: f64,
    pub outdir: PathBuf,
    pub tmpdir: PathBuf,
}

impl CleanConfig {
    /// Merge command-line arguments over an optional config file
    /// (explicit `--config`, falling back to `ASVCLEAN_CONFIG`).
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = cli.config.clone().or_else(|| {
            std::env::var("ASVCLEAN_CONFIG")
                .ok()
                .map(PathBuf::from)
        });

        let file = match config_path {
            Some(path) => load_config(&path)?,
            None => FileConfig::default(),
        };

        let input = cli
            .input
            .clone()
            .ok_or_else(|| AsvcleanError::Config("no input provided".to_string()))?;

        Ok(Self {
            input,
            database: cli.database.clone().or(file.database),
            seq_table: cli.seq_table.clone(),
            tax_table: cli.tax_table.clone(),
            species_table: cli.species_table.clone(),
            evalue: cli.evalue.or(file.evalue).unwrap_or(DEFAULT_EVALUE),
            outdir: cli
                .outdir
                .clone()
                .or(file.outdir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTDIR)),
            tmpdir: cli
                .tmpdir
                .clone()
                .or(file.tmpdir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TMPDIR)),
        })
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    toml::from_str(&contents).map_err(|e| {
        AsvcleanError::Config(format!(
            "failed to parse {}: {}",
            path.as_ref().display(),
            e
        ))
    })
}
