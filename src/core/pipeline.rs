use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::bio::{fasta, tables};
use crate::core::config::CleanConfig;
use crate::tools::traits::DatabaseSearch;
use crate::{AsvcleanError, Result};

pub const CLEANED_SEQS: &str = "cleaned.seqs.fasta";
pub const CLEANED_IDS: &str = "cleaned_ASVs.txt";
pub const REJECTED_SEQS: &str = "rejected.seqs.fasta";
pub const REJECTED_IDS: &str = "rejected_ASVs.txt";
pub const CLEANED_SEQ_TABLE: &str = "cleaned_ASV_table.tsv";
pub const CLEANED_TAX_TABLE: &str = "cleaned_tax_table.tsv";
pub const CLEANED_SPECIES_TABLE: &str = "cleaned_species_table.tsv";

/// Identifiers rejected during the main loop, kept in input order.
#[derive(Debug, Default)]
pub struct RejectedSet {
    ids: Vec<String>,
    index: HashSet<String>,
}

impl RejectedSet {
    pub fn insert(&mut self, id: &str) {
        if self.index.insert(id.to_string()) {
            self.ids.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_set(&self) -> &HashSet<String> {
        &self.index
    }
}

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanSummary {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
}

fn create_fresh_dir(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            AsvcleanError::Config(format!(
                "directory '{}' already exists, rename or remove it prior to rerunning",
                path.display()
            ))
        } else {
            AsvcleanError::Io(e)
        }
    })
}

/// Run the full filter pipeline: classify every record through `searcher`,
/// split the collection into cleaned/rejected artifacts under the output
/// directory, and drop rejected ASVs from any supplied metadata tables.
pub fn run<S: DatabaseSearch>(config: &CleanConfig, searcher: &S) -> Result<CleanSummary> {
    if !config.input.exists() {
        return Err(AsvcleanError::Config(format!(
            "input file '{}' not found",
            config.input.display()
        )));
    }

    match &config.database {
        Some(db) => info!("using database: {}", db),
        None => warn!(
            "no database supplied, the {} invocation will fail",
            searcher.name()
        ),
    }

    create_fresh_dir(&config.tmpdir)?;
    create_fresh_dir(&config.outdir)?;

    let mut cleaned_seqs = BufWriter::new(File::create(config.outdir.join(CLEANED_SEQS))?);
    let mut cleaned_ids = BufWriter::new(File::create(config.outdir.join(CLEANED_IDS))?);
    let mut rejected_seqs = BufWriter::new(File::create(config.outdir.join(REJECTED_SEQS))?);
    let mut rejected_ids = BufWriter::new(File::create(config.outdir.join(REJECTED_IDS))?);

    let records = fasta::parse_fasta(&config.input)?;
    let total = records.len();
    info!("classifying {} records", total);

    let progress = ProgressBar::new(total as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} ({percent}%)")
            .unwrap(),
    );

    let mut rejected = RejectedSet::default();
    let mut accepted = 0;

    for record in &records {
        let report = searcher.search(record)?;

        if report.is_hit() {
            fasta::write_record(&mut cleaned_seqs, record)?;
            writeln!(cleaned_ids, "{}", record.id)?;
            accepted += 1;
        } else {
            fasta::write_record(&mut rejected_seqs, record)?;
            writeln!(rejected_ids, "{}", record.id)?;
            rejected.insert(&record.id);
            info!("{} was rejected due to no match in the database", record.id);
        }

        progress.inc(1);
    }
    progress.finish_and_clear();

    if let Some(path) = &config.seq_table {
        info!("cleaning sequence table '{}'", path.display());
        let dropped =
            tables::filter_table(path, config.outdir.join(CLEANED_SEQ_TABLE), rejected.as_set())?;
        info!("removed {} rows", dropped);
    }

    if let Some(path) = &config.tax_table {
        info!("cleaning taxonomy table '{}'", path.display());
        let dropped =
            tables::filter_table(path, config.outdir.join(CLEANED_TAX_TABLE), rejected.as_set())?;
        info!("removed {} rows", dropped);
    }

    if let Some(path) = &config.species_table {
        info!("cleaning species table '{}'", path.display());
        let dropped = tables::filter_table(
            path,
            config.outdir.join(CLEANED_SPECIES_TABLE),
            rejected.as_set(),
        )?;
        info!("removed {} rows", dropped);
    }

    cleaned_seqs.flush()?;
    cleaned_ids.flush()?;
    rejected_seqs.flush()?;
    rejected_ids.flush()?;

    fs::remove_dir_all(&config.tmpdir)?;

    Ok(CleanSummary {
        total,
        accepted,
        rejected: rejected.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_set_keeps_input_order() {
        let mut rejected = RejectedSet::default();
        rejected.insert("ASV_9");
        rejected.insert("ASV_1");
        rejected.insert("ASV_9");

        assert_eq!(rejected.len(), 2);
        assert!(rejected.contains("ASV_9"));
        assert!(rejected.contains("ASV_1"));
        assert!(!rejected.contains("ASV_2"));
        assert_eq!(rejected.ids, vec!["ASV_9", "ASV_1"]);
    }

    #[test]
    fn test_create_fresh_dir_rejects_existing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("cleaned");
        fs::create_dir(&target).unwrap();

        match create_fresh_dir(&target) {
            Err(AsvcleanError::Config(msg)) => assert!(msg.contains("already exists")),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
