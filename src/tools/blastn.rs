use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, warn};

use crate::bio::sequence::Sequence;
use crate::tools::traits::{DatabaseSearch, SearchReport};
use crate::{AsvcleanError, Result};

/// blastn invocation wrapper. One subprocess per query; the per-query scratch
/// files live under `tmpdir` and are removed before the next query runs.
pub struct BlastnSearch {
    database: Option<String>,
    evalue: f64,
    tmpdir: PathBuf,
}

impl BlastnSearch {
    pub fn new(database: Option<String>, evalue: f64, tmpdir: PathBuf) -> Self {
        Self {
            database,
            evalue,
            tmpdir,
        }
    }

    fn query_path(&self, id: &str) -> PathBuf {
        self.tmpdir.join(format!("{}.fasta", id))
    }

    fn report_path(&self, id: &str) -> PathBuf {
        self.tmpdir.join(format!("{}.out", id))
    }
}

impl DatabaseSearch for BlastnSearch {
    fn search(&self, query: &Sequence) -> Result<SearchReport> {
        let query_path = self.query_path(&query.id);
        let report_path = self.report_path(&query.id);

        // Query files carry only the identifier, never the description
        fs::write(
            &query_path,
            format!(
                ">{}\n{}\n",
                query.id,
                String::from_utf8_lossy(&query.sequence)
            ),
        )?;

        let mut cmd = Command::new("blastn");
        if let Some(db) = &self.database {
            cmd.arg("-db").arg(db);
        }
        cmd.arg("-query")
            .arg(&query_path)
            .arg("-evalue")
            .arg(self.evalue.to_string())
            .arg("-out")
            .arg(&report_path);

        debug!("running {:?}", cmd);

        let output = cmd
            .output()
            .map_err(|e| AsvcleanError::Search(format!("failed to run blastn: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AsvcleanError::Search(format!(
                "blastn exited with {} for query '{}': {}",
                output.status,
                query.id,
                stderr.trim()
            )));
        }

        let report = fs::read_to_string(&report_path)?;
        if report.is_empty() {
            warn!("empty blastn report for '{}', counting it as a hit", query.id);
        }

        fs::remove_file(&query_path)?;
        fs::remove_file(&report_path)?;

        Ok(SearchReport::from_report(report))
    }

    fn name(&self) -> &str {
        "blastn"
    }
}
