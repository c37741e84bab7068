/// Trait definitions for the alignment search capability
///
/// The search step is modeled as a capability (query sequence in, hit/no-hit
/// plus raw report out) so the blastn subprocess can be swapped for an
/// in-process binding or a batched invocation without touching the
/// surrounding orchestration.
use crate::bio::sequence::Sequence;
use crate::Result;

/// Literal phrase a report must contain for the query to count as unmatched.
pub const NO_HIT_SENTINEL: &str = "No hits found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchVerdict {
    Hit,
    NoHit,
}

/// Raw report text plus the binary classification derived from it.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub verdict: SearchVerdict,
    pub report: String,
}

impl SearchReport {
    /// No-hit iff the sentinel phrase occurs; anything else counts as a hit,
    /// including an empty report.
    pub fn from_report(report: String) -> Self {
        let verdict = if report.contains(NO_HIT_SENTINEL) {
            SearchVerdict::NoHit
        } else {
            SearchVerdict::Hit
        };
        Self { verdict, report }
    }

    pub fn is_hit(&self) -> bool {
        self.verdict == SearchVerdict::Hit
    }
}

/// Common interface for reference database search tools
pub trait DatabaseSearch {
    /// Search one query sequence against the reference database
    fn search(&self, query: &Sequence) -> Result<SearchReport>;

    /// Get the name of this search tool
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_means_no_hit() {
        let report = SearchReport::from_report(
            "Query= ASV_2\n\n***** No hits found *****\n".to_string(),
        );
        assert_eq!(report.verdict, SearchVerdict::NoHit);
        assert!(!report.is_hit());
    }

    #[test]
    fn test_alignment_report_means_hit() {
        let report = SearchReport::from_report(
            "Sequences producing significant alignments:\nref_17  92.3  1e-30\n".to_string(),
        );
        assert_eq!(report.verdict, SearchVerdict::Hit);
    }

    #[test]
    fn test_empty_report_counts_as_hit() {
        // Truncated or empty reports classify as hits; the blastn wrapper
        // logs a warning but the contract stays sentinel-only.
        let report = SearchReport::from_report(String::new());
        assert!(report.is_hit());
    }
}
