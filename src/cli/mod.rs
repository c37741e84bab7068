use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "asvclean",
    version,
    about = "Remove ASVs without a reference database match",
    long_about = "Asvclean screens every sequence of a multi-record FASTA file against a \
                  reference database built with 'makeblastdb' and splits the collection into \
                  matched and unmatched sets, removing unmatched ASVs from any supplied \
                  sequence, taxonomy, and species tables."
)]
pub struct Cli {
    /// FASTA input file to be cleaned
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Name / path of a database generated with 'makeblastdb' in BLAST+
    #[arg(short, long, value_name = "DB")]
    pub database: Option<String>,

    /// Sequence table (TSV) to remove non-matching ASVs from;
    /// ASV names must be in a column called 'ASV_ID'
    #[arg(short = 't', long, value_name = "TSV")]
    pub seq_table: Option<PathBuf>,

    /// Taxonomy table (TSV) to remove non-matching ASVs from;
    /// ASV names must be in a column called 'ASV_ID'
    #[arg(long, value_name = "TSV")]
    pub tax_table: Option<PathBuf>,

    /// Species table from dada2 species assignment (TSV) to remove
    /// non-matching ASVs from; ASV names must be in a column called 'ASV_ID'
    #[arg(long, value_name = "TSV")]
    pub species_table: Option<PathBuf>,

    /// E-value to use in the blastn search
    #[arg(short, long, value_name = "N")]
    pub evalue: Option<f64>,

    /// Directory for cleaned output files (must not already exist)
    #[arg(long, value_name = "DIR")]
    pub outdir: Option<PathBuf>,

    /// Directory for per-record scratch files (must not already exist)
    #[arg(long, value_name = "DIR")]
    pub tmpdir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
