pub mod fasta;
pub mod sequence;
pub mod tables;

pub use sequence::Sequence;
