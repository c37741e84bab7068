use serde::{Deserialize, Serialize};

/// A single FASTA record. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl Sequence {
    pub fn new(id: String, sequence: Vec<u8>) -> Self {
        Self {
            id,
            description: None,
            sequence,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn header(&self) -> String {
        match &self.description {
            Some(desc) => format!(">{} {}", self.id, desc),
            None => format!(">{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_with_description() {
        let seq = Sequence::new("ASV_1".to_string(), b"ACGT".to_vec())
            .with_description("size=120".to_string());
        assert_eq!(seq.header(), ">ASV_1 size=120");
    }

    #[test]
    fn test_header_without_description() {
        let seq = Sequence::new("ASV_1".to_string(), b"ACGT".to_vec());
        assert_eq!(seq.header(), ">ASV_1");
    }
}
