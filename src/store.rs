use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::models::Record;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not a valid list of candidates: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The full candidate collection plus every distinct skill seen in it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    all_skills: Vec<String>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        let mut seen_skills: HashSet<&str> = HashSet::new();
        let mut seen_ids: HashSet<u64> = HashSet::new();
        let mut all_skills = Vec::new();

        for record in &records {
            if !seen_ids.insert(record.id) {
                tracing::warn!(id = record.id, "duplicate candidate id; lookups use the first");
            }
            for skill in &record.skills {
                if seen_skills.insert(skill.as_str()) {
                    all_skills.push(skill.clone());
                }
            }
        }

        Self {
            records,
            all_skills,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn all_skills(&self) -> &[String] {
        &self.all_skills
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }
}

pub fn parse(bytes: &[u8]) -> Result<Dataset, DatasetError> {
    let records: Vec<Record> = serde_json::from_slice(bytes)?;
    Ok(Dataset::from_records(records))
}

pub async fn load_path(path: &Path) -> Result<Dataset, DatasetError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        candidates = dataset.len(),
        skills = dataset.all_skills().len(),
        "dataset loaded"
    );
    Ok(dataset)
}
