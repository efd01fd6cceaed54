//! Candidate pool sources. These live outside the scoring core: they load
//! profiles once and hand the materialized list to the ranker.

pub mod accounts;
pub mod dataset;

use std::path::PathBuf;

pub use accounts::load_accounts;
pub use dataset::{load_dataset, load_dataset_from_reader, DatasetStore};

use crate::UserProfile;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Concatenation of every profile source, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    profiles: Vec<UserProfile>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles<I>(mut self, profiles: I) -> Self
    where
        I: IntoIterator<Item = UserProfile>,
    {
        self.profiles.extend(profiles);
        self
    }

    /// First profile carrying `id`.
    pub fn find(&self, id: &str) -> Option<&UserProfile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn as_slice(&self) -> &[UserProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
