use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use serde::Deserialize;
use tracing::{info, warn};

use super::DatasetError;
use crate::UserProfile;

/// One row of the bulk student export. Missing columns and cells are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DatasetRow {
    #[serde(rename = "Registration Number")]
    registration_number: String,
    #[serde(rename = "First Name")]
    first_name: String,
    #[serde(rename = "Last Name")]
    last_name: String,
    #[serde(rename = "Email Address")]
    email: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Nationality")]
    nationality: String,
    #[serde(rename = "University")]
    university: String,
    #[serde(rename = "Technical Skills")]
    technical_skills: String,
    #[serde(rename = "Soft Skills")]
    soft_skills: String,
    #[serde(rename = "Research Interests")]
    research_interests: String,
    #[serde(rename = "Professional Interests")]
    professional_interests: String,
    #[serde(rename = "Hobbies")]
    hobbies: String,
    #[serde(rename = "Preferred Learning Style")]
    preferred_learning_style: String,
    #[serde(rename = "Study Partners Preferences")]
    study_partners_preferences: String,
    #[serde(rename = "Preferred Study Hours")]
    preferred_study_hours: String,
    #[serde(rename = "CS and Data Science Interests")]
    cs_interests: String,
}

impl DatasetRow {
    fn into_profile(self, index: usize) -> UserProfile {
        UserProfile {
            id: format!("dataset_{index}"),
            cs_interests: self.cs_interests,
            technical_skills: self.technical_skills,
            soft_skills: self.soft_skills,
            research_interests: self.research_interests,
            professional_interests: self.professional_interests,
            hobbies: self.hobbies,
            preferred_learning_style: self.preferred_learning_style,
            study_partners_preferences: self.study_partners_preferences,
            preferred_study_hours: self.preferred_study_hours,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            university: self.university,
            registration_number: self.registration_number,
            city: self.city,
            state: self.state,
            nationality: self.nationality,
            is_from_dataset: true,
        }
    }
}

/// Parses a headered CSV export into profiles with ids `dataset_<row>`.
///
/// Blank lines are skipped. Short rows are padded with empty cells and long
/// rows lose their extra cells. Rows that still cannot be decoded are dropped
/// with a warning but consume their index, so ids stay tied to row position.
pub fn load_dataset_from_reader<R: Read>(reader: R) -> Result<Vec<UserProfile>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // header problems are fatal, row problems are not
    let headers = reader.headers()?.clone();

    let mut profiles = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let mut record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!(row = index, error = %err, "skipping unreadable dataset row");
                continue;
            }
        };
        pad_to_width(&mut record, headers.len());

        match record.deserialize::<DatasetRow>(Some(&headers)) {
            Ok(row) => profiles.push(row.into_profile(index)),
            Err(err) => warn!(row = index, error = %err, "skipping malformed dataset row"),
        }
    }

    Ok(profiles)
}

fn pad_to_width(record: &mut csv::StringRecord, width: usize) {
    record.truncate(width);
    while record.len() < width {
        record.push_field("");
    }
}

pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<UserProfile>, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let profiles = load_dataset_from_reader(file)?;
    info!(path = %path.display(), profiles = profiles.len(), "loaded student dataset");
    Ok(profiles)
}

/// Load-once cache for the bulk dataset, owned by whoever builds the pool.
#[derive(Debug)]
pub struct DatasetStore {
    path: Option<PathBuf>,
    profiles: OnceLock<Vec<UserProfile>>,
}

impl DatasetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            profiles: OnceLock::new(),
        }
    }

    /// A store that is already loaded and never touches the filesystem.
    pub fn from_profiles(profiles: Vec<UserProfile>) -> Self {
        Self {
            path: None,
            profiles: OnceLock::from(profiles),
        }
    }

    /// Loads on the first call; later calls return the cached profiles.
    /// A failed load is not cached, so the next call retries.
    pub fn get_or_load(&self) -> Result<&[UserProfile], DatasetError> {
        if let Some(profiles) = self.profiles.get() {
            return Ok(profiles.as_slice());
        }

        let loaded = match &self.path {
            Some(path) => load_dataset(path)?,
            None => Vec::new(),
        };
        Ok(self.profiles.get_or_init(|| loaded).as_slice())
    }

    /// Cached profiles, or nothing if the store was never loaded.
    pub fn cached(&self) -> &[UserProfile] {
        self.profiles.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loaded(&self) -> bool {
        self.profiles.get().is_some()
    }
}
