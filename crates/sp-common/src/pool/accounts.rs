use std::{fs, io::ErrorKind, path::Path};

use tracing::info;

use super::DatasetError;
use crate::UserProfile;

/// Reads locally registered accounts: a JSON array of profiles.
///
/// A missing file means nobody has registered yet and yields an empty list.
pub fn load_accounts(path: impl AsRef<Path>) -> Result<Vec<UserProfile>, DatasetError> {
    let path = path.as_ref();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(DatasetError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let accounts: Vec<UserProfile> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), accounts = accounts.len(), "loaded registered accounts");
    Ok(accounts)
}
