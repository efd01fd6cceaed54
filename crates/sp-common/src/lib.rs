pub mod logging;
pub mod matching;
pub mod normalize;
pub mod pool;

use serde::{Deserialize, Deserializer, Serialize};

pub use matching::{
    filters::{MatchTier, RecommendationFilter},
    ranking::{rank, Recommendation, RecommendationEngine},
    scoring::{similarity, MatchingConfig, ScoreBreakdown, SimilarityScorer},
    weights::{Weights, DEFAULT_WEIGHTS},
    MatchingError,
};

/// A student profile as supplied by the data-loading layer.
///
/// Every attribute is always present and defaults to an empty string, so a
/// record with missing keys behaves exactly like one that left them blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,

    // comma separated tag lists
    #[serde(deserialize_with = "lenient_string")]
    pub cs_interests: String,
    #[serde(deserialize_with = "lenient_string")]
    pub technical_skills: String,
    #[serde(deserialize_with = "lenient_string")]
    pub soft_skills: String,
    #[serde(deserialize_with = "lenient_string")]
    pub research_interests: String,
    #[serde(deserialize_with = "lenient_string")]
    pub professional_interests: String,
    #[serde(deserialize_with = "lenient_string")]
    pub hobbies: String,

    // single choice preferences
    #[serde(deserialize_with = "lenient_string")]
    pub preferred_learning_style: String,
    #[serde(deserialize_with = "lenient_string")]
    pub study_partners_preferences: String,
    #[serde(deserialize_with = "lenient_string")]
    pub preferred_study_hours: String,

    // carried through to recommendations untouched
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub university: String,
    #[serde(deserialize_with = "lenient_string")]
    pub registration_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(deserialize_with = "lenient_string")]
    pub nationality: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_from_dataset: bool,
}

impl UserProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// "First Last", or the id when both name parts are blank.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.id.clone()
        } else {
            name.to_string()
        }
    }
}

/// Accepts a string; `null`, numbers, booleans and nested values become "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Text(text) => text,
        Lenient::Other(_) => String::new(),
    })
}

/// Like `lenient_string`, but numeric ids keep their digits.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Signed(i64),
        Unsigned(u64),
        Float(f64),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Signed(n) => n.to_string(),
        Id::Unsigned(n) => n.to_string(),
        Id::Float(n) => n.to_string(),
        Id::Other(_) => String::new(),
    })
}

/// Accepts a boolean; anything else is `false`.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Other(serde::de::IgnoredAny),
    }

    Ok(matches!(Flag::deserialize(deserializer)?, Flag::Bool(true)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_deserialize_to_empty() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id":"u1","csInterests":"AI"}"#).unwrap();

        assert_eq!(profile.id, "u1");
        assert_eq!(profile.cs_interests, "AI");
        assert_eq!(profile.hobbies, "");
        assert!(!profile.is_from_dataset);
    }

    #[test]
    fn non_string_attributes_are_treated_as_no_data() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id":"u2","hobbies":null,"softSkills":42,"technicalSkills":["rust"],"preferredStudyHours":true}"#,
        )
        .unwrap();

        assert_eq!(profile.hobbies, "");
        assert_eq!(profile.soft_skills, "");
        assert_eq!(profile.technical_skills, "");
        assert_eq!(profile.preferred_study_hours, "");
    }

    #[test]
    fn dataset_flag_tolerates_non_boolean_values() {
        let parse = |json: &str| serde_json::from_str::<UserProfile>(json).unwrap();

        assert!(!parse(r#"{"id":"a","isFromDataset":null}"#).is_from_dataset);
        assert!(!parse(r#"{"id":"b","isFromDataset":"yes"}"#).is_from_dataset);
        assert!(!parse(r#"{"id":"c","isFromDataset":1}"#).is_from_dataset);
        assert!(parse(r#"{"id":"d","isFromDataset":true}"#).is_from_dataset);
    }

    #[test]
    fn numeric_ids_keep_their_digits() {
        let profiles: Vec<UserProfile> =
            serde_json::from_str(r#"[{"id":17},{"id":1700000000000},{"id":-3},{"id":null}]"#)
                .unwrap();

        let ids: Vec<_> = profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["17", "1700000000000", "-3", ""]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let profile = UserProfile {
            cs_interests: "AI".into(),
            ..UserProfile::new("u3")
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["csInterests"], "AI");
        assert_eq!(json["isFromDataset"], false);
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let mut profile = UserProfile::new("dataset_7");
        assert_eq!(profile.display_name(), "dataset_7");

        profile.first_name = "Ada".into();
        assert_eq!(profile.display_name(), "Ada");

        profile.last_name = " Lovelace ".into();
        assert_eq!(profile.display_name(), "Ada Lovelace");
    }
}
