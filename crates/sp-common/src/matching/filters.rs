use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use super::ranking::Recommendation;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    pub const HIGH_THRESHOLD: u8 = 70;
    pub const MEDIUM_THRESHOLD: u8 = 40;

    pub fn from_score(match_score: u8) -> Self {
        if match_score >= Self::HIGH_THRESHOLD {
            MatchTier::High
        } else if match_score >= Self::MEDIUM_THRESHOLD {
            MatchTier::Medium
        } else {
            MatchTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::High => "High Match",
            MatchTier::Medium => "Medium Match",
            MatchTier::Low => "Low Match",
        }
    }
}

/// Search box and tier selector applied on top of a finished ranking.
#[derive(Debug, Clone, Default)]
pub struct RecommendationFilter {
    pub query: Option<String>,
    pub tier: Option<MatchTier>,
}

impl RecommendationFilter {
    pub fn matches(&self, recommendation: &Recommendation) -> bool {
        self.matches_query(recommendation) && self.matches_tier(recommendation)
    }

    /// Keeps ranking order.
    pub fn apply(&self, recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
        recommendations
            .into_iter()
            .filter(|recommendation| self.matches(recommendation))
            .collect()
    }

    /// Only an exactly empty query matches everything; whitespace is searched
    /// for like any other text.
    fn matches_query(&self, recommendation: &Recommendation) -> bool {
        let query = match self.query.as_deref() {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return true,
        };

        let profile = &recommendation.profile;
        let name = format!("{} {}", profile.first_name, profile.last_name);

        [name.as_str(), profile.university.as_str(), profile.cs_interests.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    fn matches_tier(&self, recommendation: &Recommendation) -> bool {
        self.tier.map_or(true, |tier| recommendation.tier() == tier)
    }
}
