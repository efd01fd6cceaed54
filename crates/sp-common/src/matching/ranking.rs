use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use super::{
    filters::MatchTier,
    scoring::{MatchingConfig, SimilarityScorer},
};
use crate::UserProfile;

/// A ranked candidate: the untouched profile plus its match score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(flatten)]
    pub profile: UserProfile,
    /// round(similarity * 100), always within 0..=100.
    pub match_score: u8,
    #[serde(skip)]
    pub similarity: f64,
}

impl Recommendation {
    fn from_scored(profile: UserProfile, similarity: f64) -> Self {
        Self {
            profile,
            match_score: to_match_score(similarity),
            similarity,
        }
    }

    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.match_score)
    }
}

fn to_match_score(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Ranks a pool with the default weights.
pub fn rank(
    target: &UserProfile,
    pool: &[UserProfile],
    limit: Option<usize>,
) -> Vec<Recommendation> {
    RecommendationEngine::default().rank(target, pool, limit)
}

#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    scorer: SimilarityScorer,
}

impl RecommendationEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            scorer: SimilarityScorer::new(config),
        }
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Scores every candidate except the target, best first.
    ///
    /// Equal scores keep their pool order. `limit` of `None` or `Some(0)`
    /// returns the whole ranking.
    pub fn rank(
        &self,
        target: &UserProfile,
        pool: &[UserProfile],
        limit: Option<usize>,
    ) -> Vec<Recommendation> {
        let mut scored: Vec<(&UserProfile, f64)> = pool
            .iter()
            .filter(|candidate| candidate.id != target.id)
            .map(|candidate| (candidate, self.scorer.similarity(target, candidate)))
            .collect();
        let excluded = pool.len() - scored.len();

        // sort_by is stable, so ties stay in input order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        if let Some(limit) = limit.filter(|limit| *limit > 0) {
            scored.truncate(limit);
        }

        debug!(
            target_id = %target.id,
            pool_size = pool.len(),
            excluded,
            returned = scored.len(),
            "ranked candidate pool"
        );

        scored
            .into_iter()
            .map(|(candidate, similarity)| {
                Recommendation::from_scored(candidate.clone(), similarity)
            })
            .collect()
    }
}
