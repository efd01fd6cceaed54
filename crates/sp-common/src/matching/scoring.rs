use serde::Serialize;
use strum::{AsRefStr, Display};

use super::{
    similarity::{jaccard, preference_match},
    weights::{Weights, DEFAULT_WEIGHTS},
    MatchingError,
};
use crate::{normalize::tag_set, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Attribute {
    CsInterests,
    TechnicalSkills,
    SoftSkills,
    ResearchInterests,
    ProfessionalInterests,
    Hobbies,
    LearningStyle,
    PartnerPreference,
    StudyHours,
}

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    weights: Weights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl MatchingConfig {
    pub fn with_weights(weights: Weights) -> Result<Self, MatchingError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Skips validation. The scorer still never divides by a zero total and
    /// scores non-finite weight sets as 0.
    pub fn unchecked(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeScore {
    pub attribute: Attribute,
    pub weight: f64,
    /// Raw component score in [0, 1] before weighting.
    pub component: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub attributes: Vec<AttributeScore>,
    pub weighted_sum: f64,
    pub total_weight: f64,
    /// weighted_sum / total_weight, or 0 when the total weight is zero or
    /// not finite.
    pub total: f64,
}

/// Pairwise similarity with the default weights.
pub fn similarity(a: &UserProfile, b: &UserProfile) -> f64 {
    SimilarityScorer::default().similarity(a, b)
}

#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    config: MatchingConfig,
}

impl SimilarityScorer {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn similarity(&self, a: &UserProfile, b: &UserProfile) -> f64 {
        self.score_breakdown(a, b).total
    }

    pub fn score_breakdown(&self, a: &UserProfile, b: &UserProfile) -> ScoreBreakdown {
        let w = &self.config.weights;

        let attributes = vec![
            list_score(
                Attribute::CsInterests,
                w.cs_interests,
                &a.cs_interests,
                &b.cs_interests,
            ),
            list_score(
                Attribute::TechnicalSkills,
                w.technical_skills,
                &a.technical_skills,
                &b.technical_skills,
            ),
            list_score(Attribute::SoftSkills, w.soft_skills, &a.soft_skills, &b.soft_skills),
            list_score(
                Attribute::ResearchInterests,
                w.research_interests,
                &a.research_interests,
                &b.research_interests,
            ),
            list_score(
                Attribute::ProfessionalInterests,
                w.professional_interests,
                &a.professional_interests,
                &b.professional_interests,
            ),
            list_score(Attribute::Hobbies, w.hobbies, &a.hobbies, &b.hobbies),
            preference_score(
                Attribute::LearningStyle,
                w.learning_style,
                &a.preferred_learning_style,
                &b.preferred_learning_style,
            ),
            preference_score(
                Attribute::PartnerPreference,
                w.partner_preference,
                &a.study_partners_preferences,
                &b.study_partners_preferences,
            ),
            preference_score(
                Attribute::StudyHours,
                w.study_hours,
                &a.preferred_study_hours,
                &b.preferred_study_hours,
            ),
        ];

        // every weight counts toward the denominator, filled in or not
        let (weighted_sum, total_weight) =
            attributes.iter().fold((0.0_f64, 0.0_f64), |(sum, max), score| {
                (sum + score.contribution, max + score.weight)
            });

        // NaN survives clamp, so non-finite inputs are mapped to 0 explicitly
        let quotient = weighted_sum / total_weight;
        let total = if total_weight.is_finite() && total_weight > 0.0 && quotient.is_finite() {
            quotient.clamp(0.0, 1.0)
        } else {
            0.0
        };

        ScoreBreakdown {
            attributes,
            weighted_sum,
            total_weight,
            total,
        }
    }
}

fn list_score(attribute: Attribute, weight: f64, a: &str, b: &str) -> AttributeScore {
    let component = jaccard(&tag_set(a), &tag_set(b));
    AttributeScore {
        attribute,
        weight,
        component,
        contribution: component * weight,
    }
}

fn preference_score(attribute: Attribute, weight: f64, a: &str, b: &str) -> AttributeScore {
    let component = if preference_match(a, b) { 1.0 } else { 0.0 };
    AttributeScore {
        attribute,
        weight,
        component,
        contribution: component * weight,
    }
}
