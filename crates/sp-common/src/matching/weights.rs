use super::MatchingError;

/// Tolerance used when checking that a weight set is convex.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Default attribute weights. CS interests dominate; the three single choice
/// preferences only nudge the result.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    cs_interests: 0.40,
    technical_skills: 0.15,
    soft_skills: 0.10,
    research_interests: 0.10,
    professional_interests: 0.10,
    hobbies: 0.05,
    learning_style: 0.05,
    partner_preference: 0.03,
    study_hours: 0.02,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub cs_interests: f64,
    pub technical_skills: f64,
    pub soft_skills: f64,
    pub research_interests: f64,
    pub professional_interests: f64,
    pub hobbies: f64,
    pub learning_style: f64,
    pub partner_preference: f64,
    pub study_hours: f64,
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl Weights {
    /// Zero for every attribute. Only useful to exercise the degenerate path.
    pub const ZERO: Weights = Weights {
        cs_interests: 0.0,
        technical_skills: 0.0,
        soft_skills: 0.0,
        research_interests: 0.0,
        professional_interests: 0.0,
        hobbies: 0.0,
        learning_style: 0.0,
        partner_preference: 0.0,
        study_hours: 0.0,
    };

    pub fn sum(&self) -> f64 {
        self.named().iter().map(|(_, weight)| weight).sum()
    }

    pub fn validate(&self) -> Result<(), MatchingError> {
        if let Some((attribute, _)) = self
            .named()
            .into_iter()
            .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
        {
            return Err(MatchingError::NegativeWeight { attribute });
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatchingError::InvalidWeights { sum });
        }

        Ok(())
    }

    fn named(&self) -> [(&'static str, f64); 9] {
        [
            ("cs_interests", self.cs_interests),
            ("technical_skills", self.technical_skills),
            ("soft_skills", self.soft_skills),
            ("research_interests", self.research_interests),
            ("professional_interests", self.professional_interests),
            ("hobbies", self.hobbies),
            ("learning_style", self.learning_style),
            ("partner_preference", self.partner_preference),
            ("study_hours", self.study_hours),
        ]
    }
}
