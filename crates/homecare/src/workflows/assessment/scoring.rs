use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::catalog::{AnswerOption, QuestionKey, ScoredOption};
use super::error::AssessmentError;

/// Ordered care-level recommendation tiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CareRecommendation {
    Independent,
    LightCare,
    ModerateCare,
    FullCare,
}

impl CareRecommendation {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Independent,
            Self::LightCare,
            Self::ModerateCare,
            Self::FullCare,
        ]
    }

    /// Inclusive thresholds: 0-3, 4-7, 8-12, 13 and above.
    pub const fn for_score(score: u8) -> Self {
        match score {
            0..=3 => Self::Independent,
            4..=7 => Self::LightCare,
            8..=12 => Self::ModerateCare,
            _ => Self::FullCare,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::LightCare => "light-care",
            Self::ModerateCare => "moderate-care",
            Self::FullCare => "full-care",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Independent => "Independent Living",
            Self::LightCare => "Light Care",
            Self::ModerateCare => "Moderate Care",
            Self::FullCare => "Full Care",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Independent => {
                "Your loved one is managing well on their own. Respite care can give family caregivers a break while keeping routines intact."
            }
            Self::LightCare => {
                "A few hours of in-home help each week with errands, reminders and companionship can keep your loved one safe and independent."
            }
            Self::ModerateCare => {
                "Daily hands-on support is recommended. Regular in-home care or an assisted living community can cover personal care and medication needs."
            }
            Self::FullCare => {
                "Around-the-clock support is recommended. Assisted living, memory care or skilled nursing provide the supervision and medical attention needed."
            }
        }
    }

    pub const fn suggested_services(self) -> &'static [ServiceCategory] {
        match self {
            Self::Independent => &[ServiceCategory::Respite],
            Self::LightCare => &[ServiceCategory::InHome, ServiceCategory::Respite],
            Self::ModerateCare => &[ServiceCategory::InHome, ServiceCategory::AssistedLiving],
            Self::FullCare => &[
                ServiceCategory::AssistedLiving,
                ServiceCategory::MemoryCare,
                ServiceCategory::NursingHome,
            ],
        }
    }
}

/// Service lines the company can connect a family with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    InHome,
    Respite,
    AssistedLiving,
    MemoryCare,
    NursingHome,
}

impl ServiceCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InHome => "in-home",
            Self::Respite => "respite",
            Self::AssistedLiving => "assisted-living",
            Self::MemoryCare => "memory-care",
            Self::NursingHome => "nursing-home",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InHome => "In-Home Care",
            Self::Respite => "Respite Care",
            Self::AssistedLiving => "Assisted Living",
            Self::MemoryCare => "Memory Care",
            Self::NursingHome => "Nursing Home",
        }
    }
}

/// Points contributed by one answered dimension, kept for transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub key: QuestionKey,
    pub option: String,
    pub points: u8,
}

/// Outcome of scoring a completed answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub score: u8,
    pub recommendation: CareRecommendation,
    pub suggested_services: Vec<ServiceCategory>,
    pub description: String,
    pub components: Vec<DimensionScore>,
}

/// Highest total any answer set can reach.
pub const MAX_SCORE: u8 = 16;

fn dimension<O: ScoredOption>(
    selection: Option<O>,
    components: &mut Vec<DimensionScore>,
) -> u8 {
    match selection {
        Some(option) => {
            let points = option.weight();
            components.push(DimensionScore {
                key: O::KEY,
                option: option.id().to_string(),
                points,
            });
            points
        }
        None => 0,
    }
}

/// Score a completed answer set.
///
/// Every key, including the unweighted `relationship`, must be answered; a
/// missing dimension is reported rather than counted as zero.
pub fn score(answers: &AnswerSet) -> Result<AssessmentResult, AssessmentError> {
    let missing = answers.missing();
    if !missing.is_empty() {
        return Err(AssessmentError::IncompleteAssessment { missing });
    }

    let mut components = Vec::with_capacity(QuestionKey::COUNT - 1);
    let score = dimension(answers.mobility, &mut components)
        + dimension(answers.hygiene, &mut components)
        + dimension(answers.medication, &mut components)
        + dimension(answers.safety_concerns, &mut components)
        + dimension(answers.memory_loss, &mut components)
        + dimension(answers.social_engagement, &mut components);

    let recommendation = CareRecommendation::for_score(score);

    Ok(AssessmentResult {
        score,
        recommendation,
        suggested_services: recommendation.suggested_services().to_vec(),
        description: recommendation.description().to_string(),
        components,
    })
}
