use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Question keys in the only order the wizard may visit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKey {
    Relationship,
    Mobility,
    Hygiene,
    Medication,
    SafetyConcerns,
    MemoryLoss,
    SocialEngagement,
}

impl QuestionKey {
    pub const COUNT: usize = 7;

    pub const fn ordered() -> [Self; 7] {
        [
            Self::Relationship,
            Self::Mobility,
            Self::Hygiene,
            Self::Medication,
            Self::SafetyConcerns,
            Self::MemoryLoss,
            Self::SocialEngagement,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relationship => "relationship",
            Self::Mobility => "mobility",
            Self::Hygiene => "hygiene",
            Self::Medication => "medication",
            Self::SafetyConcerns => "safety-concerns",
            Self::MemoryLoss => "memory-loss",
            Self::SocialEngagement => "social-engagement",
        }
    }

    /// Zero-based position in the catalog.
    pub const fn position(self) -> usize {
        self as usize
    }

    pub fn at(index: usize) -> Option<Self> {
        Self::ordered().get(index).copied()
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(raw))
    }

    /// Only `relationship` is informational; every other key carries weight.
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Relationship)
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed option set for a single question.
pub trait AnswerOption: Copy + Eq + Sized + 'static {
    const KEY: QuestionKey;
    const ALL: &'static [Self];

    fn id(self) -> &'static str;
    fn label(self) -> &'static str;

    fn description(self) -> Option<&'static str> {
        None
    }

    fn parse(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL.iter().copied().find(|option| option.id() == id)
    }
}

/// Option set whose selection contributes points to the total score.
pub trait ScoredOption: AnswerOption {
    fn weight(self) -> u8;

    fn max_weight() -> u8 {
        Self::ALL
            .iter()
            .map(|option| option.weight())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    #[serde(rename = "self")]
    Myself,
    Parent,
    Spouse,
    Other,
}

impl AnswerOption for Relationship {
    const KEY: QuestionKey = QuestionKey::Relationship;
    const ALL: &'static [Self] = &[Self::Myself, Self::Parent, Self::Spouse, Self::Other];

    fn id(self) -> &'static str {
        match self {
            Self::Myself => "self",
            Self::Parent => "parent",
            Self::Spouse => "spouse",
            Self::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Myself => "Myself",
            Self::Parent => "My parent",
            Self::Spouse => "My spouse or partner",
            Self::Other => "Another loved one",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mobility {
    Independent,
    OccasionalAssistance,
    ConstantAssistance,
    Bedbound,
}

impl AnswerOption for Mobility {
    const KEY: QuestionKey = QuestionKey::Mobility;
    const ALL: &'static [Self] = &[
        Self::Independent,
        Self::OccasionalAssistance,
        Self::ConstantAssistance,
        Self::Bedbound,
    ];

    fn id(self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::OccasionalAssistance => "occasional-assistance",
            Self::ConstantAssistance => "constant-assistance",
            Self::Bedbound => "bedbound",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Independent => "Fully independent",
            Self::OccasionalAssistance => "Needs occasional assistance",
            Self::ConstantAssistance => "Needs constant assistance",
            Self::Bedbound => "Bedbound",
        }
    }

    fn description(self) -> Option<&'static str> {
        match self {
            Self::Independent => Some("Walks and moves around the home without help"),
            Self::OccasionalAssistance => Some("Uses a cane or walker, or needs help on stairs"),
            Self::ConstantAssistance => Some("Needs a hand for most transfers and walking"),
            Self::Bedbound => None,
        }
    }
}

impl ScoredOption for Mobility {
    fn weight(self) -> u8 {
        match self {
            Self::Independent => 0,
            Self::OccasionalAssistance => 1,
            Self::ConstantAssistance => 2,
            Self::Bedbound => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hygiene {
    Independent,
    OccasionalReminders,
    SignificantHelp,
    UnableWithoutHelp,
}

impl AnswerOption for Hygiene {
    const KEY: QuestionKey = QuestionKey::Hygiene;
    const ALL: &'static [Self] = &[
        Self::Independent,
        Self::OccasionalReminders,
        Self::SignificantHelp,
        Self::UnableWithoutHelp,
    ];

    fn id(self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::OccasionalReminders => "occasional-reminders",
            Self::SignificantHelp => "significant-help",
            Self::UnableWithoutHelp => "unable-without-help",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Independent => "Independent",
            Self::OccasionalReminders => "Needs occasional reminders",
            Self::SignificantHelp => "Needs significant help",
            Self::UnableWithoutHelp => "Unable without help",
        }
    }
}

impl ScoredOption for Hygiene {
    fn weight(self) -> u8 {
        match self {
            Self::Independent => 0,
            Self::OccasionalReminders => 1,
            Self::SignificantHelp => 2,
            Self::UnableWithoutHelp => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Medication {
    NoSupport,
    OccasionalReminders,
    DailyReminders,
    UnableWithoutSupport,
}

impl AnswerOption for Medication {
    const KEY: QuestionKey = QuestionKey::Medication;
    const ALL: &'static [Self] = &[
        Self::NoSupport,
        Self::OccasionalReminders,
        Self::DailyReminders,
        Self::UnableWithoutSupport,
    ];

    fn id(self) -> &'static str {
        match self {
            Self::NoSupport => "no-support",
            Self::OccasionalReminders => "occasional-reminders",
            Self::DailyReminders => "daily-reminders",
            Self::UnableWithoutSupport => "unable-without-support",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::NoSupport => "Manages medications alone",
            Self::OccasionalReminders => "Needs occasional reminders",
            Self::DailyReminders => "Needs daily reminders",
            Self::UnableWithoutSupport => "Cannot manage medications without support",
        }
    }
}

impl ScoredOption for Medication {
    fn weight(self) -> u8 {
        match self {
            Self::NoSupport => 0,
            Self::OccasionalReminders => 1,
            Self::DailyReminders => 2,
            Self::UnableWithoutSupport => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SafetyConcerns {
    Yes,
    No,
}

impl AnswerOption for SafetyConcerns {
    const KEY: QuestionKey = QuestionKey::SafetyConcerns;
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn id(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    fn description(self) -> Option<&'static str> {
        match self {
            Self::Yes => Some("Falls, wandering, leaving the stove on, or similar incidents"),
            Self::No => None,
        }
    }
}

impl ScoredOption for SafetyConcerns {
    fn weight(self) -> u8 {
        match self {
            Self::Yes => 2,
            Self::No => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryLoss {
    None,
    Sometimes,
    Often,
}

impl AnswerOption for MemoryLoss {
    const KEY: QuestionKey = QuestionKey::MemoryLoss;
    const ALL: &'static [Self] = &[Self::None, Self::Sometimes, Self::Often];

    fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sometimes => "sometimes",
            Self::Often => "often",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "No memory concerns",
            Self::Sometimes => "Sometimes forgetful",
            Self::Often => "Often confused or forgetful",
        }
    }
}

impl ScoredOption for MemoryLoss {
    // Frequent memory loss jumps straight to 3: it drives most supervision needs.
    fn weight(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Sometimes => 1,
            Self::Often => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialEngagement {
    Regular,
    Occasional,
    Isolated,
}

impl AnswerOption for SocialEngagement {
    const KEY: QuestionKey = QuestionKey::SocialEngagement;
    const ALL: &'static [Self] = &[Self::Regular, Self::Occasional, Self::Isolated];

    fn id(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Occasional => "occasional",
            Self::Isolated => "isolated",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regularly sees friends and family",
            Self::Occasional => "Occasional social contact",
            Self::Isolated => "Mostly isolated",
        }
    }
}

impl ScoredOption for SocialEngagement {
    fn weight(self) -> u8 {
        match self {
            Self::Regular => 0,
            Self::Occasional => 1,
            Self::Isolated => 2,
        }
    }
}

/// Rendered catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub key: QuestionKey,
    pub prompt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u8>,
}

fn informational<O: AnswerOption>() -> Vec<QuestionOption> {
    O::ALL
        .iter()
        .map(|option| QuestionOption {
            id: option.id(),
            label: option.label(),
            description: option.description(),
            weight: None,
        })
        .collect()
}

fn weighted<O: ScoredOption>() -> Vec<QuestionOption> {
    O::ALL
        .iter()
        .map(|option| QuestionOption {
            id: option.id(),
            label: option.label(),
            description: option.description(),
            weight: Some(option.weight()),
        })
        .collect()
}

fn question(
    key: QuestionKey,
    prompt: &'static str,
    subtitle: Option<&'static str>,
    options: Vec<QuestionOption>,
) -> Question {
    Question {
        key,
        prompt,
        subtitle,
        options,
    }
}

/// The seven-question catalog, built once and shared for the life of the process.
pub fn catalog() -> &'static [Question] {
    static CATALOG: OnceLock<Vec<Question>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            question(
                QuestionKey::Relationship,
                "Who are you looking for care for?",
                None,
                informational::<Relationship>(),
            ),
            question(
                QuestionKey::Mobility,
                "How would you describe their mobility?",
                Some("Think about a typical day at home"),
                weighted::<Mobility>(),
            ),
            question(
                QuestionKey::Hygiene,
                "How much help do they need with bathing and grooming?",
                None,
                weighted::<Hygiene>(),
            ),
            question(
                QuestionKey::Medication,
                "How well do they manage their medications?",
                None,
                weighted::<Medication>(),
            ),
            question(
                QuestionKey::SafetyConcerns,
                "Have there been any safety concerns recently?",
                Some("Falls, wandering, or other incidents in the last six months"),
                weighted::<SafetyConcerns>(),
            ),
            question(
                QuestionKey::MemoryLoss,
                "Are they experiencing memory loss?",
                None,
                weighted::<MemoryLoss>(),
            ),
            question(
                QuestionKey::SocialEngagement,
                "How socially engaged are they?",
                None,
                weighted::<SocialEngagement>(),
            ),
        ]
    })
}

pub fn question_for(key: QuestionKey) -> &'static Question {
    &catalog()[key.position()]
}
