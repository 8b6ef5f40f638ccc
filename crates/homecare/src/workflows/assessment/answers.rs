use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{
    AnswerOption, Hygiene, Medication, MemoryLoss, Mobility, QuestionKey, Relationship,
    SafetyConcerns, SocialEngagement,
};
use super::error::AssessmentError;

/// Selections accumulated for one assessment run, keyed by question.
///
/// Each slot is typed by its question's option set, so an identifier that is
/// not part of that set can never be stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AnswerSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility: Option<Mobility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hygiene: Option<Hygiene>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication: Option<Medication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_concerns: Option<SafetyConcerns>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_loss: Option<MemoryLoss>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_engagement: Option<SocialEngagement>,
}

fn select<O: AnswerOption>(slot: &mut Option<O>, option_id: &str) -> Result<(), AssessmentError> {
    let option = O::parse(option_id).ok_or_else(|| AssessmentError::InvalidOptionSelected {
        key: O::KEY,
        option: option_id.to_string(),
    })?;
    *slot = Some(option);
    Ok(())
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `question key -> option id` pairs, e.g. a form post.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, AssessmentError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut answers = Self::new();
        for (key, option) in pairs {
            let key = key.as_ref();
            let question = QuestionKey::parse(key)
                .ok_or_else(|| AssessmentError::UnknownQuestion(key.to_string()))?;
            answers.record(question, option.as_ref())?;
        }
        Ok(answers)
    }

    /// Store `option_id` under `key`, replacing any earlier selection.
    pub fn record(&mut self, key: QuestionKey, option_id: &str) -> Result<(), AssessmentError> {
        match key {
            QuestionKey::Relationship => select(&mut self.relationship, option_id),
            QuestionKey::Mobility => select(&mut self.mobility, option_id),
            QuestionKey::Hygiene => select(&mut self.hygiene, option_id),
            QuestionKey::Medication => select(&mut self.medication, option_id),
            QuestionKey::SafetyConcerns => select(&mut self.safety_concerns, option_id),
            QuestionKey::MemoryLoss => select(&mut self.memory_loss, option_id),
            QuestionKey::SocialEngagement => select(&mut self.social_engagement, option_id),
        }
    }

    /// Option id currently stored under `key`.
    pub fn get(&self, key: QuestionKey) -> Option<&'static str> {
        match key {
            QuestionKey::Relationship => self.relationship.map(AnswerOption::id),
            QuestionKey::Mobility => self.mobility.map(AnswerOption::id),
            QuestionKey::Hygiene => self.hygiene.map(AnswerOption::id),
            QuestionKey::Medication => self.medication.map(AnswerOption::id),
            QuestionKey::SafetyConcerns => self.safety_concerns.map(AnswerOption::id),
            QuestionKey::MemoryLoss => self.memory_loss.map(AnswerOption::id),
            QuestionKey::SocialEngagement => self.social_engagement.map(AnswerOption::id),
        }
    }

    pub fn contains(&self, key: QuestionKey) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.len() == QuestionKey::COUNT
    }

    /// Unanswered keys in catalog order.
    pub fn missing(&self) -> Vec<QuestionKey> {
        QuestionKey::ordered()
            .into_iter()
            .filter(|key| !self.contains(*key))
            .collect()
    }

    pub fn first_unanswered(&self) -> Option<QuestionKey> {
        QuestionKey::ordered()
            .into_iter()
            .find(|key| !self.contains(*key))
    }

    /// Answered `(key, option id)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, &'static str)> + '_ {
        QuestionKey::ordered()
            .into_iter()
            .filter_map(move |key| self.get(key).map(|option| (key, option)))
    }

    pub fn to_map(&self) -> BTreeMap<QuestionKey, &'static str> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_overwrites_previous_selection() {
        let mut answers = AnswerSet::new();
        answers
            .record(QuestionKey::Mobility, "bedbound")
            .expect("valid option");
        answers
            .record(QuestionKey::Mobility, "independent")
            .expect("valid option");

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(QuestionKey::Mobility), Some("independent"));
    }

    #[test]
    fn record_rejects_foreign_option_ids() {
        let mut answers = AnswerSet::new();
        let err = answers
            .record(QuestionKey::MemoryLoss, "bedbound")
            .expect_err("bedbound is a mobility option");

        assert_eq!(
            err,
            AssessmentError::InvalidOptionSelected {
                key: QuestionKey::MemoryLoss,
                option: "bedbound".to_string(),
            }
        );
        assert!(answers.is_empty());
    }

    #[test]
    fn from_pairs_reports_unknown_questions() {
        let err = AnswerSet::from_pairs([("diet", "vegetarian")]).expect_err("unknown key");
        assert_eq!(err, AssessmentError::UnknownQuestion("diet".to_string()));
    }

    #[test]
    fn missing_lists_keys_in_catalog_order() {
        let answers =
            AnswerSet::from_pairs([("hygiene", "independent"), ("relationship", "parent")])
                .expect("valid answers");

        assert_eq!(
            answers.missing(),
            vec![
                QuestionKey::Mobility,
                QuestionKey::Medication,
                QuestionKey::SafetyConcerns,
                QuestionKey::MemoryLoss,
                QuestionKey::SocialEngagement,
            ]
        );
        assert_eq!(answers.first_unanswered(), Some(QuestionKey::Mobility));
    }

    #[test]
    fn json_uses_question_keys_and_option_ids() {
        let answers = AnswerSet::from_pairs([
            ("relationship", "self"),
            ("safety-concerns", "yes"),
            ("memory-loss", "none"),
        ])
        .expect("valid answers");

        let encoded = serde_json::to_value(&answers).expect("serializes");
        assert_eq!(
            encoded,
            serde_json::json!({
                "relationship": "self",
                "safety-concerns": "yes",
                "memory-loss": "none",
            })
        );

        let decoded: AnswerSet = serde_json::from_value(encoded).expect("round trips");
        assert_eq!(decoded, answers);
    }
}
