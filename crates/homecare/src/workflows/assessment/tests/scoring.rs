use super::common::*;
use crate::workflows::assessment::catalog::{question_for, QuestionKey};
use crate::workflows::assessment::error::AssessmentError;
use crate::workflows::assessment::scoring::{score, CareRecommendation, ServiceCategory};

#[test]
fn lowest_answers_score_zero_and_independent() {
    let result = score(&lowest_answers()).expect("complete answers score");

    assert_eq!(result.score, 0);
    assert_eq!(result.recommendation, CareRecommendation::Independent);
    assert_eq!(result.suggested_services, vec![ServiceCategory::Respite]);
}

#[test]
fn highest_answers_score_sixteen_and_full_care() {
    let result = score(&highest_answers()).expect("complete answers score");

    assert_eq!(result.score, 16);
    assert_eq!(result.recommendation, CareRecommendation::FullCare);
    assert_eq!(
        result.suggested_services,
        vec![
            ServiceCategory::AssistedLiving,
            ServiceCategory::MemoryCare,
            ServiceCategory::NursingHome,
        ]
    );
    assert_eq!(
        result.description,
        CareRecommendation::FullCare.description()
    );
}

#[test]
fn relationship_contributes_no_points() {
    let mut as_spouse = lowest_answers();
    as_spouse
        .record(QuestionKey::Relationship, "spouse")
        .expect("valid option");

    let baseline = score(&lowest_answers()).expect("scores");
    let spouse = score(&as_spouse).expect("scores");

    assert_eq!(baseline.score, spouse.score);
    assert!(spouse
        .components
        .iter()
        .all(|component| component.key != QuestionKey::Relationship));
}

#[test]
fn raising_any_dimension_never_lowers_the_score() {
    for start in [lowest_answers(), highest_answers(), answers(&mixed())] {
        let base = score(&start).expect("scores").score;

        for key in QuestionKey::ordered().into_iter().filter(|key| key.is_scored()) {
            let current = start.get(key).expect("answered");
            let current_weight = question_for(key)
                .option(current)
                .and_then(|option| option.weight)
                .expect("weighted option");

            for option in &question_for(key).options {
                let weight = option.weight.expect("weighted option");
                if weight < current_weight {
                    continue;
                }
                let mut raised = start.clone();
                raised.record(key, option.id).expect("valid option");
                let total = score(&raised).expect("scores").score;
                assert!(
                    total >= base,
                    "raising {key} to {} lowered score {base} -> {total}",
                    option.id
                );
                assert_eq!(total - base, weight - current_weight);
            }
        }
    }
}

fn mixed() -> [(&'static str, &'static str); 7] {
    [
        ("relationship", "other"),
        ("mobility", "occasional-assistance"),
        ("hygiene", "significant-help"),
        ("medication", "occasional-reminders"),
        ("safety-concerns", "no"),
        ("memory-loss", "sometimes"),
        ("social-engagement", "occasional"),
    ]
}

#[test]
fn scoring_is_idempotent() {
    let answers = answers(&mixed());
    let first = score(&answers).expect("scores");
    let second = score(&answers).expect("scores");

    assert_eq!(first, second);
    assert_eq!(first.score, 6);
    assert_eq!(first.recommendation, CareRecommendation::LightCare);
}

#[test]
fn boundary_scores_map_to_expected_tiers() {
    // (mobility, hygiene, medication, safety, memory, social) -> total
    let cases = [
        (["bedbound", "independent", "no-support", "no", "none", "regular"], 3, CareRecommendation::Independent),
        (["bedbound", "occasional-reminders", "no-support", "no", "none", "regular"], 4, CareRecommendation::LightCare),
        (["bedbound", "unable-without-help", "occasional-reminders", "no", "none", "regular"], 7, CareRecommendation::LightCare),
        (["bedbound", "unable-without-help", "no-support", "yes", "none", "regular"], 8, CareRecommendation::ModerateCare),
        (["bedbound", "unable-without-help", "unable-without-support", "no", "often", "regular"], 12, CareRecommendation::ModerateCare),
        (["bedbound", "unable-without-help", "unable-without-support", "yes", "sometimes", "occasional"], 13, CareRecommendation::FullCare),
    ];

    for (options, expected_score, expected_tier) in cases {
        let mut pairs = vec![("relationship", "parent")];
        let scored = [
            "mobility",
            "hygiene",
            "medication",
            "safety-concerns",
            "memory-loss",
            "social-engagement",
        ];
        pairs.extend(scored.into_iter().zip(options));

        let result = score(&answers(&pairs)).expect("scores");
        assert_eq!(result.score, expected_score, "{options:?}");
        assert_eq!(result.recommendation, expected_tier, "{options:?}");
    }
}

#[test]
fn memory_loss_often_jumps_by_two() {
    let mut sometimes = lowest_answers();
    sometimes
        .record(QuestionKey::MemoryLoss, "sometimes")
        .expect("valid option");
    let mut often = lowest_answers();
    often
        .record(QuestionKey::MemoryLoss, "often")
        .expect("valid option");

    assert_eq!(score(&sometimes).expect("scores").score, 1);
    assert_eq!(score(&often).expect("scores").score, 3);
}

#[test]
fn six_of_seven_answers_is_incomplete() {
    let partial = answers(&HIGHEST[..6]);

    match score(&partial) {
        Err(AssessmentError::IncompleteAssessment { missing }) => {
            assert_eq!(missing, vec![QuestionKey::SocialEngagement]);
        }
        other => panic!("expected incomplete assessment, got {other:?}"),
    }
}

#[test]
fn missing_relationship_is_also_incomplete() {
    let partial = answers(&LOWEST[1..]);
    let err = score(&partial).expect_err("relationship is required");

    assert_eq!(err.resume_at(), Some(QuestionKey::Relationship));
}
