//! End-to-end scenarios for the care needs assessment, driven through the public
//! wizard, scoring, and service facade only.

mod common {
    use std::sync::{Arc, Mutex};

    use homecare::workflows::assessment::{
        AssessmentService, ContactDetails, IntakeError, LeadIntake, LeadReceipt, LeadSubmission,
        QuestionKey, StaticZipDirectory, WizardState,
    };

    #[derive(Default, Clone)]
    pub(super) struct RecordingIntake {
        leads: Arc<Mutex<Vec<LeadSubmission>>>,
    }

    impl RecordingIntake {
        pub(super) fn leads(&self) -> Vec<LeadSubmission> {
            self.leads.lock().expect("lock").clone()
        }
    }

    impl LeadIntake for RecordingIntake {
        fn submit(&self, lead: LeadSubmission) -> Result<LeadReceipt, IntakeError> {
            self.leads.lock().expect("lock").push(lead);
            Ok(LeadReceipt::issue())
        }
    }

    pub(super) fn build_service() -> (
        AssessmentService<RecordingIntake, StaticZipDirectory>,
        Arc<RecordingIntake>,
    ) {
        let intake = Arc::new(RecordingIntake::default());
        let service =
            AssessmentService::new(intake.clone(), Arc::new(StaticZipDirectory::builtin()));
        (service, intake)
    }

    pub(super) fn run_wizard(options: [&str; 7]) -> WizardState {
        QuestionKey::ordered()
            .into_iter()
            .zip(options)
            .fold(WizardState::start(), |state, (key, option)| {
                state.answer(key, option).expect("answer accepted")
            })
    }

    pub(super) fn contact() -> ContactDetails {
        ContactDetails {
            first_name: "Dana".to_string(),
            last_name: "Whitfield".to_string(),
            email: "dana.whitfield@example.com".to_string(),
            phone: "515-555-0199".to_string(),
            zip: "50265-4410".to_string(),
        }
    }
}

mod scenarios {
    use super::common::*;
    use homecare::workflows::assessment::{
        score, AnswerSet, AssessmentError, CareRecommendation, QuestionKey, ServiceCategory,
        WizardEvent, WizardPhase,
    };

    #[test]
    fn parent_with_maximum_needs_gets_full_care() {
        let state = run_wizard([
            "parent",
            "bedbound",
            "unable-without-help",
            "unable-without-support",
            "yes",
            "often",
            "isolated",
        ]);

        let result = state.result().expect("result on review");
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
    }

    #[test]
    fn self_assessment_with_no_needs_is_independent() {
        let state = run_wizard([
            "self",
            "independent",
            "independent",
            "no-support",
            "no",
            "none",
            "regular",
        ]);

        let result = state.result().expect("result on review");
        assert_eq!(result.score, 0);
        assert_eq!(result.recommendation, CareRecommendation::Independent);
        assert_eq!(result.suggested_services, vec![ServiceCategory::Respite]);
    }

    #[test]
    fn six_answers_cannot_be_scored() {
        let answers = AnswerSet::from_pairs([
            ("relationship", "parent"),
            ("mobility", "bedbound"),
            ("hygiene", "unable-without-help"),
            ("medication", "unable-without-support"),
            ("safety-concerns", "yes"),
            ("memory-loss", "often"),
        ])
        .expect("valid answers");

        let err = score(&answers).expect_err("social engagement missing");
        assert_eq!(
            err,
            AssessmentError::IncompleteAssessment {
                missing: vec![QuestionKey::SocialEngagement],
            }
        );
    }

    #[test]
    fn full_flow_submits_lead_with_recommendation() {
        let (service, intake) = build_service();
        let options = [
            "spouse",
            "occasional-assistance",
            "occasional-reminders",
            "daily-reminders",
            "no",
            "sometimes",
            "occasional",
        ];

        let mut state = None;
        for (key, option) in QuestionKey::ordered().into_iter().zip(options) {
            let transition = service
                .advance(
                    state.take(),
                    WizardEvent::Answer {
                        key,
                        option: option.to_string(),
                    },
                )
                .expect("answer accepted");
            state = Some(transition.state);
        }

        let reviewing = state.expect("state present");
        assert_eq!(reviewing.phase(), WizardPhase::ReviewingResult);
        assert_eq!(reviewing.result().map(|result| result.score), Some(6));

        let collecting = service
            .advance(Some(reviewing), WizardEvent::Proceed)
            .expect("proceeds")
            .state;
        let submitted = service
            .advance(Some(collecting), WizardEvent::Submit { contact: contact() })
            .expect("submits");

        assert_eq!(submitted.state.phase(), WizardPhase::Submitted);
        assert!(submitted.receipt.is_some());

        let leads = intake.leads();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].contact.zip.as_str(), "50265");
        let summary = leads[0].assessment.as_ref().expect("summary attached");
        assert_eq!(summary.recommendation, CareRecommendation::LightCare);
        assert_eq!(
            summary.suggested_services,
            vec![ServiceCategory::InHome, ServiceCategory::Respite]
        );
    }
}
