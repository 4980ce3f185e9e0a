//! Property-based tests for the decision engine

mod common;

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal_macros::dec;

use domain_client::UsState;
use domain_loan::{Decision, DecisionMaker, EngineConfig, LoanConditions, RuleCode};
use test_utils::{assert_rate_in_bounds, client_strategy, personal_loan_strategy, TemporalFixtures};

use common::constant_draws;

fn engine(draw: f64) -> DecisionMaker {
    DecisionMaker::from_config(&EngineConfig::default())
        .with_clock(Arc::new(TemporalFixtures::clock()))
        .with_random_source_factory(constant_draws(draw))
}

proptest! {
    #[test]
    fn prop_denied_by_is_last_applied_rule(
        client in client_strategy(),
        product in personal_loan_strategy(),
        draw in 0.0f64..1.0,
    ) {
        let conditions = LoanConditions::from_product(&product);
        let decision = engine(draw).decide(&client, &product, Some(conditions)).unwrap();

        if decision.decision() == Decision::Denied {
            prop_assert_eq!(decision.denied_by(), decision.applied_rules().last().copied());
        } else {
            prop_assert_eq!(decision.denied_by(), None);
            prop_assert_eq!(decision.applied_rules().len(), 6);
        }
    }

    #[test]
    fn prop_rate_stays_in_bounds(
        client in client_strategy(),
        product in personal_loan_strategy(),
    ) {
        let conditions = LoanConditions::from_product(&product);
        let decision = engine(0.9).decide(&client, &product, Some(conditions)).unwrap();
        assert_rate_in_bounds(decision.conditions().unwrap().interest_rate());
    }

    #[test]
    fn prop_only_california_changes_terms(
        client in client_strategy(),
        product in personal_loan_strategy(),
    ) {
        let conditions = LoanConditions::from_product(&product);
        let decision = engine(0.9).decide(&client, &product, Some(conditions)).unwrap();

        if decision.decision() == Decision::ApprovedWithChanges {
            prop_assert_eq!(client.state(), UsState::CA);
            prop_assert!(decision.applied_rules().contains(&RuleCode::StateCaInterestIncrease));
        }
        if client.state() != UsState::CA {
            prop_assert_eq!(decision.conditions().unwrap(), &conditions);
        }
    }

    #[test]
    fn prop_same_inputs_same_verdict(
        client in client_strategy(),
        product in personal_loan_strategy(),
        draw in 0.0f64..1.0,
    ) {
        let first = engine(draw).decide(&client, &product, None).unwrap();
        let second = engine(draw).decide(&client, &product, None).unwrap();
        prop_assert_eq!(first.decision(), second.decision());
        prop_assert_eq!(first.applied_rules(), second.applied_rules());
    }

    #[test]
    fn prop_low_credit_always_denied(
        client in client_strategy(),
        product in personal_loan_strategy(),
    ) {
        prop_assume!(client.credit_score().value() <= 500);
        let decision = engine(0.9).decide(&client, &product, None).unwrap();
        prop_assert_eq!(decision.denied_by(), Some(RuleCode::CreditRating));
        prop_assert_eq!(decision.applied_rules().len(), 1);
    }
}

#[test]
fn test_ca_rate_increase_is_exact() {
    let product = test_utils::ProductFixtures::personal_loan();
    let conditions = LoanConditions::from_product(&product);
    let decision = engine(0.9)
        .decide(&test_utils::ClientFixtures::californian(), &product, Some(conditions))
        .unwrap();
    test_utils::assert_rate_eq(decision.conditions().unwrap().interest_rate(), dec!(16.49));
}
