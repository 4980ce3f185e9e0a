//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating clients and products that
//! satisfy every value-object invariant. Ages are relative to
//! `TemporalFixtures::as_of()`.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_client::{Client, CreditScore, FullName, MonthlyIncome, UsState};
use domain_product::{InterestRate, Product, ProductCode, Term};

use crate::fixtures::TemporalFixtures;

/// Strategy for generating supported states
pub fn state_strategy() -> impl Strategy<Value = UsState> {
    prop::sample::select(UsState::ALL.to_vec())
}

/// Strategy for generating valid credit scores (300 to 850)
pub fn credit_score_strategy() -> impl Strategy<Value = i64> {
    300i64..=850i64
}

/// Strategy for generating monthly incomes in cents (0 to 20,000.00)
pub fn monthly_income_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=2_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating dates of birth (ages 0 to 100 on the evaluation date)
pub fn date_of_birth_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..=36_500i64).prop_map(|days| TemporalFixtures::as_of() - Duration::days(days))
}

/// Strategy for generating valid interest rates in basis points (0% to 100%)
pub fn interest_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|bps| Decimal::new(bps, 2))
}

/// Strategy for generating valid terms (1 to 360 months)
pub fn term_months_strategy() -> impl Strategy<Value = i64> {
    1i64..=360i64
}

/// Strategy for generating positive principal amounts (0.01 to 1,000,000.00)
pub fn principal_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating valid clients
pub fn client_strategy() -> impl Strategy<Value = Client> {
    (
        date_of_birth_strategy(),
        credit_score_strategy(),
        monthly_income_strategy(),
        state_strategy(),
    )
        .prop_map(|(date_of_birth, score, income, state)| {
            Client::new(
                FullName::new("Prop", "Client").expect("valid name"),
                date_of_birth,
                CreditScore::new(score).expect("valid credit score"),
                MonthlyIncome::new(income).expect("valid income"),
                state,
            )
        })
}

/// Strategy for generating valid personal loan products
pub fn personal_loan_strategy() -> impl Strategy<Value = Product> {
    (term_months_strategy(), interest_rate_strategy(), principal_strategy()).prop_map(
        |(months, rate, max_principal)| {
            Product::new(
                "Generated Personal Loan",
                ProductCode::PersonalLoan,
                Term::from_months(months).expect("valid term"),
                InterestRate::new(rate).expect("valid rate"),
                max_principal,
            )
            .expect("valid product")
        },
    )
}
