//! Test Data Builders
//!
//! Builder patterns for clients and products with sensible defaults. Tests
//! set only the fields they care about.
//!
//! Builders panic on invalid values; they are for tests that want valid
//! entities. Tests about validation should call the constructors directly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClientId, ProductId};
use domain_client::{Client, CreditScore, FullName, MonthlyIncome, UsState};
use domain_product::{InterestRate, Product, ProductCode, Term};

use crate::fixtures::TemporalFixtures;

/// Builder for test clients
#[derive(Debug, Clone)]
pub struct TestClientBuilder {
    id: ClientId,
    first_name: String,
    last_name: String,
    date_of_birth: NaiveDate,
    credit_score: i64,
    monthly_income: Decimal,
    state: UsState,
}

impl Default for TestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClientBuilder {
    /// Creates a builder for a 34-year-old NV client who passes every rule
    pub fn new() -> Self {
        Self {
            id: ClientId::new(),
            first_name: "Test".to_string(),
            last_name: "Client".to_string(),
            date_of_birth: TemporalFixtures::born_years_ago(34),
            credit_score: 720,
            monthly_income: dec!(5000),
            state: UsState::NV,
        }
    }

    pub fn with_id(mut self, id: ClientId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    /// Sets the date of birth so the client is exactly `years` old on
    /// `TemporalFixtures::as_of()`
    pub fn with_age(mut self, years: i32) -> Self {
        self.date_of_birth = TemporalFixtures::born_years_ago(years);
        self
    }

    pub fn with_credit_score(mut self, score: i64) -> Self {
        self.credit_score = score;
        self
    }

    pub fn with_monthly_income(mut self, income: Decimal) -> Self {
        self.monthly_income = income;
        self
    }

    pub fn with_state(mut self, state: UsState) -> Self {
        self.state = state;
        self
    }

    /// Builds the client
    pub fn build(self) -> Client {
        Client::with_id(
            self.id,
            FullName::new(self.first_name, self.last_name).expect("valid name"),
            self.date_of_birth,
            CreditScore::new(self.credit_score).expect("valid credit score"),
            MonthlyIncome::new(self.monthly_income).expect("valid income"),
            self.state,
        )
    }
}

/// Builder for test products
#[derive(Debug, Clone)]
pub struct TestProductBuilder {
    id: ProductId,
    name: String,
    code: ProductCode,
    term_months: i64,
    interest_rate: Decimal,
    max_principal: Decimal,
}

impl Default for TestProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProductBuilder {
    /// Creates a builder for a 12-month personal loan at 5%, up to 10,000
    pub fn new() -> Self {
        Self {
            id: ProductId::new(),
            name: "Personal Loan".to_string(),
            code: ProductCode::PersonalLoan,
            term_months: 12,
            interest_rate: dec!(5),
            max_principal: dec!(10000),
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_code(mut self, code: ProductCode) -> Self {
        self.code = code;
        self
    }

    pub fn with_term_months(mut self, months: i64) -> Self {
        self.term_months = months;
        self
    }

    pub fn with_interest_rate(mut self, rate: Decimal) -> Self {
        self.interest_rate = rate;
        self
    }

    pub fn with_max_principal(mut self, max_principal: Decimal) -> Self {
        self.max_principal = max_principal;
        self
    }

    /// Builds the product
    pub fn build(self) -> Product {
        Product::with_id(
            self.id,
            self.name,
            self.code,
            Term::from_months(self.term_months).expect("valid term"),
            InterestRate::new(self.interest_rate).expect("valid rate"),
            self.max_principal,
        )
        .expect("valid product")
    }
}
