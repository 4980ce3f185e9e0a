//! Pre-built Test Fixtures
//!
//! Ready-to-use clients, products, and dates. Every date-sensitive fixture is
//! relative to `TemporalFixtures::as_of()`, so ages are predictable as long
//! as tests evaluate on that date.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::FixedClock;
use domain_client::{Client, CreditScore, FullName, MonthlyIncome, UsState};
use domain_product::{InterestRate, Product, ProductCode, Term};

/// Fixture for dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard evaluation date (June 1, 2024)
    pub fn as_of() -> NaiveDate {
        date(2024, 6, 1)
    }

    /// Standard evaluation instant (midnight UTC on `as_of`)
    pub fn now() -> DateTime<Utc> {
        Self::as_of().and_time(chrono::NaiveTime::MIN).and_utc()
    }

    /// A clock frozen at the standard evaluation date
    pub fn clock() -> FixedClock {
        FixedClock::on(Self::as_of())
    }

    /// Date of birth giving exactly `years` on the evaluation date
    pub fn born_years_ago(years: i32) -> NaiveDate {
        date(2024 - years, 6, 1)
    }

    /// Date of birth giving `years` on the evaluation date, with the next
    /// birthday falling the day after
    pub fn born_day_before_birthday(years: i32) -> NaiveDate {
        date(2024 - years - 1, 6, 2)
    }
}

/// Fixture for clients
pub struct ClientFixtures;

impl ClientFixtures {
    /// 34-year-old Nevada client who passes every standard rule
    pub fn eligible() -> Client {
        Self::in_state(UsState::NV)
    }

    /// 34-year-old California client with good credit and income
    pub fn californian() -> Client {
        Self::in_state(UsState::CA)
    }

    /// 34-year-old New York client with good credit and income
    pub fn new_yorker() -> Client {
        Self::in_state(UsState::NY)
    }

    /// 34-year-old Texas client with good credit and income
    pub fn texan() -> Client {
        Self::in_state(UsState::TX)
    }

    /// Client with a credit score at the denial boundary
    pub fn poor_credit() -> Client {
        Client::new(
            Self::name(),
            TemporalFixtures::born_years_ago(34),
            CreditScore::new(500).expect("valid score"),
            Self::income(dec!(5000)),
            UsState::NV,
        )
    }

    /// Client whose income is one cent short of the minimum
    pub fn low_income() -> Client {
        Client::new(
            Self::name(),
            TemporalFixtures::born_years_ago(34),
            CreditScore::new(720).expect("valid score"),
            Self::income(dec!(999.99)),
            UsState::NV,
        )
    }

    /// Client who is 17 on the evaluation date
    pub fn minor() -> Client {
        Client::new(
            Self::name(),
            TemporalFixtures::born_day_before_birthday(17),
            CreditScore::new(720).expect("valid score"),
            Self::income(dec!(5000)),
            UsState::NV,
        )
    }

    fn in_state(state: UsState) -> Client {
        Client::new(
            Self::name(),
            TemporalFixtures::born_years_ago(34),
            CreditScore::new(720).expect("valid score"),
            Self::income(dec!(5000)),
            state,
        )
    }

    fn name() -> FullName {
        FullName::new("Aigerim", "Nurlanova").expect("valid name")
    }

    fn income(amount: Decimal) -> MonthlyIncome {
        MonthlyIncome::new(amount).expect("valid income")
    }
}

/// Fixture for products
pub struct ProductFixtures;

impl ProductFixtures {
    /// Personal loan: 12 months at 5%, up to 10,000
    pub fn personal_loan() -> Product {
        Product::new(
            "Personal Loan",
            ProductCode::PersonalLoan,
            Term::from_months(12).expect("valid term"),
            InterestRate::new(dec!(5)).expect("valid rate"),
            dec!(10000),
        )
        .expect("valid product")
    }

    /// Auto loan: 60 months at 7.5%, up to 40,000. No standard rule set.
    pub fn auto_loan() -> Product {
        Product::new(
            "Auto Loan",
            ProductCode::AutoLoan,
            Term::from_months(60).expect("valid term"),
            InterestRate::new(dec!(7.5)).expect("valid rate"),
            dec!(40000),
        )
        .expect("valid product")
    }

    /// Personal loan with a rate close to the ceiling
    pub fn high_rate_personal_loan() -> Product {
        Product::new(
            "Subprime Personal Loan",
            ProductCode::PersonalLoan,
            Term::from_months(6).expect("valid term"),
            InterestRate::new(dec!(95)).expect("valid rate"),
            dec!(2000),
        )
        .expect("valid product")
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
