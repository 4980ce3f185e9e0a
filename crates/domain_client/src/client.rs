//! Client entity
//!
//! A client is read-only input to underwriting. Age is not stored; it is
//! derived from the date of birth as of the evaluation date so that the
//! same record yields the right age no matter when it is evaluated.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::ClientId;

use crate::value_objects::{Age, CreditScore, FullName, MonthlyIncome, UsState};

/// A loan applicant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    full_name: FullName,
    date_of_birth: NaiveDate,
    credit_score: CreditScore,
    monthly_income: MonthlyIncome,
    state: UsState,
}

impl Client {
    /// Creates a client with a fresh identifier
    pub fn new(
        full_name: FullName,
        date_of_birth: NaiveDate,
        credit_score: CreditScore,
        monthly_income: MonthlyIncome,
        state: UsState,
    ) -> Self {
        Self::with_id(ClientId::new(), full_name, date_of_birth, credit_score, monthly_income, state)
    }

    /// Creates a client with an existing identifier (e.g. loaded from a store)
    pub fn with_id(
        id: ClientId,
        full_name: FullName,
        date_of_birth: NaiveDate,
        credit_score: CreditScore,
        monthly_income: MonthlyIncome,
        state: UsState,
    ) -> Self {
        Self {
            id,
            full_name,
            date_of_birth,
            credit_score,
            monthly_income,
            state,
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn credit_score(&self) -> CreditScore {
        self.credit_score
    }

    pub fn monthly_income(&self) -> MonthlyIncome {
        self.monthly_income
    }

    pub fn state(&self) -> UsState {
        self.state
    }

    /// Returns the client's age in whole years on the given date
    ///
    /// A birthday counts only once it has been reached. Dates of birth after
    /// `as_of` give age 0.
    pub fn age_on(&self, as_of: NaiveDate) -> Age {
        let mut years = i64::from(as_of.year()) - i64::from(self.date_of_birth.year());
        let birthday_reached = (as_of.month(), as_of.day())
            >= (self.date_of_birth.month(), self.date_of_birth.day());
        if !birthday_reached {
            years -= 1;
        }
        Age::saturating(years)
    }

    /// Returns true if the client is at least 18 on the given date
    pub fn is_adult_on(&self, as_of: NaiveDate) -> bool {
        self.age_on(as_of).is_at_least(18)
    }

    /// Returns true if the client is older than 60 on the given date
    pub fn is_senior_on(&self, as_of: NaiveDate) -> bool {
        self.age_on(as_of).is_greater_than(60)
    }

    /// Returns true if the credit score is strictly above `min_score`
    pub fn has_sufficient_credit_score(&self, min_score: u16) -> bool {
        self.credit_score.is_greater_than(min_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn client_born(date_of_birth: NaiveDate) -> Client {
        Client::new(
            FullName::new("John", "Doe").unwrap(),
            date_of_birth,
            CreditScore::new(700).unwrap(),
            MonthlyIncome::new(dec!(2000)).unwrap(),
            UsState::NV,
        )
    }

    #[test]
    fn test_age_counts_birthday_on_the_day() {
        let client = client_born(NaiveDate::from_ymd_opt(2000, 6, 15).unwrap());
        assert_eq!(client.age_on(NaiveDate::from_ymd_opt(2018, 6, 14).unwrap()).value(), 17);
        assert_eq!(client.age_on(NaiveDate::from_ymd_opt(2018, 6, 15).unwrap()).value(), 18);
    }

    #[test]
    fn test_future_birth_date_is_age_zero() {
        let client = client_born(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        assert_eq!(client.age_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).value(), 0);
    }

    #[test]
    fn test_leap_day_birthday() {
        let client = client_born(NaiveDate::from_ymd_opt(2004, 2, 29).unwrap());
        assert_eq!(client.age_on(NaiveDate::from_ymd_opt(2022, 2, 28).unwrap()).value(), 17);
        assert_eq!(client.age_on(NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()).value(), 18);
    }
}
