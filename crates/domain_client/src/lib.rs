//! Client Domain
//!
//! This crate models the loan applicant as consumed by the underwriting
//! engine. Every numeric attribute is a value object that validates its
//! bounds at construction, so a `Client` that exists is always valid and
//! downstream rules never re-check input shape.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_client::{Client, CreditScore, FullName, MonthlyIncome, UsState};
//! use rust_decimal_macros::dec;
//!
//! let client = Client::new(
//!     FullName::new("Jane", "Doe").unwrap(),
//!     NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
//!     CreditScore::new(720).unwrap(),
//!     MonthlyIncome::new(dec!(4200)).unwrap(),
//!     UsState::CA,
//! );
//!
//! let as_of = NaiveDate::from_ymd_opt(2024, 4, 11).unwrap();
//! assert_eq!(client.age_on(as_of).value(), 33);
//! ```

pub mod client;
pub mod value_objects;
pub mod ports;
pub mod error;

pub use client::Client;
pub use value_objects::{Age, CreditScore, FullName, MonthlyIncome, UsState};
pub use ports::{ClientRepository, InMemoryClientRepository};
pub use error::ClientError;
