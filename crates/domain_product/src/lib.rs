//! Product Domain
//!
//! Loan products as offered to clients. A product carries the code that
//! decides which underwriting rules apply, plus the default terms a loan
//! starts from: term length, base interest rate, and the principal ceiling.
//!
//! # Example
//!
//! ```rust
//! use domain_product::{InterestRate, Product, ProductCode, Term};
//! use rust_decimal_macros::dec;
//!
//! let product = Product::new(
//!     "Personal Loan 12m",
//!     ProductCode::PersonalLoan,
//!     Term::from_months(12).unwrap(),
//!     InterestRate::new(dec!(5)).unwrap(),
//!     dec!(10000),
//! ).unwrap();
//!
//! assert_eq!(product.code(), ProductCode::PersonalLoan);
//! ```

pub mod product;
pub mod value_objects;
pub mod ports;
pub mod error;

pub use product::{Product, ProductCode};
pub use value_objects::{InterestRate, Term};
pub use ports::{InMemoryProductRepository, ProductRepository};
pub use error::ProductError;
