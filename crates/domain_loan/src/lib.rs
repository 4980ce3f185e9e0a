//! Loan Underwriting Domain
//!
//! This crate decides whether a client qualifies for a loan product and
//! under which conditions.
//!
//! # Architecture
//!
//! - **Rules**: stateless checks, each identified by a [`RuleCode`]
//! - **Registry**: rule code -> rule instance, assembled once at startup
//! - **Selection policy**: product code -> ordered rule codes
//! - **Aggregate**: [`LoanDecision`], the verdict being built for one request
//! - **Engine**: [`DecisionMaker`], applies the selected rules in order
//!
//! # Verdict Lifecycle
//!
//! ```text
//! Approved -> ApprovedWithChanges -> Denied
//!          \------------------------/
//! ```
//!
//! `Denied` is terminal: the engine stops at the first denying rule.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_loan::{DecisionMaker, EngineConfig, LoanConditions};
//!
//! let engine = DecisionMaker::from_config(&EngineConfig::default());
//! let decision = engine.decide(&client, &product, Some(conditions))?;
//!
//! if decision.decision().is_denied() {
//!     println!("denied by {:?}", decision.denied_by());
//! }
//! ```

pub mod aggregate;
pub mod conditions;
pub mod config;
pub mod context;
pub mod decision;
pub mod decision_maker;
pub mod error;
pub mod loan;
pub mod ports;
pub mod registry;
pub mod rules;
pub mod selection;
pub mod services;

pub use aggregate::LoanDecision;
pub use conditions::LoanConditions;
pub use config::{EngineConfig, Strictness};
pub use context::EvaluationContext;
pub use decision::{Decision, RuleCode};
pub use decision_maker::DecisionMaker;
pub use error::LoanError;
pub use loan::Loan;
pub use ports::{LoanRepository, InMemoryLoanRepository};
pub use registry::RuleRegistry;
pub use rules::Rule;
pub use selection::RuleSelectionPolicy;
pub use services::{LoanApplicationService, LoanApplicationOutcome};
