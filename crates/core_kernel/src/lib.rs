//! Core Kernel - Foundational types for the loan underwriting system
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Strongly-typed identifiers for clients, products, and loans
//! - Ports for the two sources of nondeterminism (wall clock and randomness)
//! - The common error type returned by port adapters

pub mod identifiers;
pub mod ports;
pub mod error;

pub use identifiers::{ClientId, ProductId, LoanId};
pub use ports::{Clock, SystemClock, FixedClock, RandomSource, RngSource, SequenceSource, DomainPort};
pub use error::PortError;
