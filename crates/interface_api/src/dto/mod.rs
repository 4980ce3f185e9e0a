//! Request/Response data transfer objects

pub mod client;
pub mod loan;
pub mod product;
