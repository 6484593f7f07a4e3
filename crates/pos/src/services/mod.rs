//! Orchestration on top of the repositories: checkout and reporting.

pub mod checkout;
pub mod reports;
