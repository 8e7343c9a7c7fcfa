//! # Search Query Module
//!
//! Turns raw query-string parameters into structured listing predicates.
//!
//! The pipeline is pure and infallible: parameters parse into a
//! [`SearchCriteria`] (malformed values degrade to "not specified"),
//! [`compile`] turns the criteria into a [`Predicate`], and the listing
//! store evaluates the predicate against each document.

pub mod compiler;
pub mod criteria;
pub mod predicate;

pub use compiler::compile;
pub use criteria::SearchCriteria;
pub use predicate::{Clause, Predicate};
