//! Student records: one student plus the grade row it owns.
//!
//! Split the same way as the rest of the service crate: domain types,
//! a repository abstraction, and the service holding the business rules.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::RecordService;
