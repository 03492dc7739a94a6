//! Service layer for the gradebook.
//! - Validates student/grade input before any storage call.
//! - Runs every multi-statement change inside one database transaction.
//! - Exposes a repository abstraction so the rules can be tested without a database.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod db;
pub mod records;

pub use records::RecordService;
