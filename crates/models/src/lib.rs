//! sea-orm entities for the gradebook schema.
//!
//! `student` maps `alumnos`, `grade` maps `notas`; `record` is the joined
//! view the web layer renders.

pub mod errors;
pub mod db;
pub mod student;
pub mod grade;
pub mod record;

#[cfg(test)]
mod tests;
