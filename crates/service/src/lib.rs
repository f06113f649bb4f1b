//! Service layer for unidir
//!
//! The only write path: every create and update is prepared by
//! `unidir-core` before it reaches storage.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod university_service;

pub use error::ServiceError;
pub use university_service::UniversityService;
