//! Core types and request validation for the recruiting example API.
//!
//! This crate is deliberately free of HTTP dependencies. Every operation is a
//! pure function of its input: the transport layer hands over a presented API
//! key and a raw body, and gets back either a payload or an [`Error`] that
//! knows its status code and public error list.

pub mod applicant;
pub mod appointment;
pub mod body;
pub mod checks;
pub mod envelope;
pub mod error;
pub mod format;
pub mod key;
pub mod usage;

pub use envelope::Envelope;
pub use error::{Error, ErrorKind, Result, ValidationError};
