//! Core types shared across docvars: the error taxonomy and its user-facing
//! formatting.

pub mod error;
mod error_formatting;

pub use error::{DocvarsError, ErrorContext, create_error_context, user_friendly_error};
