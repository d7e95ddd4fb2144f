//! Foundation module - Shared vocabulary of the CODA domain.
//!
//! Contains the error taxonomy and the correlation value object used
//! throughout the model.

mod correlation;
mod errors;

pub use correlation::Correlation;
pub use errors::CodaError;
