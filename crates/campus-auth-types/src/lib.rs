//! Access-token issuing/validation and the request identity extractor.

pub mod identity;
pub mod token;
