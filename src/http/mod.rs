//! HTTP protocol layer module
//!
//! Response builders for the decision API, decoupled from the serving loop.

pub mod response;

// Re-export commonly used builders
pub use response::{build_400_response, build_404_response, build_decision_response};
