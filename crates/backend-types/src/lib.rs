//! Backend Types - Shared request and response shapes for the items API
//!
//! Pure serde data types with no async runtime dependencies, so clients can
//! depend on them without pulling in the server stack.

pub mod item;
pub mod status;

pub use item::*;
pub use status::*;

use serde::{Deserialize, Serialize};

/// Body of every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
