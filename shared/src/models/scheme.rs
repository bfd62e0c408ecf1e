//! Government welfare scheme models

use serde::{Deserialize, Serialize};

/// A farmer welfare scheme record.
///
/// Records are unstructured text as published by the respective portals;
/// state and crop applicability is only ever derived from keyword matching
/// on the title and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub title: String,
    pub description: String,
    pub eligibility: String,
    pub benefits: String,
    pub link: String,
}
