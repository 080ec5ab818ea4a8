use serde::{Deserialize, Serialize};

use cclkit_core::{DomainError, DomainResult, ValueObject, require_argument};

const ANCHOR_TEXT_REQUIRED: &str = "Anchor text cannot be null.";
const DESTINATION_REQUIRED: &str = "Destination cannot be null.";

/// A navigation link: anchor text plus destination.
///
/// Both values are stored exactly as given (no trimming, no normalization).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NavigationFields")]
pub struct Navigation {
    anchor_text: String,
    destination: String,
}

impl Navigation {
    /// Build a link, rejecting a missing anchor text or destination.
    pub fn new(anchor_text: Option<String>, destination: Option<String>) -> DomainResult<Self> {
        let anchor_text = require_argument(anchor_text, ANCHOR_TEXT_REQUIRED)?;
        let destination = require_argument(destination, DESTINATION_REQUIRED)?;
        Ok(Self {
            anchor_text,
            destination,
        })
    }

    pub fn anchor_text(&self) -> &str {
        &self.anchor_text
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl ValueObject for Navigation {}

impl core::fmt::Display for Navigation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} -> {}", self.anchor_text, self.destination)
    }
}

/// Wire shape for deserialization; `null` and missing fields both land as `None`.
#[derive(Deserialize)]
struct NavigationFields {
    anchor_text: Option<String>,
    destination: Option<String>,
}

impl TryFrom<NavigationFields> for Navigation {
    type Error = DomainError;

    fn try_from(fields: NavigationFields) -> Result<Self, Self::Error> {
        Navigation::new(fields.anchor_text, fields.destination)
    }
}
