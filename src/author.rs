use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity attached to commits and annotated tags.
///
/// `when` is informational only on the way in: every operation that hands an
/// author to the backend restamps it with the logical clock first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    #[serde(default = "epoch")]
    pub when: DateTime<Utc>,
}

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            when: epoch(),
        }
    }

    /// Same identity, stamped at `when`
    pub fn stamped(&self, when: DateTime<Utc>) -> Self {
        Self {
            name: self.name.clone(),
            email: self.email.clone(),
            when,
        }
    }
}

impl Default for Author {
    fn default() -> Self {
        Self::new("", "")
    }
}
