use std::fmt;

use serde::{Deserialize, Serialize};

/// A caller class that holds its own session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Student,
    Admin,
}

impl Audience {
    /// Order in which tokens are tried when authorizing a request.
    pub const PRECEDENCE: [Audience; 2] = [Audience::Admin, Audience::Student];

    /// Storage key the token for this audience lives under.
    pub fn storage_key(self) -> &'static str {
        match self {
            Audience::Student => "token",
            Audience::Admin => "adminToken",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Audience::Student => f.write_str("student"),
            Audience::Admin => f.write_str("admin"),
        }
    }
}
