//! Session model and its durable serialization.

use serde::{Deserialize, Serialize};

/// Identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Name supplied at sign-in
    pub username: String,

    /// Reserved. No operation in this layer populates it; a value found in
    /// the durable record is carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserProfile {
    pub fn named(username: &str) -> Self {
        Self {
            username: username.to_string(),
            email: None,
        }
    }
}

/// In-memory authentication state of the client.
///
/// `user` is `Some` only while `is_logged_in` is true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub is_logged_in: bool,
    pub user: Option<UserProfile>,
}

impl Session {
    /// The state the client starts in.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// The state adopted after a successful sign-in.
    pub fn signed_in(username: &str) -> Self {
        Self {
            is_logged_in: true,
            user: Some(UserProfile::named(username)),
        }
    }
}

/// Durable serialization of a [`Session`].
///
/// Stored as JSON with camelCase keys under the fixed client namespace.
/// Decoding is lenient: missing fields fall back to their defaults and
/// unknown fields are ignored, so a record written by any prior client
/// version still restores.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub is_logged_in: bool,

    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl SessionRecord {
    /// Decodes a raw record. Malformed content is `None`, the same as an
    /// absent record.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Converts the record into the session it describes.
    ///
    /// A record claiming a user without being logged in drops the stale
    /// user, keeping the logged-out invariant.
    pub fn into_session(self) -> Session {
        let user = if self.is_logged_in { self.user } else { None };
        Session {
            is_logged_in: self.is_logged_in,
            user,
        }
    }
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        Self {
            is_logged_in: session.is_logged_in,
            user: session.user.clone(),
        }
    }
}
