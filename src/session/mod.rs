//! Session state for the client
//!
//! Single source of truth for "is the current user signed in", mirrored to
//! durable storage so the answer survives a client restart.
//!
//! # Invariants Enforced
//!
//! - a logged-out session never carries a user
//! - every mutation swaps the session as a whole value, never field-by-field
//! - a missing, unreadable, or malformed durable record reads as "not
//!   logged in", never as a failure

mod record;
mod store;

pub use record::{Session, SessionRecord, UserProfile};
pub use store::{SessionConfig, SessionStore, SESSION_STORAGE_KEY};
