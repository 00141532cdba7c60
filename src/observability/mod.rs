//! Observability for the session and navigation layer
//!
//! Structured JSON event logging:
//!
//! - One log line = one event
//! - Synchronous, no buffering
//! - Deterministic key ordering
//! - Read-only: logging never influences a session or navigation decision

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
