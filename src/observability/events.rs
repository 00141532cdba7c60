//! Observable events in the session and navigation layer.
//!
//! Events are explicit and typed. Every state change the layer makes is
//! announced by exactly one of these.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Session lifecycle
    /// Session restored from the durable record at startup
    SessionRestored,
    /// Durable record present but unparsable; treated as absent
    SessionRecordMalformed,
    /// Durable record could not be read; treated as absent
    SessionRecordUnreadable,
    /// Durable record write or delete failed; in-memory state kept
    SessionPersistFailed,

    // Sign-in / sign-out
    /// Credentials accepted, session is now authenticated
    SignInAccepted,
    /// Credentials rejected (empty username or password)
    SignInRejected,
    /// Session cleared and durable record removed
    SignedOut,

    // Navigation
    /// Transition allowed by the guard
    NavigationAllowed,
    /// Transition cancelled and sent to the public fallback route
    NavigationRedirected,
    /// No route descriptor matched the requested path
    RouteUnmatched,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            // Session lifecycle
            Event::SessionRestored => "SESSION_RESTORED",
            Event::SessionRecordMalformed => "SESSION_RECORD_MALFORMED",
            Event::SessionRecordUnreadable => "SESSION_RECORD_UNREADABLE",
            Event::SessionPersistFailed => "SESSION_PERSIST_FAILED",

            // Sign-in / sign-out
            Event::SignInAccepted => "SIGN_IN_ACCEPTED",
            Event::SignInRejected => "SIGN_IN_REJECTED",
            Event::SignedOut => "SIGNED_OUT",

            // Navigation
            Event::NavigationAllowed => "NAVIGATION_ALLOWED",
            Event::NavigationRedirected => "NAVIGATION_REDIRECTED",
            Event::RouteUnmatched => "ROUTE_UNMATCHED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
