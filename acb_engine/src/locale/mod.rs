//! Locale handling
//!
//! Placeholder text lookups and the stale-fetch guard used when the user
//! switches locale while a catalog fetch is still in flight.

use std::sync::Mutex;

/// Placeholder label for the operator sentinel, per locale. Unknown locales
/// fall back to English.
pub fn select_placeholder(locale: &str) -> &'static str {
    match locale {
        "de" => "Auswählen",
        _ => "Select",
    }
}

/// Ticket identifying one locale fetch. Only the most recently issued
/// ticket may complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTicket {
    sequence: u64,
    pub locale: String,
}

/// Serializes locale switches. Each `begin` supersedes all earlier tickets,
/// so a response from an abandoned fetch is discarded instead of clobbering
/// the catalogs of the newer locale.
#[derive(Debug, Default)]
pub struct LocaleSession {
    inner: Mutex<SessionState>,
}

#[derive(Debug, Default)]
struct SessionState {
    next_sequence: u64,
    current: Option<u64>,
}

impl LocaleSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for a locale, invalidating any ticket issued earlier.
    pub fn begin(&self, locale: &str) -> LocaleTicket {
        let mut state = self.inner.lock().expect("session lock");
        state.next_sequence += 1;
        state.current = Some(state.next_sequence);
        LocaleTicket {
            sequence: state.next_sequence,
            locale: locale.to_string(),
        }
    }

    /// Finish a fetch. Returns false when the ticket went stale, meaning the
    /// caller must drop the fetched catalogs.
    pub fn complete(&self, ticket: &LocaleTicket) -> bool {
        let mut state = self.inner.lock().expect("session lock");
        if state.current == Some(ticket.sequence) {
            state.current = None;
            true
        } else {
            false
        }
    }

    /// Whether a fetch is still outstanding.
    pub fn in_flight(&self) -> bool {
        self.inner.lock().expect("session lock").current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_per_locale() {
        assert_eq!(select_placeholder("de"), "Auswählen");
        assert_eq!(select_placeholder("en"), "Select");
        assert_eq!(select_placeholder("fr"), "Select");
    }

    #[test]
    fn test_latest_ticket_wins() {
        let session = LocaleSession::new();
        let first = session.begin("en");
        let second = session.begin("de");

        // The superseded fetch must be discarded.
        assert!(!session.complete(&first));
        assert!(session.complete(&second));
        assert!(!session.in_flight());
    }

    #[test]
    fn test_completed_ticket_cannot_complete_twice() {
        let session = LocaleSession::new();
        let ticket = session.begin("en");
        assert!(session.complete(&ticket));
        assert!(!session.complete(&ticket));
    }
}
