//! Session state and transitions.

use alloy::primitives::Address;
use tokio::sync::watch;
use tokio::sync::{Mutex, MutexGuard};

/// Form fields mutable from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Destination address of the transfer.
    Recipient,
    /// Human-entered decimal amount.
    Amount,
}

/// The transfer form as entered so far.
///
/// Values stay raw strings until `send` parses them; the form is never
/// reset after a send, so resubmission keeps the previous entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub recipient: String,
    pub amount: String,
}

/// Observable snapshot of the page session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The active account, set on connect or detection. Cleared only by
    /// dropping the session.
    pub account: Option<Address>,
    /// Current form entries.
    pub form: FormState,
    /// True from registry publication until persistence completes.
    pub loading: bool,
}

/// Shared session for one page-lifetime of the coordinator.
///
/// State is published through a watch channel; observers subscribe and see
/// every transition. Account and loading flag are written only by the
/// coordinator; the form is written by whoever owns the input surface.
pub struct Session {
    state: watch::Sender<SessionState>,
    send_slot: Mutex<()>,
}

impl Session {
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            state,
            send_slot: Mutex::new(()),
        }
    }

    /// Subscribe to session state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Current state, cloned out of the channel.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Update a single form field from an input event.
    pub fn update_form(&self, field: FormField, value: &str) {
        self.state.send_modify(|s| match field {
            FormField::Recipient => s.form.recipient = value.to_string(),
            FormField::Amount => s.form.amount = value.to_string(),
        });
    }

    pub(crate) fn set_account(&self, account: Address) {
        tracing::debug!(account = %account, "Active account set");
        self.state.send_modify(|s| s.account = Some(account));
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.state.send_modify(|s| s.loading = loading);
    }

    /// Claim the single send slot.
    ///
    /// Returns `None` when another send holds it; the guard is released
    /// when the send returns, successful or not.
    pub(crate) fn try_begin_send(&self) -> Option<MutexGuard<'_, ()>> {
        self.send_slot.try_lock().ok()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &*self.state.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_updates_field_by_field() {
        let session = Session::new();
        session.update_form(FormField::Recipient, "0xB");
        session.update_form(FormField::Amount, "0.1");

        let state = session.snapshot();
        assert_eq!(state.form.recipient, "0xB");
        assert_eq!(state.form.amount, "0.1");
        assert!(state.account.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_subscribers_observe_transitions() {
        let session = Session::new();
        let rx = session.subscribe();

        session.set_account(Address::ZERO);
        session.set_loading(true);

        let state = rx.borrow().clone();
        assert_eq!(state.account, Some(Address::ZERO));
        assert!(state.loading);
    }

    #[tokio::test]
    async fn test_send_slot_is_exclusive() {
        let session = Session::new();
        let guard = session.try_begin_send().unwrap();
        assert!(session.try_begin_send().is_none());
        drop(guard);
        assert!(session.try_begin_send().is_some());
    }
}
