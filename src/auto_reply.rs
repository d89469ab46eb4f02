//! Synchronization between the icon row and the host's group auto-reply
//! mode.
//!
//! Manual triggering and automatic reply rotation are mutually exclusive
//! group-reply modes: while the icon row is enabled the host checkbox is
//! held off, and the value it had before this add-on ever touched it is
//! restored on disable.

use crate::host::{first_present, Host, AUTO_REPLY_CANDIDATES};
use crate::logger::log_info;
use crate::roster::current_group;

#[derive(Debug, Default)]
pub struct AutoReplyBridge {
    /// Host checkbox state observed the first time icons were enabled.
    /// Captured at most once per page session so any number of
    /// enable/disable cycles restores the user's original preference,
    /// not an intermediate value this add-on wrote itself.
    cached_state: Option<bool>,
}

impl AutoReplyBridge {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn cached_state(&self) -> Option<bool> {
        self.cached_state
    }

    /// Re-assert the auto-reply invariant for the given enabled flag.
    ///
    /// Never fails: a host build without the checkbox skips the control
    /// write, and the capture logic only runs when there is a value to
    /// read.
    pub fn reconcile(&mut self, host: &dyn Host, enabled: bool) {
        if enabled {
            if self.cached_state.is_none() {
                if let Some(control) = first_present(host, AUTO_REPLY_CANDIDATES) {
                    if let Some(value) = host.is_checked(&control) {
                        self.cached_state = Some(value);
                        log_info(
                            "auto_reply",
                            format!("captured host auto-reply state: {}", value),
                        );
                    }
                }
            }
            set_auto_reply(host, false);
        } else {
            // Nothing was ever captured: default to auto-reply on.
            set_auto_reply(host, self.cached_state.unwrap_or(true));
        }
    }
}

/// Write the host auto-reply checkbox. Skipped outside a group chat
/// (there is nothing to rotate between) and when the control already
/// holds the target value. An unchanged write would still fire the
/// host's change listeners, which can synchronously re-enter this
/// add-on's handlers.
fn set_auto_reply(host: &dyn Host, enabled: bool) {
    if current_group(&host.context()).is_none() {
        return;
    }
    let Some(control) = first_present(host, AUTO_REPLY_CANDIDATES) else {
        return;
    };
    if host.is_checked(&control) == Some(enabled) {
        return;
    }
    host.set_checked(&control, enabled);
}
