//! Outbound trigger commands.
//!
//! A click on an icon becomes a `/trigger` slash command addressed to one
//! member, or to nobody for the "all" icon. The host's command executor
//! is preferred; hosts without one get the command typed into the
//! composer and sent.

use crate::host::{
    first_present, Host, COMPOSER_INPUT_CANDIDATES, SEND_BUTTON_CANDIDATES,
};
use crate::logger::log_info;

/// Build the slash command for a trigger request.
pub fn trigger_command(character_name: Option<&str>) -> String {
    match character_name {
        Some(name) => format!("/trigger {}", name),
        None => "/trigger".to_string(),
    }
}

/// Dispatch a trigger for one character, or for all when no name is
/// given. Fire-and-forget: each call is independent, nothing is queued
/// or retried. An executor rejection propagates to the caller; a missing
/// composer silently does nothing.
pub async fn trigger(host: &dyn Host, character_name: Option<&str>) -> Result<(), String> {
    let command = trigger_command(character_name);
    log_info("trigger", format!("dispatching {}", command));

    if host.supports_commands() {
        return host.execute_command(&command).await;
    }

    // Composer fallback for host builds without a command executor.
    let Some(input) = first_present(host, COMPOSER_INPUT_CANDIDATES) else {
        return Ok(());
    };
    let Some(send) = first_present(host, SEND_BUTTON_CANDIDATES) else {
        return Ok(());
    };

    host.set_value(&input, &command);
    host.notify_input(&input);
    host.click(&send);
    Ok(())
}
