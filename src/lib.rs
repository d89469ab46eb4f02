//! Group trigger icons add-on.
//!
//! Renders one clickable icon per group member next to the chat header
//! of a multi-character chat host and, on click, dispatches a `/trigger`
//! command asking that member (or all members) to produce the next
//! reply. While the icon row is enabled the host's group auto-reply
//! rotation is forced off (manual triggering and automatic rotation are
//! mutually exclusive) and the prior value is restored on disable.
//!
//! The host environment is abstracted behind [`Host`]; a host adapter
//! implements it over the real document and event bus, calls [`attach`]
//! once per page session, and routes toggle/icon clicks back into the
//! returned [`TriggerIcons`] instance.

pub mod auto_reply;
pub mod commands;
pub mod host;
pub mod icon_row;
pub mod logger;
pub mod roster;
pub mod settings;

#[cfg(test)]
mod test_host;

use std::cell::RefCell;
use std::rc::Rc;

pub use host::{
    first_present, Character, ChatContext, ElementRef, EventHandler, Group, Host, LifecycleEvent,
    Selector,
};
pub use icon_row::{TriggerIcon, TriggerIcons, TriggerRowView, TriggerTarget};
pub use settings::Settings;

/// Wire the add-on into a host: load settings, subscribe the re-render
/// callback to every lifecycle event this host build emits (absent
/// event names are silently skipped), and render once.
pub fn attach(host: Rc<dyn Host>) -> Rc<RefCell<TriggerIcons>> {
    let addon = Rc::new(RefCell::new(TriggerIcons::new(Rc::clone(&host))));

    for event in LifecycleEvent::ALL {
        if !host.has_event(event) {
            continue;
        }
        let weak = Rc::downgrade(&addon);
        host.on_event(
            event,
            Box::new(move || {
                if let Some(addon) = weak.upgrade() {
                    // A notification landing mid-render is dropped; the
                    // running pass finishes with the same context data.
                    if let Ok(mut addon) = addon.try_borrow_mut() {
                        addon.render();
                    }
                }
            }),
        );
    }

    addon.borrow_mut().render();
    addon
}
