//! The trigger icon row: view model and render coordination.
//!
//! `render` may be invoked from any host event at any frequency. The row
//! it pushes is a pure function of the current settings and chat context
//! and is applied wholesale, so repeated renders with unchanged data
//! produce identical rows. Every applied row is followed by an
//! auto-reply reconcile pass, so an event that switches the active group
//! also re-validates the auto-reply state for the new group.

use std::future::Future;
use std::rc::Rc;

use crate::auto_reply::AutoReplyBridge;
use crate::commands;
use crate::host::{first_present, ChatContext, Character, Group, Host, ROW_ANCHOR_CANDIDATES};
use crate::logger::log_info;
use crate::roster::{self, current_group};
use crate::settings::Settings;

pub const TOGGLE_LABEL_ON: &str = "Trigger Icons: ON";
pub const TOGGLE_LABEL_OFF: &str = "Trigger Icons: OFF";

/// Hover title for the enable/disable toggle.
pub const TOGGLE_TITLE: &str = "Enable/disable group trigger icons";

/// Who a trigger icon addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerTarget {
    AllMembers,
    Member(String),
}

/// One clickable icon in the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerIcon {
    /// Accessible label, also the hover title.
    pub title: String,
    /// Two-character badge shown when there is no avatar image.
    pub label: String,
    pub avatar_url: Option<String>,
    pub target: TriggerTarget,
}

/// Everything the host adapter needs to draw the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerRowView {
    /// The row (toggle included) only shows inside a group chat.
    pub row_visible: bool,
    /// The icon strip collapses while the add-on is toggled off.
    pub icons_visible: bool,
    pub toggle_label: &'static str,
    pub toggle_off_style: bool,
    pub icons: Vec<TriggerIcon>,
}

fn toggle_label(enabled: bool) -> &'static str {
    if enabled {
        TOGGLE_LABEL_ON
    } else {
        TOGGLE_LABEL_OFF
    }
}

/// Build the icon list for a group: a leading "all" icon, then one icon
/// per member in member-list order. Members with no roster match render
/// under their raw reference.
pub fn build_icons(group: &Group, characters: &[Character]) -> Vec<TriggerIcon> {
    let mut icons = Vec::with_capacity(group.members.len() + 1);

    icons.push(TriggerIcon {
        title: "Trigger all characters".to_string(),
        label: "All".to_string(),
        avatar_url: None,
        target: TriggerTarget::AllMembers,
    });

    for member in &group.members {
        let character = roster::resolve_member(member, characters);
        let name = character
            .map(|c| c.name.clone())
            .unwrap_or_else(|| member.clone());

        icons.push(TriggerIcon {
            title: format!("Trigger {}", name),
            label: roster::short_label(&name),
            avatar_url: character.and_then(roster::avatar_url),
            target: TriggerTarget::Member(name),
        });
    }

    icons
}

/// The add-on instance: settings, the auto-reply bridge, and the
/// mounted-row flag. One per page session.
pub struct TriggerIcons {
    host: Rc<dyn Host>,
    settings: Settings,
    bridge: AutoReplyBridge,
    row_mounted: bool,
}

impl TriggerIcons {
    pub fn new(host: Rc<dyn Host>) -> Self {
        let settings = Settings::load(host.as_ref());
        TriggerIcons {
            host,
            settings,
            bridge: AutoReplyBridge::new(),
            row_mounted: false,
        }
    }

    pub fn enabled(&self) -> bool {
        self.settings.enabled
    }

    /// Recompute the row from the current chat context, push it to the
    /// host, then re-assert the auto-reply invariant. A host page whose
    /// chrome has not loaded yet makes this a silent no-op; a later
    /// event retries.
    pub fn render(&mut self) {
        if !self.refresh_row() {
            return;
        }
        self.bridge
            .reconcile(self.host.as_ref(), self.settings.enabled);
    }

    /// Toggle click: flip the flag, refresh the row, reconcile, persist.
    /// The reconcile and the save run even when the row could not be
    /// mounted; the flag change is real either way.
    pub fn toggle_enabled(&mut self) {
        self.settings.enabled = !self.settings.enabled;
        log_info(
            "icon_row",
            if self.settings.enabled {
                "trigger icons enabled"
            } else {
                "trigger icons disabled"
            },
        );
        self.refresh_row();
        self.bridge
            .reconcile(self.host.as_ref(), self.settings.enabled);
        self.settings.save(self.host.as_ref());
    }

    /// Icon click: dispatch a trigger for the icon's target. The future
    /// is detached from `self`, so callers drop their borrow before
    /// awaiting and overlapping dispatches stay legal.
    pub fn trigger(&self, target: &TriggerTarget) -> impl Future<Output = Result<(), String>> {
        let host = Rc::clone(&self.host);
        let name = match target {
            TriggerTarget::AllMembers => None,
            TriggerTarget::Member(name) => Some(name.clone()),
        };
        async move { commands::trigger(host.as_ref(), name.as_deref()).await }
    }

    fn refresh_row(&mut self) -> bool {
        if !self.ensure_row() {
            return false;
        }
        let context = self.host.context();
        let view = self.build_view(&context);
        self.host.apply_row(&view);
        true
    }

    /// Mount the row under the first available anchor.
    fn ensure_row(&mut self) -> bool {
        if self.row_mounted {
            return true;
        }
        let Some(anchor) = first_present(self.host.as_ref(), ROW_ANCHOR_CANDIDATES) else {
            return false;
        };
        self.host.mount_row(&anchor);
        self.row_mounted = true;
        true
    }

    fn build_view(&self, context: &ChatContext) -> TriggerRowView {
        let group = current_group(context);
        TriggerRowView {
            row_visible: group.is_some(),
            icons_visible: self.settings.enabled,
            toggle_label: toggle_label(self.settings.enabled),
            toggle_off_style: !self.settings.enabled,
            icons: group
                .map(|g| build_icons(g, &context.characters))
                .unwrap_or_default(),
        }
    }
}
