//! Host environment boundary.
//!
//! Everything this add-on consumes from the chat host lives behind the
//! [`Host`] trait:
//! - the namespaced settings record the host persists for us
//! - the lifecycle event bus we hang the re-render callback on
//! - the synchronous chat context snapshot (active chat, groups, roster)
//! - the slash-command executor, when the host build has one
//! - the document surface: selector queries, the group auto-reply
//!   checkbox, the message composer, and the icon row itself
//!
//! The host adapter owns the real document; this crate only computes what
//! should be there and pushes it through the trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::icon_row::TriggerRowView;

/// A CSS-style selector the host adapter resolves against its document.
pub type Selector = &'static str;

/// Opaque reference to an element owned by the host document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRef(pub String);

/// Insertion points for the icon row, most specific first. Host builds
/// differ in which chat-header chrome they render, so the list degrades
/// from header buttons down to the chat container itself.
pub const ROW_ANCHOR_CANDIDATES: &[Selector] = &[
    "#chat_header .fa-bookmark",
    "#chat_header .fa-users",
    "#chat_header .fa-user",
    "#chat_header .menu_button",
    "#chat_header",
    "#chat",
];

/// Known spellings of the host's group auto-reply checkbox.
pub const AUTO_REPLY_CANDIDATES: &[Selector] = &[
    "#rm_group_chat_auto_mode",
    "#group_chat_auto_mode",
    "#groupchat-auto-mode",
    "input[name='group_auto_mode']",
];

/// Composer elements used when the host has no command executor.
pub const COMPOSER_INPUT_CANDIDATES: &[Selector] = &["#send_textarea"];
pub const SEND_BUTTON_CANDIDATES: &[Selector] = &["#send_but"];

/// Host lifecycle events worth a re-render. Not every host build emits
/// all of them; [`crate::attach`] subscribes to whatever exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    ChatChanged,
    GroupUpdated,
    GroupChatCreated,
    GroupChatDeleted,
    CharacterPageLoaded,
    MessageReceived,
    MessageSent,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 7] = [
        LifecycleEvent::ChatChanged,
        LifecycleEvent::GroupUpdated,
        LifecycleEvent::GroupChatCreated,
        LifecycleEvent::GroupChatDeleted,
        LifecycleEvent::CharacterPageLoaded,
        LifecycleEvent::MessageReceived,
        LifecycleEvent::MessageSent,
    ];
}

/// A group chat as the host reports it. Members are opaque references
/// resolved against the character roster; their order is render order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    #[serde(default)]
    pub members: Vec<String>,
}

/// A character roster entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Snapshot of the host chat state, returned by [`Host::context`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    #[serde(default)]
    pub chat_id: Option<String>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub characters: Vec<Character>,
}

/// Callback registered on the host event bus.
pub type EventHandler = Box<dyn Fn()>;

#[async_trait(?Send)]
pub trait Host {
    /// Read this add-on's record from the host settings store.
    fn read_settings(&self) -> Option<Value>;

    /// Overwrite this add-on's record wholesale. The host debounces the
    /// actual persistence.
    fn write_settings(&self, value: Value);

    /// Whether this host build emits the given lifecycle event.
    fn has_event(&self, event: LifecycleEvent) -> bool;

    fn on_event(&self, event: LifecycleEvent, handler: EventHandler);

    /// Current chat state, synchronously.
    fn context(&self) -> ChatContext;

    /// Whether the host exposes a slash-command executor.
    fn supports_commands(&self) -> bool;

    async fn execute_command(&self, command: &str) -> Result<(), String>;

    /// Resolve a selector against the host document.
    fn query(&self, selector: Selector) -> Option<ElementRef>;

    /// `None` when the element is not a readable checkbox.
    fn is_checked(&self, element: &ElementRef) -> Option<bool>;

    /// Write a checkbox value. The host dispatches its change
    /// notifications synchronously from inside this call.
    fn set_checked(&self, element: &ElementRef, value: bool);

    fn set_value(&self, element: &ElementRef, text: &str);

    /// Emit the host's input-changed notification for an element.
    fn notify_input(&self, element: &ElementRef);

    fn click(&self, element: &ElementRef);

    /// Create the icon row container next to the given anchor.
    fn mount_row(&self, anchor: &ElementRef);

    /// Replace the mounted row's contents with the given view.
    fn apply_row(&self, view: &TriggerRowView);
}

/// First candidate the host document can actually resolve. Shared by
/// anchor discovery, auto-reply-control discovery, and the composer
/// fallback.
pub fn first_present(host: &dyn Host, candidates: &[Selector]) -> Option<ElementRef> {
    candidates.iter().find_map(|selector| host.query(selector))
}
