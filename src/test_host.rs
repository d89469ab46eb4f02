//! Test double for the host boundary.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::host::{
    ChatContext, Character, ElementRef, EventHandler, Group, Host, LifecycleEvent, Selector,
    AUTO_REPLY_CANDIDATES,
};
use crate::icon_row::TriggerRowView;

/// In-memory host. Tests mutate the public fields to shape the document
/// and chat state, then inspect the recorded writes.
#[derive(Default)]
pub struct MockHost {
    pub context: RefCell<ChatContext>,
    pub stored_settings: RefCell<Option<Value>>,
    pub settings_writes: RefCell<Vec<Value>>,
    /// Selectors the document can currently resolve.
    pub present: RefCell<Vec<&'static str>>,
    /// Auto-reply checkbox value; `None` reads as "not a checkbox".
    pub auto_reply: RefCell<Option<bool>>,
    pub checkbox_writes: Cell<u32>,
    pub commands_supported: Cell<bool>,
    pub reject_commands: Cell<bool>,
    pub executed: RefCell<Vec<String>>,
    pub composer_text: RefCell<Option<String>>,
    pub input_notifications: Cell<u32>,
    pub send_clicks: Cell<u32>,
    pub mounted_anchors: RefCell<Vec<ElementRef>>,
    pub applied_views: RefCell<Vec<TriggerRowView>>,
    pub bus_events: RefCell<Vec<LifecycleEvent>>,
    pub handlers: RefCell<Vec<(LifecycleEvent, EventHandler)>>,
}

impl MockHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// A host sitting in group chat "g1" with Alice and Bob on the
    /// roster, a chat header to anchor on, and the auto-reply checkbox
    /// present and on.
    pub fn with_group_chat() -> Rc<Self> {
        let host = Self::new();
        host.present
            .borrow_mut()
            .extend(["#chat_header", "#rm_group_chat_auto_mode"]);
        *host.auto_reply.borrow_mut() = Some(true);
        *host.context.borrow_mut() = ChatContext {
            chat_id: Some("g1".to_string()),
            groups: vec![Group {
                id: "g1".to_string(),
                members: vec!["charA".to_string(), "charB".to_string()],
            }],
            characters: vec![
                Character {
                    id: "charA".to_string(),
                    name: "Alice".to_string(),
                    avatar: None,
                },
                Character {
                    id: "charB".to_string(),
                    name: "Bob".to_string(),
                    avatar: None,
                },
            ],
        };
        host
    }

    /// Fire a lifecycle event to every handler subscribed to it.
    pub fn emit(&self, event: LifecycleEvent) {
        let handlers = self.handlers.borrow();
        for (registered, handler) in handlers.iter() {
            if *registered == event {
                handler();
            }
        }
    }

    fn is_auto_reply(element: &ElementRef) -> bool {
        AUTO_REPLY_CANDIDATES
            .iter()
            .any(|selector| *selector == element.0)
    }
}

#[async_trait(?Send)]
impl Host for MockHost {
    fn read_settings(&self) -> Option<Value> {
        self.stored_settings.borrow().clone()
    }

    fn write_settings(&self, value: Value) {
        self.settings_writes.borrow_mut().push(value);
    }

    fn has_event(&self, event: LifecycleEvent) -> bool {
        self.bus_events.borrow().contains(&event)
    }

    fn on_event(&self, event: LifecycleEvent, handler: EventHandler) {
        self.handlers.borrow_mut().push((event, handler));
    }

    fn context(&self) -> ChatContext {
        self.context.borrow().clone()
    }

    fn supports_commands(&self) -> bool {
        self.commands_supported.get()
    }

    async fn execute_command(&self, command: &str) -> Result<(), String> {
        if self.reject_commands.get() {
            return Err("command executor rejected".to_string());
        }
        self.executed.borrow_mut().push(command.to_string());
        Ok(())
    }

    fn query(&self, selector: Selector) -> Option<ElementRef> {
        if self.present.borrow().contains(&selector) {
            Some(ElementRef(selector.to_string()))
        } else {
            None
        }
    }

    fn is_checked(&self, element: &ElementRef) -> Option<bool> {
        if Self::is_auto_reply(element) {
            *self.auto_reply.borrow()
        } else {
            None
        }
    }

    fn set_checked(&self, element: &ElementRef, value: bool) {
        if Self::is_auto_reply(element) {
            *self.auto_reply.borrow_mut() = Some(value);
            self.checkbox_writes.set(self.checkbox_writes.get() + 1);
        }
    }

    fn set_value(&self, element: &ElementRef, text: &str) {
        if element.0 == "#send_textarea" {
            *self.composer_text.borrow_mut() = Some(text.to_string());
        }
    }

    fn notify_input(&self, _element: &ElementRef) {
        self.input_notifications
            .set(self.input_notifications.get() + 1);
    }

    fn click(&self, element: &ElementRef) {
        if element.0 == "#send_but" {
            self.send_clicks.set(self.send_clicks.get() + 1);
        }
    }

    fn mount_row(&self, anchor: &ElementRef) {
        self.mounted_anchors.borrow_mut().push(anchor.clone());
    }

    fn apply_row(&self, view: &TriggerRowView) {
        self.applied_views.borrow_mut().push(view.clone());
    }
}
