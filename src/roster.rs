//! Group and character lookups against the host-provided context.

use crate::host::{Character, ChatContext, Group};

/// Resolve the active group, if the current chat is a group chat.
///
/// No active chat id, or an id that matches no known group, both mean
/// "not in a group chat": an empty state, never an error.
pub fn current_group(context: &ChatContext) -> Option<&Group> {
    let chat_id = context.chat_id.as_deref()?;
    context.groups.iter().find(|group| group.id == chat_id)
}

/// Resolve a group member reference against the character roster.
///
/// Hosts are loose about what a member list stores, so the reference is
/// matched against the avatar field first, then the display name, then
/// the character id. First match wins.
pub fn resolve_member<'a>(member: &str, characters: &'a [Character]) -> Option<&'a Character> {
    characters
        .iter()
        .find(|c| c.avatar.as_deref() == Some(member))
        .or_else(|| characters.iter().find(|c| c.name == member))
        .or_else(|| characters.iter().find(|c| c.id == member))
}

/// Two-character badge shown when a member has no avatar image.
pub fn short_label(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

/// Absolute and data URLs pass through; bare file names resolve against
/// the host's character media directory.
pub fn avatar_url(character: &Character) -> Option<String> {
    let avatar = character.avatar.as_deref().filter(|a| !a.is_empty())?;
    if avatar.starts_with("http://") || avatar.starts_with("https://") || avatar.starts_with("data:")
    {
        Some(avatar.to_string())
    } else {
        Some(format!("/characters/{}", avatar))
    }
}
