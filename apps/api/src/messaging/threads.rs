//! Groups a member's messages into conversations.

use serde::Serialize;

use crate::models::message::Message;

/// One conversation as listed in the inbox.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSummary {
    pub other_id: String,
    pub other_name: String,
    pub last_message: Message,
    /// Messages in this thread addressed to the member and not yet read.
    pub unread_count: usize,
    pub message_count: usize,
}

/// Builds the inbox for `user_id`, newest conversation first.
///
/// `name_of` resolves the other participant's display name.
pub fn build_threads<F>(messages: &[Message], user_id: &str, name_of: F) -> Vec<ThreadSummary>
where
    F: Fn(&str) -> String,
{
    // (other participant, messages in store order)
    let mut groups: Vec<(&str, Vec<&Message>)> = Vec::new();

    for m in messages
        .iter()
        .filter(|m| m.sender_id == user_id || m.receiver_id == user_id)
    {
        let other = if m.sender_id == user_id {
            m.receiver_id.as_str()
        } else {
            m.sender_id.as_str()
        };
        match groups.iter_mut().find(|(id, _)| *id == other) {
            Some((_, thread)) => thread.push(m),
            None => groups.push((other, vec![m])),
        }
    }

    let mut threads: Vec<ThreadSummary> = groups
        .into_iter()
        .filter_map(|(other, thread)| {
            let last = (*thread.last()?).clone();
            Some(ThreadSummary {
                other_id: other.to_string(),
                other_name: name_of(other),
                unread_count: thread
                    .iter()
                    .filter(|m| m.receiver_id == user_id && !m.read)
                    .count(),
                message_count: thread.len(),
                last_message: last,
            })
        })
        .collect();

    threads.sort_by(|a, b| b.last_message.timestamp.cmp(&a.last_message.timestamp));
    threads
}

/// Messages exchanged between `user_id` and `other_id`, oldest first.
pub fn conversation<'a>(messages: &'a [Message], user_id: &str, other_id: &str) -> Vec<&'a Message> {
    let mut convo: Vec<&Message> = messages
        .iter()
        .filter(|m| {
            (m.sender_id == user_id && m.receiver_id == other_id)
                || (m.sender_id == other_id && m.receiver_id == user_id)
        })
        .collect();
    convo.sort_by_key(|m| m.timestamp);
    convo
}
