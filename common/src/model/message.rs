use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::order::{OrderStatus, short_ref};
use super::user::UserSummary;

/// Order reference populated into an inbox message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessageOrder {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: OrderStatus,
}

impl MessageOrder {
    pub fn short_ref(&self) -> String {
        short_ref(&self.id)
    }
}

/// A partner message in the admin inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(default, rename = "senderId", alias = "sender")]
    pub sender: Option<UserSummary>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content: String,
    #[serde(default, rename = "orderId", alias = "order")]
    pub order: Option<MessageOrder>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Inbox filter of the admin messages page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFilter {
    #[default]
    All,
    Read,
    Unread,
}

impl ReadFilter {
    pub fn matches(self, message: &Message) -> bool {
        match self {
            ReadFilter::All => true,
            ReadFilter::Read => message.is_read,
            ReadFilter::Unread => !message.is_read,
        }
    }
}

pub fn unread_count(messages: &[Message]) -> usize {
    messages.iter().filter(|message| !message.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populated_sender_and_order() {
        let message: Message = serde_json::from_str(
            r#"{"_id":"m1","senderId":{"_id":"u1","name":"Caio","email":"c@x.com"},
                "content":"Olá","orderId":{"_id":"aaaabbbbcccc1234","totalAmount":30,"status":"pending"},
                "isRead":false}"#,
        )
        .unwrap();
        assert_eq!(message.sender.as_ref().map(|s| s.name.as_str()), Some("Caio"));
        assert_eq!(message.order.as_ref().map(MessageOrder::short_ref).as_deref(), Some("CCCC1234"));
    }

    #[test]
    fn filter_by_read_state() {
        let messages = vec![
            Message { is_read: true, ..Message::default() },
            Message { is_read: false, ..Message::default() },
            Message { is_read: false, ..Message::default() },
        ];
        let unread: Vec<_> = messages.iter().filter(|m| ReadFilter::Unread.matches(m)).collect();
        assert_eq!(unread.len(), 2);
        assert_eq!(messages.iter().filter(|m| ReadFilter::All.matches(m)).count(), 3);
        assert_eq!(unread_count(&messages), 2);
    }

    #[test]
    fn null_content_keeps_the_listing() {
        let messages: Vec<Message> = serde_json::from_str(
            r#"[{"_id":"m1","content":null,"isRead":null,"senderId":null},
                {"_id":"m2","content":"Oi","senderId":{"_id":"u1","name":null,"email":null}}]"#,
        )
        .unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "");
        assert!(!messages[0].is_read);
        assert_eq!(messages[1].sender.as_ref().map(|s| s.name.as_str()), Some(""));
    }
}
