//! 类型系统模块：消息与对话的统一表示。
//!
//! # Types Module
//!
//! Provider-independent representations shared by every adapter.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Role-tagged chat message |
//! | [`MessageRole`] | `system`, `user` or `assistant` |
//! | [`Conversation`] | Ordered list of messages forming one history |
//! | [`MessageMap`] | Generic `{"type", "content"}` map form of a message |
//!
//! ## Example
//!
//! ```rust
//! use ai_lib_lite::types::{Message, MessageRole};
//!
//! let msg = Message::human("What's the weather?");
//! let map = msg.to_map();
//! assert_eq!(map["type"], "user");
//! assert_eq!(Message::from_map(&map).unwrap().role(), MessageRole::User);
//! ```

pub mod message;

pub use message::{
    messages_from_maps, messages_to_maps, Conversation, Message, MessageError, MessageMap,
    MessageRole,
};
