//! UI components for the active-chat screen.

pub mod chat_room;
pub mod member_list;
pub mod message_list;
