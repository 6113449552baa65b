pub mod conversation;
pub mod scripture;
pub mod user;
