//! External API integrations

pub mod chat;

pub use chat::ChatClient;
