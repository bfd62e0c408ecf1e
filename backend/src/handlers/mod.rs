//! HTTP handlers for the Agri Advisory Platform

mod advisory;
mod chat;
mod health;
mod schemes;

pub use advisory::*;
pub use chat::*;
pub use health::*;
pub use schemes::*;
