mod chat;
mod event;

pub use chat::*;
pub use event::*;
