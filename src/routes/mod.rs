pub(crate) mod chat;
pub mod health_checks;
pub(crate) mod invoke;

pub use health_checks::*;
