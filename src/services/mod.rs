pub mod handler;
pub mod inference;

pub use inference::{InferenceClient, InferenceError};
