pub mod forward;

pub use forward::*;
