//! Runtime pieces shared by every generated message: the `RepeatedField`
//! container, the `Message` / `MessageCodec` traits, and the error type.

#[macro_use]
mod macros;

pub mod error;
pub mod message;
pub mod repeated;

pub use error::Error;
pub use message::{DEBUG_PLACEHOLDER, Message, MessageCodec};
pub use repeated::RepeatedField;
