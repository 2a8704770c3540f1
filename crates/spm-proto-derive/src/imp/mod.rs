pub mod accessor;
pub mod default;
pub mod message;
