mod def;
mod field;
mod message;

pub use self::def::*;
pub use self::field::*;
pub use self::message::*;
