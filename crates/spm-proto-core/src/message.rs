use crate::error::Error;

///
/// Message
///
/// Implemented by every type generated with `#[message]`.
///

pub trait Message: Default {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// Reset every field to its declared default. Repeated fields are
    /// emptied and embedded messages are cleared recursively.
    fn clear(&mut self);

    /// Human-readable summary. This is not an encoding of the message.
    fn utf8_debug_string(&self) -> String;
}

///
/// MessageCodec
///
/// Placeholder for the binary encoding surface. Implementations generated
/// by `#[message(codec)]` never read their input and never produce output.
///

pub trait MessageCodec: Message {
    /// Accept `data` as an encoded message. Always succeeds and leaves
    /// `self` untouched.
    fn parse_from_array(&mut self, data: &[u8]) -> Result<(), Error>;

    /// Encode the message. Always returns an empty string.
    fn serialize_as_string(&self) -> String;
}

/// Placeholder returned by `utf8_debug_string` when no debug field is declared.
pub const DEBUG_PLACEHOLDER: &str = "Dummy";
