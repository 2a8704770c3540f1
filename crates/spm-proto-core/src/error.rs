use thiserror::Error as ThisError;

///
/// Error
///
/// Recoverable failures surfaced by the checked container operations and the
/// integer-to-enumeration conversions. The unchecked accessors panic instead.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("index {index} is out of bounds for a repeated field of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("{value} is not a known {enumeration} value")]
    UnknownEnumValue {
        enumeration: &'static str,
        value: i32,
    },
}

impl Error {
    /// Construct an out-of-bounds error for `index` against a field of `len` elements.
    #[must_use]
    pub const fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Construct an unknown-enumeration-value error.
    #[must_use]
    pub const fn unknown_enum_value(enumeration: &'static str, value: i32) -> Self {
        Self::UnknownEnumValue { enumeration, value }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_value() {
        let err = Error::index_out_of_bounds(4, 2);
        assert_eq!(
            err.to_string(),
            "index 4 is out of bounds for a repeated field of length 2"
        );

        let err = Error::unknown_enum_value("ModelType", 9);
        assert_eq!(err.to_string(), "9 is not a known ModelType value");
    }
}
