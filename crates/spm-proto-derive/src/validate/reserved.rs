use std::{collections::HashSet, sync::LazyLock};

///
/// RESERVED_WORDS
/// accessor names that would shadow methods every message already has
///

static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut words = Vec::new();

    // Message / MessageCodec
    words.extend(vec![
        "clear",
        "parse_from_array",
        "serialize_as_string",
        "utf8_debug_string",
    ]);

    // derived traits
    words.extend(vec![
        "clone",
        "default",
        "deserialize",
        "eq",
        "fmt",
        "ne",
        "serialize",
    ]);

    words.into_iter().collect()
});

/// Check if an accessor name is reserved.
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}
