use std::{collections::HashSet, sync::LazyLock};

///
/// RESERVED_WORDS
/// rust keywords (strict, reserved and edition-reserved)
///

static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    // https://doc.rust-lang.org/reference/keywords.html
    [
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
        "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
        "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
    ]
    .into_iter()
    .collect()
});

// keywords that cannot be written as raw identifiers
const NOT_RAW: [&str; 4] = ["crate", "self", "Self", "super"];

/// Check if an identifier is a reserved word.
#[must_use]
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

/// Check if a reserved word has no raw-identifier form.
#[must_use]
pub fn is_raw_forbidden(word: &str) -> bool {
    NOT_RAW.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knows_strict_and_reserved_keywords() {
        assert!(is_reserved_word("type"));
        assert!(is_reserved_word("gen"));
        assert!(is_reserved_word("Self"));
        assert!(!is_reserved_word("widget"));
    }

    #[test]
    fn path_keywords_cannot_be_raw() {
        assert!(is_raw_forbidden("self"));
        assert!(is_raw_forbidden("crate"));
        assert!(!is_raw_forbidden("type"));
    }
}
