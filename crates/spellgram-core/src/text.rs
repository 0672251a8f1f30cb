// Word and query normalization
//
// Dictionary entries and query tokens go through the same lowercasing so
// that case never causes a mismatch between the two sides.

/// Separator between entries of a dictionary source.
pub const DICTIONARY_SEPARATOR: char = ',';

/// Normalize a single word: trim surrounding whitespace and lowercase.
///
/// Returns `None` if nothing remains after trimming.
pub fn normalize_word(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Split a dictionary source blob into normalized entries.
///
/// Entries are separated by commas; empty entries are dropped. Duplicates
/// are *not* removed here.
pub fn dictionary_entries(source: &str) -> impl Iterator<Item = String> + '_ {
    source.split(DICTIONARY_SEPARATOR).filter_map(normalize_word)
}

/// Split free text into normalized query tokens.
///
/// Tokens are separated by any Unicode whitespace. Punctuation is kept as
/// part of the token.
pub fn query_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_word("  Glad \n"), Some("glad".to_string()));
        assert_eq!(normalize_word("WIDE"), Some("wide".to_string()));
    }

    #[test]
    fn normalize_rejects_blank() {
        assert_eq!(normalize_word(""), None);
        assert_eq!(normalize_word(" \t\n"), None);
    }

    #[test]
    fn normalize_handles_non_ascii() {
        assert_eq!(normalize_word("Ärrä"), Some("ärrä".to_string()));
    }

    #[test]
    fn dictionary_entries_drop_empty_tokens() {
        let entries: Vec<String> = dictionary_entries("glad, Wide,,  ,bright,\n").collect();
        assert_eq!(entries, ["glad", "wide", "bright"]);
    }

    #[test]
    fn dictionary_entries_keep_duplicates() {
        let entries: Vec<String> = dictionary_entries("Light,light").collect();
        assert_eq!(entries, ["light", "light"]);
    }

    #[test]
    fn query_tokens_split_on_any_whitespace() {
        let tokens: Vec<String> = query_tokens("  Gld\tNAROW\n lite ").collect();
        assert_eq!(tokens, ["gld", "narow", "lite"]);
    }

    #[test]
    fn query_tokens_of_blank_text_is_empty() {
        assert_eq!(query_tokens("   ").count(), 0);
    }
}
