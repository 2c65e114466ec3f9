// Character-based slicing helpers.
//
// IBAN offsets count characters. Slicing by byte offset would panic on
// multi-byte input, so every accessor goes through these helpers.

fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Characters `[start, end)` of `s`, clipped to its length
pub(crate) fn substring(s: &str, start: usize, end: usize) -> &str {
    let from = byte_offset(s, start);
    let to = byte_offset(s, end.max(start));
    &s[from..to]
}

/// Characters from `start` to the end of `s`
pub(crate) fn substring_from(s: &str, start: usize) -> &str {
    &s[byte_offset(s, start)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_ascii() {
        assert_eq!(substring("DE89370400", 0, 2), "DE");
        assert_eq!(substring("DE89370400", 2, 4), "89");
        assert_eq!(substring_from("DE89370400", 4), "370400");
    }

    #[test]
    fn test_substring_clips() {
        assert_eq!(substring("D", 0, 2), "D");
        assert_eq!(substring("", 2, 4), "");
        assert_eq!(substring_from("DE", 4), "");
    }

    #[test]
    fn test_substring_multibyte() {
        assert_eq!(substring("ÄÖ12ü", 0, 2), "ÄÖ");
        assert_eq!(substring("ÄÖ12ü", 2, 4), "12");
        assert_eq!(substring_from("ÄÖ12ü", 4), "ü");
    }
}
