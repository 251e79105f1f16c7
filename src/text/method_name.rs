//! Method name decoding
//!
//! Turns a runner's test description (`test_creates_a_user`,
//! `testCreatesAUser`, `test_foo with data set "#2"`) into a readable phrase
//! such as `creates a user` or `foo [#2]`.

/// Marker left behind by snake-casing a data-provider suffix
const DATA_SET_MARKER: &str = "with_data_set\"";

/// Token dropped from decoded names
const NOISE_WORD: &str = "test";

/// Convert a description to lower-case, underscore-separated form.
///
/// Words split on whitespace are capitalized and glued together, then every
/// ASCII upper-case letter that follows another character gets a `_` in front
/// of it before the whole string is lower-cased. Strings made only of
/// `a`-`z` are returned untouched.
#[must_use]
pub fn snake_case(value: &str) -> String {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_lowercase()) {
        return value.to_string();
    }

    let mut glued = String::with_capacity(value.len());
    let mut word_start = true;
    for c in value.chars() {
        if c.is_whitespace() {
            word_start = true;
            continue;
        }
        glued.push(if word_start { c.to_ascii_uppercase() } else { c });
        word_start = false;
    }

    let mut snake = String::with_capacity(glued.len() + glued.len() / 2);
    for (i, c) in glued.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            snake.push('_');
        }
        snake.push(c);
    }

    snake.to_lowercase()
}

/// Decode a test description into the phrase printed after the status glyph.
#[must_use]
pub fn decode_method_name(description: &str) -> String {
    let method = snake_case(description)
        .replacen(DATA_SET_MARKER, "[", 1)
        .replacen('"', "]", 1);

    method
        .split('_')
        .filter(|word| *word != NOISE_WORD)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_spaced_words() {
        assert_eq!(snake_case("creates a user"), "creates_a_user");
    }

    #[test]
    fn test_snake_case_camel_case() {
        assert_eq!(snake_case("testCreatesAUser"), "test_creates_a_user");
    }

    #[test]
    fn test_snake_case_already_snake() {
        assert_eq!(snake_case("test_creates_a_user"), "test_creates_a_user");
    }

    #[test]
    fn test_snake_case_all_lowercase_untouched() {
        assert_eq!(snake_case("lowercase"), "lowercase");
    }

    #[test]
    fn test_snake_case_keeps_quoted_data_set_label() {
        assert_eq!(
            snake_case("test_rejects_invalid_input with_data_set\"#2\""),
            "test_rejects_invalid_input_with_data_set\"#2\""
        );
    }

    #[test]
    fn test_snake_case_empty() {
        assert_eq!(snake_case(""), "");
    }

    #[test]
    fn test_decode_strips_test_prefix() {
        assert_eq!(decode_method_name("test_creates_a_user"), "creates a user");
    }

    #[test]
    fn test_decode_data_set_annotation() {
        assert_eq!(
            decode_method_name("test_rejects_invalid_input with_data_set\"#2\""),
            "rejects invalid input [#2]"
        );
    }

    #[test]
    fn test_decode_named_data_set() {
        assert_eq!(
            decode_method_name("test_parses_dates with data set \"leap year\""),
            "parses dates [leap year]"
        );
    }

    #[test]
    fn test_decode_camel_case_method() {
        assert_eq!(decode_method_name("testItStoresAPost"), "it stores a post");
    }

    #[test]
    fn test_decode_removes_every_test_token() {
        assert_eq!(decode_method_name("test_runs_test_suite"), "runs suite");
    }

    #[test]
    fn test_decode_keeps_words_containing_test() {
        assert_eq!(decode_method_name("test_testing_tests"), "testing tests");
    }

    #[test]
    fn test_decode_plain_description() {
        assert_eq!(decode_method_name("creates a user"), "creates a user");
    }

    #[test]
    fn test_decode_only_first_quote_closes() {
        assert_eq!(
            decode_method_name("test_quotes with_data_set\"a\"b\""),
            "quotes [a]b\""
        );
    }
}
