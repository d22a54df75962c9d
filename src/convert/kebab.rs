use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Inputs already in canonical form can be returned as-is
    static ref CANONICAL: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Separator,
    Other,
}

fn classify(c: char) -> CharClass {
    match c {
        'a'..='z' => CharClass::Lower,
        'A'..='Z' => CharClass::Upper,
        '0'..='9' => CharClass::Digit,
        '_' | '-' => CharClass::Separator,
        c if c.is_whitespace() => CharClass::Separator,
        _ => CharClass::Other,
    }
}

/// Convert text to kebab-case: words are detected at separator runs,
/// lowercase-to-uppercase transitions, and acronym tails, then
/// lowercased and joined with single hyphens
pub fn to_kebab_case(input: &str) -> String {
    if input.is_empty() || CANONICAL.is_match(input) {
        return input.to_string();
    }

    segment_words(input).join("-")
}

/// Split text into lowercase words, left to right
///
/// Boundary decisions look at original character adjacency, so stripped
/// punctuation neither separates words nor counts as a letter for case
/// transitions: `foo!bar` and `foo!Bar` both come out as one word.
fn segment_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        match classify(c) {
            CharClass::Separator => flush(&mut words, &mut current),
            CharClass::Other => {
                // Stripped, and never a word boundary
            }
            CharClass::Lower | CharClass::Digit => current.push(c),
            CharClass::Upper => {
                let prev = i.checked_sub(1).map(|j| classify(chars[j]));
                let next = chars.get(i + 1).map(|&n| classify(n));

                if matches!(prev, Some(CharClass::Lower | CharClass::Digit)) {
                    // fooBar, foo2Bar
                    flush(&mut words, &mut current);
                } else if prev == Some(CharClass::Upper)
                    && matches!(next, Some(CharClass::Lower | CharClass::Digit))
                {
                    // HTTPResponse: the run's last letter starts the next word
                    flush(&mut words, &mut current);
                }

                current.push(c);
            }
        }
    }

    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(current.to_ascii_lowercase());
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_casing() {
        assert_eq!(to_kebab_case("fooBarBAZ"), "foo-bar-baz");
    }

    #[test]
    fn test_repeated_separators() {
        assert_eq!(to_kebab_case("foo__bar  baz--qux"), "foo-bar-baz-qux");
    }

    #[test]
    fn test_edge_separators_and_punctuation() {
        assert_eq!(to_kebab_case("__foo-bar! "), "foo-bar");
        assert_eq!(to_kebab_case("  --My__Test123--Case!! "), "my-test123-case");
    }

    #[test]
    fn test_acronym_splitting() {
        assert_eq!(to_kebab_case("getHTTPResponse"), "get-http-response");
        assert_eq!(to_kebab_case("HTTPResponse"), "http-response");
        assert_eq!(to_kebab_case("parseURL"), "parse-url");
    }

    #[test]
    fn test_digits_stay_attached() {
        assert_eq!(to_kebab_case("foo2Bar 3baz"), "foo2-bar-3baz");
        assert_eq!(to_kebab_case("foo2bar"), "foo2bar");
    }

    #[test]
    fn test_punctuation_does_not_split() {
        assert_eq!(to_kebab_case("foo!bar"), "foobar");
        assert_eq!(to_kebab_case("foo!Bar"), "foobar");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(to_kebab_case(""), "");
        assert_eq!(to_kebab_case("!!!"), "");
        assert_eq!(to_kebab_case("___"), "");
        assert_eq!(to_kebab_case("42"), "42");
    }

    #[test]
    fn test_already_canonical() {
        assert_eq!(to_kebab_case("foo-bar"), "foo-bar");
        assert_eq!(to_kebab_case("test123-case"), "test123-case");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "fooBarBAZ",
            "foo__bar  baz--qux",
            "getHTTPResponse",
            "  --My__Test123--Case!! ",
            "foo2Bar 3baz",
        ];

        for input in inputs {
            let once = to_kebab_case(input);
            assert_eq!(to_kebab_case(&once), once);
        }
    }

    #[test]
    fn test_output_is_canonical() {
        let inputs = [
            "fooBarBAZ",
            "__foo-bar! ",
            "getHTTPResponse",
            "MIXED_case Words",
            "a",
        ];

        for input in inputs {
            let output = to_kebab_case(input);
            assert!(!output.chars().any(|c| c.is_ascii_uppercase()));
            assert!(!output.contains('_'));
            assert!(!output.contains(' '));
            assert!(!output.contains("--"));
            assert!(!output.starts_with('-'));
            assert!(!output.ends_with('-'));
        }
    }
}
