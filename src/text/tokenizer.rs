// Word tokenizer for identifiers and free-form text.
// Any character outside [A-Za-z0-9] is a delimiter; uppercase letters
// additionally open a new word depending on their neighbours.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No word in progress
    Between,
    /// Last char was a lowercase letter or a digit
    Word,
    /// Last char was an uppercase letter
    UpperRun,
}

/// Split `text` into words.
///
/// An uppercase letter starts a new word when it follows anything other than
/// another uppercase letter, or when it is followed by a lowercase letter.
/// The second rule makes the last capital of an acronym the first letter of
/// the next word, so `"HTTPServer"` becomes `["HTTP", "Server"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut state = State::Between;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if !ch.is_ascii_alphanumeric() {
            flush(&mut tokens, &mut current);
            state = State::Between;
            continue;
        }

        if ch.is_ascii_uppercase() {
            let starts_word = match state {
                State::Between => false,
                State::Word => true,
                State::UpperRun => chars.peek().is_some_and(|next| next.is_ascii_lowercase()),
            };
            if starts_word {
                flush(&mut tokens, &mut current);
            }
            state = State::UpperRun;
        } else {
            state = State::Word;
        }

        current.push(ch);
    }

    flush(&mut tokens, &mut current);
    tokens
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "hello world",
        "HelloWorld",
        "some-mixed_string With spaces_underscores-and-hyphens",
        "123abc",
        "  __leading and trailing__  ",
        "getHTTPResponse",
        "XMLHttpRequest2Json",
        "snake_case_WITH_Caps",
        "émoji 🎉 and ünïcode",
        "a.b,c;d|e/f\\g:h\ti\nj",
        "ALLCAPS",
        "x",
        "--__--",
    ];

    #[test]
    fn test_worked_examples() {
        assert_eq!(tokenize("hello world"), vec!["hello", "world"]);
        assert_eq!(tokenize("HelloWorld"), vec!["Hello", "World"]);
        assert_eq!(
            tokenize("some-mixed_string With spaces_underscores-and-hyphens"),
            vec!["some", "mixed", "string", "With", "spaces", "underscores", "and", "hyphens"]
        );
        assert_eq!(tokenize("123abc"), vec!["123abc"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("\t\n ").is_empty());
        assert!(tokenize("-_-").is_empty());
    }

    #[test]
    fn test_acronym_boundaries() {
        assert_eq!(tokenize("ABCWord"), vec!["ABC", "Word"]);
        assert_eq!(tokenize("ABc"), vec!["A", "Bc"]);
        assert_eq!(tokenize("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(tokenize("getHTTPResponse"), vec!["get", "HTTP", "Response"]);
        assert_eq!(tokenize("AA"), vec!["AA"]);
        assert_eq!(tokenize("aA"), vec!["a", "A"]);
        assert_eq!(tokenize("UPPERCASE"), vec!["UPPERCASE"]);
        assert_eq!(tokenize("thisIsAlreadyCamelCase"), vec!["this", "Is", "Already", "Camel", "Case"]);
    }

    #[test]
    fn test_digits() {
        assert_eq!(tokenize("abc123Def"), vec!["abc123", "Def"]);
        assert_eq!(tokenize("ABC123def"), vec!["ABC123def"]);
        assert_eq!(tokenize("1A"), vec!["1", "A"]);
        assert_eq!(tokenize("A1b"), vec!["A1b"]);
        assert_eq!(tokenize("1234 5678 90"), vec!["1234", "5678", "90"]);
        assert_eq!(tokenize("1_word"), vec!["1", "word"]);
    }

    #[test]
    fn test_punctuation_and_non_ascii_are_delimiters() {
        assert_eq!(tokenize("foo.bar(baz)"), vec!["foo", "bar", "baz"]);
        assert_eq!(tokenize("naïve café"), vec!["na", "ve", "caf"]);
        assert_eq!(tokenize("a b c d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        assert_eq!(tokenize("foo foo-foo"), vec!["foo", "foo", "foo"]);
    }

    #[test]
    fn test_tokens_are_ascii_alphanumeric() {
        let shape = Regex::new(r"^[A-Za-z0-9]+$").unwrap();
        for sample in SAMPLES {
            for token in tokenize(sample) {
                assert!(shape.is_match(&token), "{:?} from {:?}", token, sample);
            }
        }
    }

    #[test]
    fn test_trimming_is_transparent() {
        for sample in SAMPLES {
            assert_eq!(tokenize(sample), tokenize(sample.trim()), "{:?}", sample);
            let padded = format!("  \t{}\n ", sample);
            assert_eq!(tokenize(&padded), tokenize(sample), "{:?}", sample);
        }
    }
}
