use std::iter::Peekable;
use std::str::CharIndices;

use serde::{Deserialize, Serialize};

/// A token with its UTF-8 byte offsets in the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content, lowercased.
    pub text: String,
    /// Byte offset (inclusive) in the source text.
    pub start: usize,
    /// Byte offset (exclusive) in the source text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Character classes that make up the token alphabet.
///
/// Adjacent characters of different classes never share a token, so
/// `"哈希123test"` splits into three tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// CJK unified ideographs U+4E00..=U+9FA5.
    Cjk,
    /// ASCII letters.
    Letter,
    /// ASCII digits.
    Digit,
}

impl CharClass {
    /// Classify a character, or `None` when it is a separator.
    #[inline]
    pub fn of(ch: char) -> Option<Self> {
        match ch {
            '\u{4E00}'..='\u{9FA5}' => Some(CharClass::Cjk),
            'a'..='z' | 'A'..='Z' => Some(CharClass::Letter),
            '0'..='9' => Some(CharClass::Digit),
            _ => None,
        }
    }
}

/// Lazy tokenizer over a borrowed text.
///
/// Each call to [`tokens`] builds a fresh iterator; nothing is shared
/// between calls.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let (start, ch) = self.chars.next()?;
            let Some(class) = CharClass::of(ch) else {
                continue;
            };

            let mut end = start + ch.len_utf8();
            while let Some(&(idx, next)) = self.chars.peek() {
                if CharClass::of(next) != Some(class) {
                    break;
                }
                end = idx + next.len_utf8();
                self.chars.next();
            }

            return Some(Token {
                text: self.text[start..end].to_ascii_lowercase(),
                start,
                end,
            });
        }
    }
}

/// Iterate over the tokens of `text` without collecting them.
///
/// An absent text behaves like the empty string.
pub fn tokens<'a>(text: impl Into<Option<&'a str>>) -> Tokens<'a> {
    let text = text.into().unwrap_or("");
    Tokens {
        text,
        chars: text.char_indices().peekable(),
    }
}

/// Split text into lowercase tokens drawn from the CJK / ASCII letter /
/// ASCII digit alphabet.
///
/// Everything outside the alphabet (punctuation, whitespace, symbols, other
/// scripts) is discarded. Empty or absent input yields an empty vector.
pub fn tokenize<'a>(text: impl Into<Option<&'a str>>) -> Vec<Token> {
    tokens(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn punctuation_and_class_changes_split_tokens() {
        let tokens = tokenize("SimHash!@#哈希123test");
        assert_eq!(texts(&tokens), vec!["simhash", "哈希", "123", "test"]);
    }

    #[test]
    fn offsets_point_into_source() {
        let input = "Ab, 中文x9";
        let tokens = tokenize(input);
        assert_eq!(texts(&tokens), vec!["ab", "中文", "x", "9"]);
        for token in &tokens {
            assert_eq!(input[token.start..token.end].to_ascii_lowercase(), token.text);
        }
        assert_eq!(tokens[1].start, 4);
        assert_eq!(tokens[1].end, 10);
    }

    #[test]
    fn empty_and_absent_inputs() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ,.!").is_empty());
        let absent: Option<&str> = None;
        assert!(tokenize(absent).is_empty());
    }

    #[test]
    fn non_alphabet_scripts_are_separators() {
        // Latin-1 letters, full-width digits and ideographs past U+9FA5.
        let tokens = tokenize("café １２ 龦 end");
        assert_eq!(texts(&tokens), vec!["caf", "end"]);
    }

    #[test]
    fn lowercases_ascii_only() {
        let tokens = tokenize("HeLLo WORLD 你好");
        assert_eq!(texts(&tokens), vec!["hello", "world", "你好"]);
    }

    #[test]
    fn iterator_is_restartable() {
        let input = "one two three";
        let first: Vec<Token> = tokens(input).collect();
        let second: Vec<Token> = tokens(input).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn char_class_boundaries() {
        assert_eq!(CharClass::of('\u{4E00}'), Some(CharClass::Cjk));
        assert_eq!(CharClass::of('\u{9FA5}'), Some(CharClass::Cjk));
        assert_eq!(CharClass::of('\u{9FA6}'), None);
        assert_eq!(CharClass::of('\u{4DFF}'), None);
        assert_eq!(CharClass::of('Z'), Some(CharClass::Letter));
        assert_eq!(CharClass::of('0'), Some(CharClass::Digit));
        assert_eq!(CharClass::of('_'), None);
    }
}
