/// Story templates — lines of literal words and `<key>` placeholders.

use serde::{Deserialize, Serialize};

/// One space-separated token of a template line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Literal text, emitted as-is.
    Literal(String),
    /// `<key>`: replaced by a word from the pool named `key`.
    /// `raw` is the token as written, brackets included.
    Placeholder { key: String, raw: String },
}

impl Token {
    /// Classify a single token.
    ///
    /// Anything starting with `<` and ending with `>` is a placeholder,
    /// including `<>` (empty key).
    pub fn parse(word: &str) -> Token {
        match word
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Some(key) => Token::Placeholder {
                key: key.to_string(),
                raw: word.to_string(),
            },
            None => Token::Literal(word.to_string()),
        }
    }

    /// The token exactly as it appeared in the template.
    pub fn as_written(&self) -> &str {
        match self {
            Token::Literal(text) => text,
            Token::Placeholder { raw, .. } => raw,
        }
    }
}

/// A template line. An empty line has no tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Line {
    pub tokens: Vec<Token>,
}

/// A parsed story template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Template {
    pub lines: Vec<Line>,
}

impl Template {
    /// Parse template text into lines of tokens.
    ///
    /// Lines end at `\n` (a trailing `\r` is dropped). Tokens are split on
    /// single spaces and runs of spaces collapse, so no token is empty.
    /// Parsing cannot fail: malformed placeholders are just literal text.
    pub fn parse(input: &str) -> Template {
        let lines = input
            .lines()
            .map(|line| Line {
                tokens: line
                    .split(' ')
                    .filter(|word| !word.is_empty())
                    .map(Token::parse)
                    .collect(),
            })
            .collect();
        Template { lines }
    }

    /// Iterate over every placeholder with its 1-based line number.
    pub fn placeholders(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().enumerate().flat_map(|(i, line)| {
            line.tokens.iter().filter_map(move |token| match token {
                Token::Placeholder { key, .. } => Some((i + 1, key.as_str())),
                Token::Literal(_) => None,
            })
        })
    }
}
