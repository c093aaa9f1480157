//! Tokenizer for list-valued environment variables.
//!
//! A list variable may be written bracketed or bare, with quoted or
//! unquoted items:
//!
//! ```text
//! akka.tcp://Sys@host1:4053, akka.tcp://Sys@host2:4053
//! ["akka.tcp://Sys@host1:4053", "akka.tcp://Sys@host2:4053"]
//! ```
//!
//! The tokenizer validates the structure and rejects malformed input
//! instead of returning a partial result.

use thiserror::Error;

/// A structural error found while tokenizing a list value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (position {position})")]
pub struct ListSyntaxError {
    /// Character offset at which the error was detected.
    pub position: usize,
    /// Description of the problem.
    pub message: String,
}

impl ListSyntaxError {
    fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

/// States of the tokenizer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerState {
    /// Nothing consumed yet.
    Start,
    /// A token was just completed; expecting a comma, `]` or the end.
    EndOfString,
    /// A comma or opening bracket was just consumed; expecting a token.
    AfterComma,
    /// Inside an unquoted token.
    String,
    /// Inside a quoted token.
    Quotes,
}

/// Tokenizes a raw value into its ordered list items.
///
/// Empty or all-whitespace input yields an empty list.
///
/// # Errors
///
/// Returns a [`ListSyntaxError`] for a leading comma, an empty item, a quote
/// in the middle of a token, an unterminated quoted token, a dangling escape
/// or a misplaced bracket.
///
/// # Examples
///
/// ```
/// use envboot::list_parser::tokenize;
///
/// let tokens = tokenize(r#"[ "a", b , c ]"#).unwrap();
/// assert_eq!(tokens, vec!["a", "b", "c"]);
///
/// assert!(tokenize(",a").is_err());
/// assert!(tokenize("").unwrap().is_empty());
/// ```
pub fn tokenize(value: &str) -> Result<Vec<String>, ListSyntaxError> {
    ListTokenizer::new(value).run()
}

/// Cursor-based tokenizer over one value. Each parse owns a fresh instance.
struct ListTokenizer {
    buffer: Vec<char>,
    position: usize,
    state: TokenizerState,
    tokens: Vec<String>,
    token: String,
    closed: bool,
}

impl ListTokenizer {
    fn new(value: &str) -> Self {
        Self {
            buffer: value.chars().collect(),
            position: 0,
            state: TokenizerState::Start,
            tokens: Vec::new(),
            token: String::new(),
            closed: false,
        }
    }

    fn run(mut self) -> Result<Vec<String>, ListSyntaxError> {
        if self.buffer.iter().all(|c| c.is_whitespace()) {
            return Ok(self.tokens);
        }

        self.skip_whitespace();

        while let Some(c) = self.peek() {
            match c {
                '"' => {
                    if !matches!(
                        self.state,
                        TokenizerState::Start | TokenizerState::AfterComma
                    ) {
                        return Err(self.error("quote must not appear in the middle of a string"));
                    }
                    self.parse_quoted()?;
                }
                ',' => {
                    match self.state {
                        TokenizerState::Start => {
                            return Err(self.error("value must not start with a comma"));
                        }
                        TokenizerState::AfterComma => {
                            return Err(self.error("list must not contain an empty item"));
                        }
                        TokenizerState::EndOfString => {}
                        TokenizerState::String | TokenizerState::Quotes => {
                            return Err(self.error("unexpected comma"));
                        }
                    }
                    self.state = TokenizerState::AfterComma;
                    self.advance();
                    self.skip_whitespace();
                }
                '[' => {
                    if self.state != TokenizerState::Start {
                        return Err(self.error(
                            "opening bracket may only appear once at the start of the value",
                        ));
                    }
                    // an opening bracket behaves like a comma for what may follow
                    self.state = TokenizerState::AfterComma;
                    self.advance();
                    self.skip_whitespace();
                }
                ']' => {
                    let bracket = self.position;
                    // `[` is always followed by AfterComma, so an empty `[]` is fine,
                    // but a comma right before `]` is an empty trailing item
                    let after_comma_item = self.state == TokenizerState::AfterComma
                        && self.buffer[..bracket]
                            .iter()
                            .rev()
                            .find(|c| !c.is_whitespace())
                            == Some(&',');
                    if after_comma_item {
                        return Err(ListSyntaxError::new(
                            bracket,
                            "list must not contain an empty item",
                        ));
                    }
                    self.advance();
                    self.skip_whitespace();
                    let at_end = self.peek().is_none();
                    let closable = matches!(
                        self.state,
                        TokenizerState::AfterComma | TokenizerState::EndOfString
                    );
                    if !at_end || !closable || !self.opened_with_bracket() {
                        return Err(ListSyntaxError::new(
                            bracket,
                            "closing bracket may only appear once at the end of the value",
                        ));
                    }
                    self.closed = true;
                }
                _ => self.parse_unquoted()?,
            }
        }

        if self.state == TokenizerState::AfterComma && !self.opened_with_bracket() {
            return Err(self.error("list must not contain an empty item"));
        }
        if self.state == TokenizerState::AfterComma && self.last_significant() == Some(',') {
            return Err(self.error("list must not contain an empty item"));
        }
        if self.opened_with_bracket() && !self.closed {
            return Err(self.error("opening bracket must be matched by a closing bracket"));
        }

        Ok(self.tokens)
    }

    fn parse_unquoted(&mut self) -> Result<(), ListSyntaxError> {
        if !matches!(
            self.state,
            TokenizerState::Start | TokenizerState::AfterComma
        ) {
            return Err(self.error("invalid character"));
        }

        let start = self.position;
        self.state = TokenizerState::String;
        while self.state == TokenizerState::String {
            match self.peek() {
                None | Some(',' | ']') => self.state = TokenizerState::EndOfString,
                Some('"') => {
                    return Err(self.error("quote must not appear in the middle of a string"));
                }
                Some('[') => {
                    return Err(self.error(
                        "opening bracket may only appear once at the start of the value",
                    ));
                }
                Some('\\') => self.take_escape()?,
                Some(c) => {
                    self.advance();
                    self.token.push(c);
                }
            }
        }

        let token = self.token.trim().to_string();
        self.token.clear();
        if token.is_empty() {
            return Err(ListSyntaxError::new(
                start,
                "list must not contain an empty item",
            ));
        }
        self.tokens.push(token);
        self.skip_whitespace();
        Ok(())
    }

    fn parse_quoted(&mut self) -> Result<(), ListSyntaxError> {
        let start = self.position;
        self.advance();
        self.state = TokenizerState::Quotes;

        while self.state == TokenizerState::Quotes {
            match self.peek() {
                None => {
                    return Err(ListSyntaxError::new(
                        start,
                        "quoted string must be terminated with a quote",
                    ));
                }
                Some('"') => {
                    self.advance();
                    let token = std::mem::take(&mut self.token);
                    if token.trim().is_empty() {
                        return Err(ListSyntaxError::new(
                            start,
                            "list must not contain an empty item",
                        ));
                    }
                    self.tokens.push(token);
                    self.state = TokenizerState::EndOfString;
                }
                Some('\\') => self.take_escape()?,
                Some(c) => {
                    self.advance();
                    self.token.push(c);
                }
            }
        }

        self.skip_whitespace();
        Ok(())
    }

    /// Copies a backslash and the character it escapes into the token verbatim.
    fn take_escape(&mut self) -> Result<(), ListSyntaxError> {
        self.advance();
        let Some(escaped) = self.peek() else {
            return Err(self.error("dangling escape character"));
        };
        self.advance();
        self.token.push('\\');
        self.token.push(escaped);
        Ok(())
    }

    fn opened_with_bracket(&self) -> bool {
        self.buffer.iter().find(|c| !c.is_whitespace()) == Some(&'[')
    }

    fn last_significant(&self) -> Option<char> {
        self.buffer.iter().rev().find(|c| !c.is_whitespace()).copied()
    }

    fn peek(&self) -> Option<char> {
        self.buffer.get(self.position).copied()
    }

    fn advance(&mut self) {
        if self.position < self.buffer.len() {
            self.position += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn error(&self, message: &str) -> ListSyntaxError {
        ListSyntaxError::new(self.position, message)
    }
}
