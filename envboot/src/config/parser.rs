//! Parser for `dotted.key=value` configuration text.
//!
//! This is the text form produced by the environment aggregator and by
//! [`ConfigValue::to_config_text`](crate::config::ConfigValue::to_config_text).
//! Each non-blank line assigns one key:
//!
//! ```text
//! # comment
//! akka.remote.dot-netty.tcp.port = 4053
//! akka.remote.dot-netty.tcp.public-hostname = "node-1"
//! akka.cluster.seed-nodes = ["akka.tcp://Sys@node-1:4053", "akka.tcp://Sys@node-2:4053"]
//! ```

use std::collections::BTreeMap;

use crate::config::value::ConfigValue;
use crate::error::{Error, Result};
use crate::quoting::needs_quotes;

/// Parses configuration text into an object tree.
///
/// A nested object always survives a scalar assigned to the same path,
/// whichever line comes first; otherwise the later assignment wins.
///
/// # Errors
///
/// Returns [`Error::ConfigSyntax`] naming the 1-based line for a missing `=`,
/// an empty key segment, an unterminated string or list, or an unquoted
/// value containing reserved characters.
///
/// # Examples
///
/// ```
/// use envboot::config::{parse_config_text, ConfigValue};
///
/// let tree = parse_config_text("a.b = 1\na.c = [x, \"y z\"]\n").unwrap();
/// assert_eq!(tree.get("a.b"), Some(&ConfigValue::from("1")));
/// ```
pub fn parse_config_text(text: &str) -> Result<ConfigValue> {
    let mut root = BTreeMap::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            return Err(syntax(line_number, "expected `key=value`"));
        };

        let key = raw_key.trim();
        let segments: Vec<&str> = key.split('.').collect();
        if key.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return Err(syntax(
                line_number,
                &format!("invalid key '{key}': empty path segment"),
            ));
        }

        let value = ValueParser::new(raw_value)
            .parse()
            .map_err(|message| syntax(line_number, &message))?;

        assign(&mut root, &segments, value);
    }

    Ok(ConfigValue::Object(root))
}

/// Returns the unescaped contents of `raw` when it is exactly one
/// well-formed quoted literal, with nothing before or after it.
pub(crate) fn parse_quoted_literal(raw: &str) -> Option<String> {
    let mut parser = ValueParser::new(raw);
    if parser.peek() != Some('"') {
        return None;
    }
    let contents = parser.parse_quoted().ok()?;
    (parser.position == parser.chars.len()).then_some(contents)
}

fn syntax(line: usize, message: &str) -> Error {
    Error::ConfigSyntax {
        line,
        message: message.to_string(),
    }
}

fn assign(node: &mut BTreeMap<String, ConfigValue>, segments: &[&str], value: ConfigValue) {
    let (first, rest) = match segments {
        [] => return,
        [first, rest @ ..] => (*first, rest),
    };

    if rest.is_empty() {
        if let Some(existing) = node.get_mut(first) {
            if matches!(existing, ConfigValue::Object(_)) {
                // scalar onto an object: the deeper keys stay
                if matches!(value, ConfigValue::Object(_)) {
                    *existing = value.with_fallback(existing);
                }
                return;
            }
        }
        node.insert(first.to_string(), value);
        return;
    }

    let child = node
        .entry(first.to_string())
        .or_insert_with(ConfigValue::default);
    if !matches!(child, ConfigValue::Object(_)) {
        *child = ConfigValue::default();
    }
    if let ConfigValue::Object(map) = child {
        assign(map, rest, value);
    }
}

struct ValueParser {
    chars: Vec<char>,
    position: usize,
}

impl ValueParser {
    fn new(raw: &str) -> Self {
        Self {
            chars: raw.chars().collect(),
            position: 0,
        }
    }

    fn parse(mut self) -> std::result::Result<ConfigValue, String> {
        self.skip_whitespace();
        let value = match self.peek() {
            Some('[') => self.parse_list()?,
            Some('"') => ConfigValue::String(self.parse_quoted()?),
            Some(_) => {
                let rest: String = self.chars[self.position..].iter().collect();
                let bare = rest.split('#').next().unwrap_or_default().trim();
                self.position = self.chars.len();
                ConfigValue::String(Self::check_bare(bare)?)
            }
            None => return Err("missing value".to_string()),
        };
        self.expect_end()?;
        Ok(value)
    }

    fn parse_list(&mut self) -> std::result::Result<ConfigValue, String> {
        self.position += 1;
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.position += 1;
            return Ok(ConfigValue::List(items));
        }

        loop {
            self.skip_whitespace();
            let item = match self.peek() {
                Some('"') => self.parse_quoted()?,
                Some(',' | ']') => return Err("list must not contain an empty item".to_string()),
                Some(_) => {
                    let start = self.position;
                    while !matches!(self.peek(), None | Some(',' | ']')) {
                        self.position += 1;
                    }
                    let bare: String = self.chars[start..self.position].iter().collect();
                    Self::check_bare(bare.trim())?
                }
                None => return Err("unterminated list".to_string()),
            };
            items.push(ConfigValue::String(item));

            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.position += 1,
                Some(']') => {
                    self.position += 1;
                    return Ok(ConfigValue::List(items));
                }
                _ => return Err("unterminated list".to_string()),
            }
        }
    }

    fn parse_quoted(&mut self) -> std::result::Result<String, String> {
        self.position += 1;
        let mut out = String::new();
        loop {
            match self.peek() {
                None => return Err("unterminated quoted string".to_string()),
                Some('"') => {
                    self.position += 1;
                    return Ok(out);
                }
                Some('\\') => {
                    self.position += 1;
                    let escaped = match self.peek() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some(c @ ('"' | '\\' | '/')) => c,
                        Some(c) => return Err(format!("invalid escape sequence '\\{c}'")),
                        None => return Err("unterminated quoted string".to_string()),
                    };
                    self.position += 1;
                    out.push(escaped);
                }
                Some(c) => {
                    self.position += 1;
                    out.push(c);
                }
            }
        }
    }

    fn check_bare(bare: &str) -> std::result::Result<String, String> {
        if bare.is_empty() {
            return Err("missing value".to_string());
        }
        if needs_quotes(bare) {
            return Err(format!("value '{bare}' contains reserved characters and must be quoted"));
        }
        Ok(bare.to_string())
    }

    fn expect_end(&mut self) -> std::result::Result<(), String> {
        self.skip_whitespace();
        match self.peek() {
            None | Some('#') => Ok(()),
            Some(c) => Err(format!("unexpected '{c}' after value")),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }
}
