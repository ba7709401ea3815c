//! Key/value tokenizer for pbxproj dictionary bodies.
//!
//! Handles the subset of the old-style property list syntax Xcode writes:
//! quoted or bare keys, quoted or bare values, `( ... )` arrays, nested
//! `{ ... }` dictionaries and `/* */` comments between tokens.

use crate::pbxproj::block::{extract_balanced_block, extract_delimited};

/// A value on the right-hand side of `key = value;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PbxValue {
    /// A quoted or bare string
    Scalar(String),
    /// Items of a `( ... )` array
    Array(Vec<String>),
    /// Raw body of a nested `{ ... }` dictionary
    Dict(String),
}

impl PbxValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PbxValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value the way Xcode flattens it into a build setting.
    pub fn to_setting_string(&self) -> String {
        match self {
            PbxValue::Scalar(s) => s.clone(),
            PbxValue::Array(items) => items.join(" "),
            PbxValue::Dict(body) => body.trim().to_string(),
        }
    }
}

/// A tokenized dictionary body, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PbxDict {
    entries: Vec<(String, PbxValue)>,
}

impl PbxDict {
    /// Tokenize a dictionary body (the text between its braces).
    ///
    /// Malformed pairs are skipped up to the next `;`.
    pub fn parse(body: &str) -> Self {
        let mut cursor = Cursor::new(body);
        let mut entries = Vec::new();

        loop {
            cursor.skip_trivia();
            if cursor.at_end() {
                break;
            }

            let start = cursor.pos;
            match cursor.pair() {
                Some(pair) => entries.push(pair),
                None => {
                    tracing::trace!(
                        "skipping malformed entry near `{}`",
                        snippet(&body[start..])
                    );
                    if !cursor.recover(start) {
                        break;
                    }
                }
            }
        }

        PbxDict { entries }
    }

    /// First value assigned to `key`.
    pub fn get(&self, key: &str) -> Option<&PbxValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Scalar value of `key`.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PbxValue::as_str)
    }

    /// Array items of `key`.
    pub fn array(&self, key: &str) -> Option<&[String]> {
        match self.get(key)? {
            PbxValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Raw body of the nested dictionary at `key`.
    pub fn dict_body(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            PbxValue::Dict(body) => Some(body),
            _ => None,
        }
    }

    pub fn entries(&self) -> &[(String, PbxValue)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(String, PbxValue)> {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn snippet(s: &str) -> &str {
    let end = s
        .char_indices()
        .nth(40)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[..end]
}

/// Byte cursor over a body. All positions it stops at are ASCII, so every
/// slice it takes lands on a char boundary.
struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn starts_with(&self, s: &str) -> bool {
        self.bytes[self.pos..].starts_with(s.as_bytes())
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) {
        loop {
            while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
                self.pos += 1;
            }
            if self.starts_with("/*") {
                match self.text[self.pos + 2..].find("*/") {
                    Some(off) => self.pos += 2 + off + 2,
                    None => self.pos = self.bytes.len(),
                }
            } else if self.starts_with("//") {
                match self.text[self.pos..].find('\n') {
                    Some(off) => self.pos += off + 1,
                    None => self.pos = self.bytes.len(),
                }
            } else {
                return;
            }
        }
    }

    /// Move past the next `;` after `from`. Returns false at end of input.
    fn recover(&mut self, from: usize) -> bool {
        match self.text[from..].find(';') {
            Some(off) => {
                self.pos = from + off + 1;
                true
            }
            None => {
                self.pos = self.bytes.len();
                false
            }
        }
    }

    fn expect(&mut self, b: u8) -> Option<()> {
        self.skip_trivia();
        if self.peek() == Some(b) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    fn pair(&mut self) -> Option<(String, PbxValue)> {
        let key = self.key()?;
        self.expect(b'=')?;
        let value = self.value(b';')?;
        self.expect(b';')?;
        Some((key, value))
    }

    fn key(&mut self) -> Option<String> {
        if self.peek() == Some(b'"') {
            return self.quoted();
        }

        let start = self.pos;
        while let Some(b) = self.peek() {
            match b {
                b'[' => {
                    // SDK condition: `KEY[sdk=iphoneos*]`
                    let off = self.text[self.pos..].find(']')?;
                    self.pos += off + 1;
                }
                b'=' | b';' | b'{' | b'(' | b'"' => break,
                b if b.is_ascii_whitespace() => break,
                _ => self.pos += 1,
            }
        }

        if self.pos == start {
            None
        } else {
            Some(self.text[start..self.pos].to_string())
        }
    }

    /// Parse a value terminated by `stop` (not consumed).
    fn value(&mut self, stop: u8) -> Option<PbxValue> {
        self.skip_trivia();
        match self.peek()? {
            b'"' => self.quoted().map(PbxValue::Scalar),
            b'{' => {
                let block = extract_balanced_block(self.text, self.pos + 1)?;
                self.pos = block.end;
                Some(PbxValue::Dict(block.content.to_string()))
            }
            b'(' => {
                let block = extract_delimited(self.text, self.pos + 1, b'(', b')')?;
                self.pos = block.end;
                Some(PbxValue::Array(split_array(block.content)))
            }
            _ => {
                let bare = self.bare(stop);
                if bare.is_empty() {
                    None
                } else {
                    Some(PbxValue::Scalar(bare))
                }
            }
        }
    }

    /// Read an unquoted run up to `stop`, dropping embedded comments.
    fn bare(&mut self, stop: u8) -> String {
        let mut out = String::new();
        let mut seg_start = self.pos;

        while let Some(b) = self.peek() {
            if b == stop {
                break;
            }
            if self.starts_with("/*") {
                out.push_str(&self.text[seg_start..self.pos]);
                match self.text[self.pos + 2..].find("*/") {
                    Some(off) => self.pos += 2 + off + 2,
                    None => self.pos = self.bytes.len(),
                }
                seg_start = self.pos;
                continue;
            }
            self.pos += 1;
        }
        out.push_str(&self.text[seg_start..self.pos]);
        out.trim().to_string()
    }

    /// Read a double-quoted string starting at the opening quote.
    fn quoted(&mut self) -> Option<String> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        let start = self.pos + 1;
        let mut i = start;
        while i < self.bytes.len() {
            match self.bytes[i] {
                b'\\' => i += 2,
                b'"' => {
                    self.pos = i + 1;
                    return Some(unescape(&self.text[start..i]));
                }
                _ => i += 1,
            }
        }
        None
    }
}

/// Split the body of a `( ... )` array into items.
fn split_array(body: &str) -> Vec<String> {
    let mut cursor = Cursor::new(body);
    let mut items = Vec::new();

    loop {
        cursor.skip_trivia();
        if cursor.at_end() {
            break;
        }
        if cursor.peek() == Some(b',') {
            cursor.pos += 1;
            continue;
        }

        match cursor.value(b',') {
            Some(value) => items.push(value.to_setting_string()),
            None => {
                // Unterminated quote or block: nothing sensible remains.
                break;
            }
        }
    }

    items
}

/// Undo the escapes Xcode writes inside quoted strings.
fn unescape(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
