//! Quote-aware balanced block extraction.
//!
//! Build-setting values legitimately contain braces inside quoted strings
//! (`"${PRODUCT_NAME:rfc1034identifier}"`), so blocks are matched with a
//! cursor-based scanner rather than a pattern. Every structural parser in
//! this crate goes through [`extract_delimited`].

/// A block body and the index just past its closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Text between the delimiters, exclusive
    pub content: &'a str,
    /// Byte index just past the closing delimiter
    pub end: usize,
}

/// Extract a `{ ... }` block.
///
/// `cursor` must point immediately after the opening brace. Returns `None`
/// if the input ends before the block is balanced.
pub fn extract_balanced_block(text: &str, cursor: usize) -> Option<Block<'_>> {
    extract_delimited(text, cursor, b'{', b'}')
}

/// Extract a block delimited by `open`/`close` (both ASCII).
///
/// Double-quoted strings and `/* */` comments are opaque: delimiters inside
/// them never change depth, and `\"` does not terminate a string.
pub fn extract_delimited(text: &str, cursor: usize, open: u8, close: u8) -> Option<Block<'_>> {
    let bytes = text.as_bytes();
    if cursor > bytes.len() || !text.is_char_boundary(cursor) {
        return None;
    }

    let mut depth = 1usize;
    let mut in_string = false;
    let mut i = cursor;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            match b {
                b'\\' => i += 1,
                b'"' => in_string = false,
                _ => {}
            }
        } else if b == b'"' {
            in_string = true;
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
            let close_at = text[i + 2..].find("*/")?;
            i += 2 + close_at + 2;
            continue;
        } else if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Some(Block {
                    content: &text[cursor..i],
                    end: i + 1,
                });
            }
        }
        i += 1;
    }

    None
}
