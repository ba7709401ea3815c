//! Object record scanning.
//!
//! A pbxproj file is a flat graph of records shaped like
//! `<24-hex-id> /* label */ = { isa = Kind; ... };`. Headers are located
//! with a pattern; bodies are always cut with the balanced block scanner.

use std::sync::LazyLock;

use regex::Regex;

use crate::pbxproj::block::extract_balanced_block;
use crate::pbxproj::dict::PbxDict;

static OBJECT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9A-Fa-f]{24})[ \t]*(?:/\*[ \t]*(.*?)[ \t]*\*/)?\s*=\s*\{").unwrap()
});

/// One `<id> = { ... }` record.
#[derive(Debug, Clone)]
pub struct PbxObject<'a> {
    pub id: &'a str,
    /// The `/* label */` after the id, trimmed
    pub comment: Option<&'a str>,
    /// Tokenized body
    pub dict: PbxDict,
}

impl PbxObject<'_> {
    /// The object's `isa` kind.
    pub fn isa(&self) -> Option<&str> {
        self.dict.str("isa")
    }
}

/// Iterate over every object record in source order.
///
/// Records whose body never closes are skipped; scanning resumes right
/// after their header.
pub fn objects(text: &str) -> Objects<'_> {
    Objects { text, pos: 0 }
}

/// Iterate over the records of one `isa` kind.
pub fn objects_of_kind<'a>(text: &'a str, isa: &'a str) -> impl Iterator<Item = PbxObject<'a>> {
    objects(text).filter(move |obj| obj.isa() == Some(isa))
}

pub struct Objects<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Objects<'a> {
    type Item = PbxObject<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let caps = OBJECT_HEADER.captures_at(self.text, self.pos)?;
            let header = caps.get(0)?;
            let id = caps.get(1)?.as_str();
            let comment = caps
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|s| !s.is_empty());

            match extract_balanced_block(self.text, header.end()) {
                Some(block) => {
                    self.pos = block.end;
                    return Some(PbxObject {
                        id,
                        comment,
                        dict: PbxDict::parse(block.content),
                    });
                }
                None => {
                    tracing::debug!("object {} has an unbalanced body, skipping", id);
                    self.pos = header.end();
                }
            }
        }
        None
    }
}

/// Normalise a 24-hex-char object reference.
pub fn object_id(s: &str) -> Option<String> {
    let s = s.trim();
    if s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(s.to_string())
    } else {
        None
    }
}
