//! Parser for the wire-level naming grammar.
//!
//! Components are separated by unescaped `,` or `;`, pairs within a
//! multi-valued component by unescaped `+`, and key from value by the
//! first unescaped `=`. A backslash escapes the following character.
//! Unescaped spaces around separators and at value edges are trimmed.

use crate::error::{NameError, NameResult};
use crate::rdn::{Rdn, RdnComponent};

/// A scanned character with its escape flag.
type Raw = (char, bool);

/// Parse name text into components, returned root-first.
///
/// Blank input parses to the empty name; an empty component anywhere else
/// (doubled or trailing separators) is malformed.
pub(crate) fn parse_name(text: &str) -> NameResult<Vec<Rdn>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut rdns: Vec<Rdn> = Vec::new();
    let mut pairs: Vec<RdnComponent> = Vec::new();
    let mut key: Option<String> = None;
    let mut buf: Vec<Raw> = Vec::new();

    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => buf.push((escaped, true)),
                None => return Err(NameError::malformed("unbalanced escape at end of name")),
            },
            '=' if key.is_none() => {
                let k = collapse(&buf);
                if k.is_empty() {
                    return Err(NameError::malformed("empty attribute key"));
                }
                key = Some(k);
                buf.clear();
            }
            '=' => return Err(NameError::malformed("unescaped '=' in attribute value")),
            '+' => finish_pair(&mut key, &mut buf, &mut pairs)?,
            ',' | ';' => {
                finish_pair(&mut key, &mut buf, &mut pairs)?;
                rdns.push(Rdn::from_components(std::mem::take(&mut pairs)));
            }
            other => buf.push((other, false)),
        }
    }
    finish_pair(&mut key, &mut buf, &mut pairs)?;
    rdns.push(Rdn::from_components(pairs));

    // Wire order is leaf-first; the model stores root-first.
    rdns.reverse();
    Ok(rdns)
}

fn finish_pair(
    key: &mut Option<String>,
    buf: &mut Vec<Raw>,
    pairs: &mut Vec<RdnComponent>,
) -> NameResult<()> {
    match key.take() {
        Some(k) => {
            let value = collapse(buf);
            buf.clear();
            pairs.push(RdnComponent::new(k, value));
            Ok(())
        }
        None if buf.iter().all(|(c, escaped)| *c == ' ' && !escaped) => {
            Err(NameError::malformed("empty name component"))
        }
        None => Err(NameError::malformed("name component without '='")),
    }
}

/// Drop unescaped edge spaces and collect the remaining characters.
fn collapse(raw: &[Raw]) -> String {
    let start = raw
        .iter()
        .take_while(|(c, escaped)| *c == ' ' && !escaped)
        .count();
    let trailing = raw[start..]
        .iter()
        .rev()
        .take_while(|(c, escaped)| *c == ' ' && !escaped)
        .count();
    raw[start..raw.len() - trailing]
        .iter()
        .map(|(c, _)| *c)
        .collect()
}
