//! Text content finalization: case transforms and entity decoding.

use crate::model::CaseTransform;

/// Apply a case transform to run content.
///
/// Transforms run as the final normalization step, after trimming.
pub fn apply_transform(content: &str, transform: CaseTransform) -> String {
    match transform {
        CaseTransform::Uppercase => content.to_uppercase(),
        CaseTransform::Lowercase => content.to_lowercase(),
        CaseTransform::Capitalize => capitalize(content),
        CaseTransform::InvertCase => invert_case(content),
        CaseTransform::UppercaseSentence => uppercase_sentence(content),
    }
}

/// Lowercase the input, then uppercase the first letter of each word.
///
/// A word starts at the beginning of the string or after whitespace or one
/// of the opening characters `" ' ( [ {`.
fn capitalize(content: &str) -> String {
    let lowered = content.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut at_boundary = true;

    for c in lowered.chars() {
        let is_boundary = c.is_whitespace() || matches!(c, '"' | '\'' | '(' | '[' | '{');
        if at_boundary && !is_boundary {
            out.extend(c.to_uppercase());
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = is_boundary;
        }
    }

    out
}

/// Swap upper and lower case per character.
fn invert_case(content: &str) -> String {
    content
        .chars()
        .flat_map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

/// Lowercase the input, then uppercase the first letter after each period.
fn uppercase_sentence(content: &str) -> String {
    content
        .to_lowercase()
        .split('.')
        .map(|sentence| {
            match sentence.char_indices().find(|(_, c)| c.is_ascii_alphabetic()) {
                Some((idx, c)) => {
                    let mut fixed = String::with_capacity(sentence.len());
                    fixed.push_str(&sentence[..idx]);
                    fixed.extend(c.to_uppercase());
                    fixed.push_str(&sentence[idx + c.len_utf8()..]);
                    fixed
                }
                None => sentence.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Decode HTML entities that survive DOM parsing.
///
/// The DOM provider decodes standard entities while tokenizing, so this
/// catches what remains in run content, mainly double-encoded text such as
/// `&amp;amp;`. Unknown or malformed entities are kept literal.
pub fn decode_entities(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut it = content.chars().peekable();

    while let Some(ch) = it.next() {
        if ch != '&' {
            out.push(ch);
            continue;
        }

        // Collect up to ';', bounded to keep this predictable on malformed
        // input.
        let mut entity = String::new();
        let mut terminated = false;
        while let Some(&c) = it.peek() {
            it.next();
            if c == ';' {
                terminated = true;
                break;
            }
            entity.push(c);
            if entity.len() > 64 {
                break;
            }
        }

        let decoded: Option<char> = match entity.as_str() {
            "nbsp" => Some('\u{a0}'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "amp" => Some('&'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => None,
        };

        if let Some(c) = decoded.filter(|_| terminated) {
            out.push(c);
            continue;
        }

        if terminated {
            let numeric = if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok()
            } else {
                None
            };

            if let Some(c) = numeric.and_then(char::from_u32) {
                out.push(c);
                continue;
            }
        }

        out.push('&');
        out.push_str(&entity);
        if terminated {
            out.push(';');
        }
    }

    out
}
