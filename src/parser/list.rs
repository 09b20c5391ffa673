//! List normalization and ordinal rendering.

use crate::model::{Block, BulletMeta, ListBlock, ListFormat, Run, Style};

/// Render the marker string for a list format and ordinal.
///
/// Ordinals are 1-based; roman rendering expects 1..=3999 and the caller
/// guarantees ordinal >= 1. The letter and Greek formats cycle with
/// wraparound (ordinal 27 renders like ordinal 1), unlike the alpha formats
/// which carry (27 -> "aa"). Unrecognized formats fall back to the decimal
/// rendering.
pub fn render_ordinal(format: ListFormat, ordinal: u32) -> String {
    match format {
        ListFormat::Decimal => ordinal.to_string(),
        ListFormat::UpperRoman => to_roman(ordinal, true),
        ListFormat::LowerRoman => to_roman(ordinal, false),
        ListFormat::UpperAlpha => to_alpha(ordinal, true),
        ListFormat::LowerAlpha => to_alpha(ordinal, false),
        ListFormat::UpperLetter => to_letter(ordinal, true),
        ListFormat::LowerLetter => to_letter(ordinal, false),
        ListFormat::UpperGreek => to_greek(ordinal, true),
        ListFormat::LowerGreek => to_greek(ordinal, false),
        ListFormat::Circle => "○".to_string(),
        ListFormat::Disc => "•".to_string(),
        ListFormat::Square => "▪".to_string(),
        ListFormat::None => String::new(),
        ListFormat::Bullet => ordinal.to_string(),
    }
}

/// Classical subtractive roman numerals.
fn to_roman(mut value: u32, upper: bool) -> String {
    const NUMERALS: &[(u32, &str)] = &[
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut result = String::new();
    for &(threshold, numeral) in NUMERALS {
        while value >= threshold {
            result.push_str(numeral);
            value -= threshold;
        }
    }

    if upper {
        result
    } else {
        result.to_lowercase()
    }
}

/// Bijective base-26: 1 -> a, 26 -> z, 27 -> aa.
fn to_alpha(mut value: u32, upper: bool) -> String {
    let mut letters = Vec::new();
    while value > 0 {
        value -= 1;
        letters.push((b'a' + (value % 26) as u8) as char);
        value /= 26;
    }

    let s: String = letters.iter().rev().collect();
    if upper {
        s.to_uppercase()
    } else {
        s
    }
}

/// Cyclic 26-letter sequence with wraparound, no carry.
fn to_letter(value: u32, upper: bool) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    let letter = ALPHABET[((value - 1) % 26) as usize] as char;

    if upper {
        letter.to_uppercase().to_string()
    } else {
        letter.to_string()
    }
}

/// Cyclic 24-letter Greek sequence with wraparound.
fn to_greek(value: u32, upper: bool) -> String {
    const GREEK: &[char] = &[
        'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ',
        'σ', 'τ', 'υ', 'φ', 'χ', 'ψ', 'ω',
    ];
    let letter = GREEK[((value - 1) % 24) as usize];

    if upper {
        letter.to_uppercase().to_string()
    } else {
        letter.to_string()
    }
}

/// Expand each list block into one flattened block per item.
///
/// Every accumulated run of a list block is one item. Items carry the list's
/// shared style merged with their own overrides, and `bullet.start` becomes
/// the item's resolved ordinal: counting from the explicit non-zero `start`
/// when the list declared one, from 1 otherwise. Non-list blocks pass
/// through unchanged.
pub fn normalize_lists(blocks: Vec<Block>) -> Vec<Block> {
    let mut items = Vec::with_capacity(blocks.len());

    for block in blocks {
        let Block::List(list) = block else {
            items.push(block);
            continue;
        };

        let mut ordinal = match list.bullet.start {
            Some(start) if start > 0 => start - 1,
            _ => 0,
        };

        for run in list.runs {
            let Run::Text(item) = run else {
                continue;
            };
            ordinal += 1;

            let style = item.style.merged_over(&list.style);
            items.push(Block::List(ListBlock {
                style,
                bullet: BulletMeta {
                    level: list.bullet.level,
                    format: list.bullet.format,
                    start: Some(ordinal),
                    numbering_ref: None,
                },
                runs: vec![Run::Text(crate::model::TextRun {
                    content: item.content,
                    style: Style::default(),
                })],
            }));
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextRun;

    #[test]
    fn test_roman() {
        assert_eq!(render_ordinal(ListFormat::UpperRoman, 1), "I");
        assert_eq!(render_ordinal(ListFormat::UpperRoman, 4), "IV");
        assert_eq!(render_ordinal(ListFormat::UpperRoman, 1994), "MCMXCIV");
        assert_eq!(render_ordinal(ListFormat::LowerRoman, 9), "ix");
    }

    #[test]
    fn test_alpha_carries() {
        assert_eq!(render_ordinal(ListFormat::LowerAlpha, 1), "a");
        assert_eq!(render_ordinal(ListFormat::LowerAlpha, 26), "z");
        assert_eq!(render_ordinal(ListFormat::LowerAlpha, 27), "aa");
        assert_eq!(render_ordinal(ListFormat::UpperAlpha, 28), "AB");
    }

    #[test]
    fn test_letter_and_greek_cycle() {
        assert_eq!(
            render_ordinal(ListFormat::LowerLetter, 27),
            render_ordinal(ListFormat::LowerLetter, 1)
        );
        assert_eq!(
            render_ordinal(ListFormat::LowerGreek, 25),
            render_ordinal(ListFormat::LowerGreek, 1)
        );
        assert_eq!(render_ordinal(ListFormat::UpperGreek, 1), "Α");
        assert_eq!(render_ordinal(ListFormat::LowerGreek, 24), "ω");
    }

    #[test]
    fn test_glyphs_and_fallbacks() {
        assert_eq!(render_ordinal(ListFormat::Circle, 5), "○");
        assert_eq!(render_ordinal(ListFormat::Disc, 5), "•");
        assert_eq!(render_ordinal(ListFormat::Square, 5), "▪");
        assert_eq!(render_ordinal(ListFormat::None, 5), "");
        assert_eq!(render_ordinal(ListFormat::Bullet, 5), "5");
        assert_eq!(render_ordinal(ListFormat::Decimal, 42), "42");
    }

    #[test]
    fn test_distinct_ordinals() {
        // No two distinct ordinals in 1..=100 collide for the carrying
        // formats.
        for format in [
            ListFormat::Decimal,
            ListFormat::UpperRoman,
            ListFormat::LowerRoman,
            ListFormat::UpperAlpha,
            ListFormat::LowerAlpha,
        ] {
            let mut seen = std::collections::HashSet::new();
            for ordinal in 1..=100 {
                assert!(
                    seen.insert(render_ordinal(format, ordinal)),
                    "collision in {:?} at {}",
                    format,
                    ordinal
                );
            }
        }
    }

    fn list_block(start: Option<u32>, item_texts: &[&str]) -> Block {
        Block::List(ListBlock {
            style: Style::default(),
            bullet: BulletMeta {
                level: 0,
                format: ListFormat::Decimal,
                start,
                numbering_ref: None,
            },
            runs: item_texts
                .iter()
                .map(|t| Run::Text(TextRun::new(*t, Style::default())))
                .collect(),
        })
    }

    fn ordinals(blocks: &[Block]) -> Vec<u32> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::List(l) => l.bullet.start,
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_normalize_counts_from_one() {
        let out = normalize_lists(vec![list_block(None, &["a", "b", "c"])]);
        assert_eq!(out.len(), 3);
        assert_eq!(ordinals(&out), [1, 2, 3]);
    }

    #[test]
    fn test_normalize_counts_from_explicit_start() {
        let out = normalize_lists(vec![list_block(Some(3), &["a", "b", "c"])]);
        assert_eq!(ordinals(&out), [3, 4, 5]);
    }

    #[test]
    fn test_normalize_passthrough() {
        let para = Block::Paragraph(crate::model::Paragraph::with_text("x"));
        let out = normalize_lists(vec![para]);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_paragraph());
    }

    #[test]
    fn test_item_style_overrides_list_style() {
        let list = Block::List(ListBlock {
            style: Style {
                bold: true,
                ..Default::default()
            },
            bullet: BulletMeta::default(),
            runs: vec![Run::Text(TextRun::new(
                "x",
                Style {
                    italics: true,
                    ..Default::default()
                },
            ))],
        });

        let out = normalize_lists(vec![list]);
        let Block::List(item) = &out[0] else {
            panic!("expected list item");
        };
        assert!(item.style.bold);
        assert!(item.style.italics);
    }
}
