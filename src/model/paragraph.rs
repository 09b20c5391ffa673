//! Paragraph, list and run-level types.

use super::style::Style;
use serde::{Deserialize, Serialize};

/// A paragraph of runs with a hoisted block-level style.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Hoisted paragraph style (alignment, indent, heading, spacing)
    pub style: Style,

    /// Runs in document order
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single plain text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            style: Style::default(),
            runs: vec![Run::text(text)],
        }
    }

    /// Append a run.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .filter_map(|r| match r {
                Run::Text(t) => Some(t.content.as_str()),
                Run::Image(_) => None,
            })
            .collect()
    }

    /// Check whether the paragraph holds no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Check if this is a heading paragraph.
    pub fn is_heading(&self) -> bool {
        self.style.heading.is_some()
    }
}

/// The smallest styled content unit inside a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Run {
    /// A span of text
    Text(TextRun),

    /// An embedded image
    Image(ImageRun),
}

impl Run {
    /// Create a plain text run.
    pub fn text(content: impl Into<String>) -> Self {
        Run::Text(TextRun {
            content: content.into(),
            style: Style::default(),
        })
    }

    /// Create a styled text run.
    pub fn styled_text(content: impl Into<String>, style: Style) -> Self {
        Run::Text(TextRun {
            content: content.into(),
            style,
        })
    }

    /// The run's style.
    pub fn style(&self) -> &Style {
        match self {
            Run::Text(t) => &t.style,
            Run::Image(i) => &i.style,
        }
    }

    /// Check if this run is whitespace-only text.
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Run::Text(t) if t.content.trim().is_empty())
    }
}

/// A run of text with resolved formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub content: String,

    /// Resolved style from the cascade
    pub style: Style,
}

impl TextRun {
    /// Create a new text run.
    pub fn new(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }
}

/// An embedded image run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRun {
    /// Resolved style from the cascade
    pub style: Style,

    /// Raw decoded pixel payload
    #[serde(skip_serializing)]
    #[serde(default)]
    pub data: Vec<u8>,

    /// File extension for the payload format (e.g. "png")
    pub extension: String,

    /// Display width; intrinsic pixels unless overridden or derived from
    /// the declared height and the intrinsic aspect ratio
    pub width: f32,

    /// Display height, same resolution rules as `width`
    pub height: f32,
}

/// A list block.
///
/// During building a single `ListBlock` accumulates one run per list item;
/// the list normalizer then rewrites it into one flattened `ListBlock` per
/// item, each carrying its resolved ordinal in `bullet.start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBlock {
    /// Shared list style, merged with item overrides after normalization
    pub style: Style,

    /// Numbering metadata
    pub bullet: BulletMeta,

    /// One run per item before normalization; exactly one after
    pub runs: Vec<Run>,
}

/// Numbering metadata for a list block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulletMeta {
    /// Nesting level, counted via the ancestor `ul`/`ol` chain (0 = top)
    pub level: u32,

    /// Ordinal format
    pub format: ListFormat,

    /// Explicit start, or the item's resolved ordinal after normalization
    pub start: Option<u32>,

    /// Index into the document's numbering table, assigned at assembly
    pub numbering_ref: Option<usize>,
}

/// Ordinal format for a list level, recognized from `list-style(-type)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListFormat {
    /// 1, 2, 3, ...
    Decimal,
    /// I, II, III, ...
    UpperRoman,
    /// i, ii, iii, ...
    LowerRoman,
    /// A, B, ..., Z, AA, ...
    UpperAlpha,
    /// a, b, ..., z, aa, ...
    LowerAlpha,
    /// A, B, ..., Z, A, ... (cyclic, no carry)
    UpperLetter,
    /// a, b, ..., z, a, ... (cyclic, no carry)
    LowerLetter,
    /// Α, Β, ..., Ω, Α, ... (cyclic over the 24-letter Greek alphabet)
    UpperGreek,
    /// α, β, ..., ω, α, ... (cyclic)
    LowerGreek,
    /// The ○ glyph
    Circle,
    /// The • glyph
    Disc,
    /// The ▪ glyph
    Square,
    /// No marker
    None,
    /// Unordered-list default; renders as the ordinal like `Decimal`
    #[default]
    Bullet,
}

impl ListFormat {
    /// Parse a CSS `list-style-type` keyword.
    ///
    /// Unrecognized keywords fall back to [`ListFormat::Bullet`], which
    /// renders as a plain decimal ordinal.
    pub fn parse(value: &str) -> Self {
        match value {
            "decimal" => ListFormat::Decimal,
            "upper-roman" => ListFormat::UpperRoman,
            "lower-roman" => ListFormat::LowerRoman,
            "upper-alpha" => ListFormat::UpperAlpha,
            "lower-alpha" => ListFormat::LowerAlpha,
            "upper-letter" => ListFormat::UpperLetter,
            "lower-letter" => ListFormat::LowerLetter,
            "upper-greek" => ListFormat::UpperGreek,
            "lower-greek" => ListFormat::LowerGreek,
            "circle" => ListFormat::Circle,
            "disc" => ListFormat::Disc,
            "square" => ListFormat::Square,
            "none" => ListFormat::None,
            _ => ListFormat::Bullet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_run(Run::text("Hello "));
        p.add_run(Run::styled_text(
            "world",
            Style {
                bold: true,
                ..Default::default()
            },
        ));

        assert_eq!(p.plain_text(), "Hello world");
        assert!(!p.is_empty());
    }

    #[test]
    fn test_blank_text_run() {
        assert!(Run::text("  \n ").is_blank_text());
        assert!(!Run::text(" x ").is_blank_text());
    }

    #[test]
    fn test_list_format_parse() {
        assert_eq!(ListFormat::parse("upper-roman"), ListFormat::UpperRoman);
        assert_eq!(ListFormat::parse("none"), ListFormat::None);
        assert_eq!(ListFormat::parse("squiggle"), ListFormat::Bullet);
    }
}
