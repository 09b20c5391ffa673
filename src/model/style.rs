//! Resolved style properties.
//!
//! A [`Style`] is the flat mapping of recognized properties produced by the
//! cascade. Merging is by value copy: a descendant's resolved style is
//! computed once and never mutated after being attached to a block or run.

use serde::{Deserialize, Serialize};

/// Resolved formatting for a block or run.
///
/// Flag properties (`bold`, `italics`, ...) are only ever switched on by the
/// cascade, so merging treats `false` as "not set". Value properties use
/// `Option`; `None` means the property was never declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italics: bool,

    /// Underlined text
    pub underline: bool,

    /// Strikethrough text
    pub strike: bool,

    /// Heading level (1-6) or None for normal content
    pub heading: Option<u8>,

    /// Font family, quotes stripped
    pub font: Option<String>,

    /// Font size as a point-based length
    pub size: Option<Length>,

    /// Text color in hex form (e.g. "#FF0000")
    pub color: Option<String>,

    /// Text alignment
    pub alignment: Option<Alignment>,

    /// Indentation
    pub indent: Option<Indent>,

    /// Spacing before/after in twips; merges key-wise
    pub spacing: Option<Spacing>,

    /// Case transform applied to text content at finalization
    pub transform: Option<CaseTransform>,

    /// Declared width; discrete table measure inside table elements,
    /// point-based length elsewhere
    pub width: Option<Dimension>,

    /// Declared height, same unit rules as `width`
    pub height: Option<Dimension>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge `self` over `base`, returning a new style.
    ///
    /// Own values win on key collision; `spacing` merges key-wise rather
    /// than wholesale. Neither input is mutated.
    pub fn merged_over(&self, base: &Style) -> Style {
        Style {
            bold: self.bold || base.bold,
            italics: self.italics || base.italics,
            underline: self.underline || base.underline,
            strike: self.strike || base.strike,
            heading: self.heading.or(base.heading),
            font: self.font.clone().or_else(|| base.font.clone()),
            size: self.size.or(base.size),
            color: self.color.clone().or_else(|| base.color.clone()),
            alignment: self.alignment.or(base.alignment),
            indent: self.indent.or(base.indent),
            spacing: Spacing::merged(self.spacing, base.spacing),
            transform: self.transform.or(base.transform),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
        }
    }

    /// Copy with the underline flag cleared.
    ///
    /// Numbering definitions carry the list's run style minus underline so
    /// the marker itself is never underlined.
    pub fn without_underline(&self) -> Style {
        Style {
            underline: false,
            ..self.clone()
        }
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justified,
    /// End alignment (used by numbering markers)
    End,
}

/// Case transform kinds recognized from `text-transform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseTransform {
    /// All characters uppercased
    Uppercase,
    /// All characters lowercased
    Lowercase,
    /// First letter of each word uppercased, rest lowercased
    Capitalize,
    /// Upper and lower case swapped per character
    InvertCase,
    /// Lowercased, then the first letter after each period uppercased
    UppercaseSentence,
}

/// A length with an explicit CSS unit.
///
/// Pixel inputs are converted to points at parse time, so a stored length is
/// always in one of the point-family units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    /// Numeric value
    pub value: f32,
    /// Unit the value is expressed in
    pub unit: LengthUnit,
}

impl Length {
    /// Create a point length.
    pub fn pt(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Pt,
        }
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// CSS length units carried by [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Points
    Pt,
    /// Inches
    In,
    /// Centimeters
    Cm,
    /// Millimeters
    Mm,
    /// Picas
    Pc,
    /// Pica variant spelling accepted by the measure grammar
    Pi,
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LengthUnit::Pt => "pt",
            LengthUnit::In => "in",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Pc => "pc",
            LengthUnit::Pi => "pi",
        };
        f.write_str(s)
    }
}

/// A discrete measure in the serializer's native units, used for table,
/// row and cell sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableMeasure {
    /// Size in the unit given by `kind` (twips for dxa, percent for pct)
    pub size: f32,
    /// Measure kind
    pub kind: MeasureKind,
}

impl TableMeasure {
    /// The automatic measure: no explicit size.
    pub fn auto() -> Self {
        Self {
            size: 0.0,
            kind: MeasureKind::Nil,
        }
    }

    /// A percentage measure.
    pub fn pct(size: f32) -> Self {
        Self {
            size,
            kind: MeasureKind::Pct,
        }
    }

    /// A twentieths-of-a-point (twip) measure.
    pub fn dxa(size: f32) -> Self {
        Self {
            size,
            kind: MeasureKind::Dxa,
        }
    }
}

/// Kind of a [`TableMeasure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureKind {
    /// No explicit size
    Nil,
    /// Percentage of the containing element
    Pct,
    /// Twentieths of a point
    Dxa,
}

/// A declared width or height.
///
/// Inside table elements the value converts to the serializer's discrete
/// unit with percentage support; elsewhere it is a point-based length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Dimension {
    /// Point-based length
    Length(Length),
    /// Discrete table measure
    Table(TableMeasure),
}

impl Dimension {
    /// The numeric value regardless of representation.
    pub fn value(&self) -> f32 {
        match self {
            Dimension::Length(l) => l.value,
            Dimension::Table(m) => m.size,
        }
    }
}

/// Indentation resolved from `text-indent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Indent {
    /// Left indent
    pub left: Length,
}

/// Spacing before/after a paragraph in twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    /// Space before, in twips
    pub before: Option<u32>,

    /// Space after, in twips
    pub after: Option<u32>,
}

impl Spacing {
    /// Merge two optional spacings key-wise, `over` winning per key.
    pub fn merged(over: Option<Spacing>, base: Option<Spacing>) -> Option<Spacing> {
        match (over, base) {
            (Some(a), Some(b)) => Some(Spacing {
                before: a.before.or(b.before),
                after: a.after.or(b.after),
            }),
            (a, b) => a.or(b),
        }
    }
}

/// Page margins in twips, passed through to the serializer untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMargins {
    /// Top margin
    pub top: u32,
    /// Bottom margin
    pub bottom: u32,
    /// Left margin
    pub left: u32,
    /// Right margin
    pub right: u32,
}

impl PageMargins {
    /// Create margins from the four sides.
    pub fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}
