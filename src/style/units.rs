//! CSS length and measure converters.
//!
//! These never fail: unparsable values degrade to `None` / the automatic
//! measure / zero so a single bad declaration cannot abort a conversion.

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Length, LengthUnit, TableMeasure};

/// Split a CSS measure into its numeric value and unit suffix.
///
/// Accepts `px`, `pt`, `cm`, `in`, `mm`, `pc` and `pi`. Anything else,
/// including bare numbers, yields `None`.
pub fn split_measure(value: &str) -> Option<(f32, &str)> {
    let re = Regex::new(r"^(\d+(\.\d+)?)(px|pt|cm|in|mm|pc|pi)$").unwrap();
    let caps = re.captures(value.trim())?;
    let numeric: f32 = caps.get(1)?.as_str().parse().ok()?;
    Some((numeric, caps.get(3)?.as_str()))
}

/// Normalize a CSS measure to a point-based [`Length`].
///
/// Pixels convert to points (`1px` = `0.75pt`); the point-family units pass
/// through unchanged. Zero and unparsable values degrade to `None`.
pub fn normalize_measure(value: &str) -> Option<Length> {
    let (numeric, unit) = split_measure(value)?;
    if numeric == 0.0 {
        return None;
    }

    match unit {
        "px" => Some(Length::pt(numeric * 0.75)),
        "pt" => Some(Length::pt(numeric)),
        "in" => Some(Length {
            value: numeric,
            unit: LengthUnit::In,
        }),
        "cm" => Some(Length {
            value: numeric,
            unit: LengthUnit::Cm,
        }),
        "mm" => Some(Length {
            value: numeric,
            unit: LengthUnit::Mm,
        }),
        "pc" => Some(Length {
            value: numeric,
            unit: LengthUnit::Pc,
        }),
        "pi" => Some(Length {
            value: numeric,
            unit: LengthUnit::Pi,
        }),
        _ => None,
    }
}

/// Convert a CSS size into the serializer's discrete table measure.
///
/// Percentages keep their value as `pct`; `px` (×15) and `pt` (×20) convert
/// to twips as `dxa`; `auto`, `0`, `none` and anything unparsable degrade to
/// the automatic measure.
pub fn table_measure(value: &str) -> TableMeasure {
    let value = value.trim();

    if let Some(stripped) = value.strip_suffix('%') {
        return match stripped.parse::<f32>() {
            Ok(pct) => TableMeasure::pct(pct),
            Err(_) => TableMeasure::auto(),
        };
    }

    if value == "auto" || value == "0" || value == "none" {
        return TableMeasure::auto();
    }

    if let Some(px) = value.strip_suffix("px") {
        return match px.parse::<f32>() {
            Ok(px) => TableMeasure::dxa((px * 15.0).round()),
            Err(_) => TableMeasure::auto(),
        };
    }

    if let Some(pt) = value.strip_suffix("pt") {
        return match pt.parse::<f32>() {
            Ok(pt) => TableMeasure::dxa((pt * 20.0).round()),
            Err(_) => TableMeasure::auto(),
        };
    }

    TableMeasure::auto()
}

/// CSS box margins resolved to twips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxMargins {
    /// Top margin in twips
    pub top: u32,
    /// Right margin in twips
    pub right: u32,
    /// Bottom margin in twips
    pub bottom: u32,
    /// Left margin in twips
    pub left: u32,
}

/// Parse a CSS margin shorthand (`"15px"`, `"10px 20px"`,
/// `"5px 10px 15px"`, `"5px 10px 15px 20px"`) into twips.
///
/// Only `px` (×15) and `pt` (×20) carry a value; other units and malformed
/// parts resolve to zero.
pub fn css_margin(value: &str) -> BoxMargins {
    fn to_twips(part: &str) -> u32 {
        let parsed = if let Some(px) = part.strip_suffix("px") {
            px.parse::<f32>().ok().map(|v| v * 15.0)
        } else if let Some(pt) = part.strip_suffix("pt") {
            pt.parse::<f32>().ok().map(|v| v * 20.0)
        } else {
            None
        };
        parsed.map(|v| v.max(0.0).round() as u32).unwrap_or(0)
    }

    let parts: Vec<&str> = value.split_whitespace().collect();

    match parts.as_slice() {
        [all] => {
            let v = to_twips(all);
            BoxMargins {
                top: v,
                right: v,
                bottom: v,
                left: v,
            }
        }
        [vertical, horizontal] => {
            let v = to_twips(vertical);
            let h = to_twips(horizontal);
            BoxMargins {
                top: v,
                right: h,
                bottom: v,
                left: h,
            }
        }
        [top, horizontal, bottom] => {
            let h = to_twips(horizontal);
            BoxMargins {
                top: to_twips(top),
                right: h,
                bottom: to_twips(bottom),
                left: h,
            }
        }
        [top, right, bottom, left] => BoxMargins {
            top: to_twips(top),
            right: to_twips(right),
            bottom: to_twips(bottom),
            left: to_twips(left),
        },
        _ => BoxMargins::default(),
    }
}

/// Compute an aspect ratio rounded to two decimals.
///
/// A zero or non-finite dimension is a hard failure: it signals a data
/// contract violation rather than a tolerable formatting quirk.
pub fn aspect_ratio(width: f32, height: f32) -> Result<f32> {
    if !width.is_finite() || !height.is_finite() || height == 0.0 {
        return Err(Error::InvalidRatio { width, height });
    }

    Ok((width / height * 100.0).round() / 100.0)
}
