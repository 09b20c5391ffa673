//! Numbering definitions handed to the serializer.

use super::style::{Alignment, Style};
use serde::{Deserialize, Serialize};

/// Base left indent per nesting level, in twips (0.5 inch).
pub const LEVEL_INDENT: u32 = 720;

/// Hanging indent for the marker, in twips (0.25 inch).
pub const HANGING_INDENT: u32 = 360;

/// One numbering definition per flattened list entry.
///
/// The serializer consumes these alongside the page tree; list entries point
/// back at their definition through `BulletMeta::numbering_ref`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberingDefinition {
    /// Unique reference the serializer keys the definition by
    pub reference: String,

    /// Nesting level the definition applies to
    pub level: u32,

    /// Rendered marker text, ordinal plus a trailing period
    pub text: String,

    /// Marker alignment
    pub alignment: Alignment,

    /// Base run style for the marker (list style with underline cleared)
    pub run_style: Style,

    /// Marker indentation for the level
    pub indent: ListIndent,
}

/// Indentation of a leveled list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListIndent {
    /// Left indent in twips
    pub left: u32,

    /// Hanging indent in twips
    pub hanging: u32,
}

impl ListIndent {
    /// Indentation for a nesting level.
    pub fn for_level(level: u32) -> Self {
        Self {
            left: level * LEVEL_INDENT,
            hanging: HANGING_INDENT,
        }
    }
}
