//! Style cascade resolution.
//!
//! The effective style of a node is a pure fold from root to leaf over the
//! arena's parent back-indices: the parent's resolved style is computed
//! first, then the node's own contribution (tag-implied defaults plus parsed
//! inline declarations) is merged over it, own values winning. Every merge
//! produces a new value; nothing downstream shares mutable style state.

mod color;
mod text;
mod units;

pub use color::{color_to_hex, hsl_to_rgb, FALLBACK_COLOR};
pub use text::{apply_transform, decode_entities};
pub use units::{
    aspect_ratio, css_margin, normalize_measure, split_measure, table_measure, BoxMargins,
};

use crate::dom::{DomTree, NodeId, Tag};
use crate::model::{Alignment, CaseTransform, Dimension, Indent, Spacing, Style};

/// Resolve a node's effective style through its ancestor chain.
pub fn resolve(tree: &DomTree, id: NodeId) -> Style {
    let own = own_style(tree, id);
    match tree.parent(id) {
        Some(parent) => own.merged_over(&resolve(tree, parent)),
        None => own,
    }
}

/// A node's own contribution: tag defaults overlaid with its inline
/// declaration.
fn own_style(tree: &DomTree, id: NodeId) -> Style {
    let defaults = tree.tag(id).map(tag_defaults).unwrap_or_default();
    declared_style(tree, id).merged_over(&defaults)
}

/// Formatting implied by the tag itself.
fn tag_defaults(tag: Tag) -> Style {
    let mut style = Style::default();

    match tag {
        Tag::Strong | Tag::B => style.bold = true,
        Tag::Em | Tag::I => style.italics = true,
        Tag::U => style.underline = true,
        Tag::S => style.strike = true,
        _ => style.heading = tag.heading_level(),
    }

    style
}

/// Parse the node's raw inline `style` declaration into a [`Style`].
///
/// Only the recognized property allow-list is honored; anything else is
/// silently ignored. This is also what the table builder uses to restrict
/// row/cell styling to the node's own declaration.
pub fn declared_style(tree: &DomTree, id: NodeId) -> Style {
    let mut style = Style::default();

    let Some(declarations) = tree.inline_style(id) else {
        return style;
    };

    for item in declarations.split(';') {
        let Some((key, value)) = item.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "font-weight" => {
                if value == "bold" {
                    style.bold = true;
                }
            }
            "font-style" => {
                if value == "italic" {
                    style.italics = true;
                }
            }
            "text-decoration" => {
                if value == "underline" {
                    style.underline = true;
                }
            }
            "text-transform" => {
                style.transform = match value {
                    "uppercase" => Some(CaseTransform::Uppercase),
                    "lowercase" => Some(CaseTransform::Lowercase),
                    "capitalize" => Some(CaseTransform::Capitalize),
                    "invertcase" => Some(CaseTransform::InvertCase),
                    "uppercasesentence" => Some(CaseTransform::UppercaseSentence),
                    _ => style.transform,
                };
            }
            "font-family" => {
                style.font = Some(value.trim_matches('\'').trim_matches('"').to_string());
            }
            "font-size" => {
                style.size = normalize_measure(value);
            }
            "color" => {
                style.color = Some(color_to_hex(value));
            }
            "margin" => {
                let margins = css_margin(value);
                style.spacing = Spacing::merged(
                    Some(Spacing {
                        before: Some(margins.top),
                        after: Some(margins.bottom),
                    }),
                    style.spacing,
                );
            }
            "margin-top" => {
                let margins = css_margin(value);
                style.spacing = Spacing::merged(
                    Some(Spacing {
                        before: Some(margins.top),
                        after: None,
                    }),
                    style.spacing,
                );
            }
            "margin-bottom" => {
                let margins = css_margin(value);
                style.spacing = Spacing::merged(
                    Some(Spacing {
                        before: None,
                        after: Some(margins.bottom),
                    }),
                    style.spacing,
                );
            }
            "text-align" => {
                style.alignment = match value {
                    "left" => Some(Alignment::Left),
                    "right" => Some(Alignment::Right),
                    "center" => Some(Alignment::Center),
                    "justify" => Some(Alignment::Justified),
                    _ => style.alignment,
                };
            }
            "text-indent" => {
                style.indent = normalize_measure(value).map(|left| Indent { left });
            }
            "width" => {
                style.width = resolve_dimension(tree, id, value);
            }
            "height" => {
                style.height = resolve_dimension(tree, id, value);
            }
            _ => {}
        }
    }

    style
}

/// Resolve a declared width/height, branching on the element kind: table
/// elements convert to the serializer's discrete unit with percentage
/// support, everything else to a point-based length.
fn resolve_dimension(tree: &DomTree, id: NodeId, value: &str) -> Option<Dimension> {
    if tree.tag(id).is_some_and(|t| t.is_table_element()) {
        Some(Dimension::Table(table_measure(value)))
    } else {
        normalize_measure(value).map(Dimension::Length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Length, MeasureKind};

    fn first_text_descendant(tree: &DomTree, id: NodeId) -> NodeId {
        let mut current = id;
        while tree.text(current).is_none() {
            current = tree.children(current)[0];
        }
        current
    }

    #[test]
    fn test_bold_cascades_through_wrappers() {
        let tree = DomTree::parse("<strong><span><a>deep</a></span></strong>").unwrap();
        let body = tree.body().unwrap();
        let text = first_text_descendant(&tree, body);

        let style = resolve(&tree, text);
        assert!(style.bold);
    }

    #[test]
    fn test_own_value_wins_over_ancestor() {
        let tree = DomTree::parse(
            r#"<p style="color: red"><span style="color: blue">x</span></p>"#,
        )
        .unwrap();
        let body = tree.body().unwrap();
        let text = first_text_descendant(&tree, body);

        let style = resolve(&tree, text);
        assert_eq!(style.color.as_deref(), Some("#0000FF"));
    }

    #[test]
    fn test_heading_default() {
        let tree = DomTree::parse("<h3>title</h3>").unwrap();
        let body = tree.body().unwrap();
        let text = first_text_descendant(&tree, body);

        let style = resolve(&tree, text);
        assert_eq!(style.heading, Some(3));
    }

    #[test]
    fn test_declaration_allow_list() {
        let tree = DomTree::parse(
            r#"<p style="font-size: 12px; border: 1px solid red; font-family: 'Fira Sans'">x</p>"#,
        )
        .unwrap();
        let body = tree.body().unwrap();
        let p = tree.children(body)[0];

        let style = declared_style(&tree, p);
        assert_eq!(style.size, Some(Length::pt(9.0)));
        assert_eq!(style.font.as_deref(), Some("Fira Sans"));
    }

    #[test]
    fn test_width_branches_on_table_element() {
        let tree = DomTree::parse(
            r#"<table style="width: 50%"><tbody><tr><td>x</td></tr></tbody></table>
               <p style="width: 100px">y</p>"#,
        )
        .unwrap();
        let body = tree.body().unwrap();
        let table = tree.children(body)[0];

        let table_style = declared_style(&tree, table);
        match table_style.width {
            Some(Dimension::Table(m)) => {
                assert_eq!(m.kind, MeasureKind::Pct);
                assert_eq!(m.size, 50.0);
            }
            other => panic!("expected table measure, got {:?}", other),
        }

        let p = tree
            .children(body)
            .iter()
            .copied()
            .find(|&n| tree.tag(n) == Some(Tag::P))
            .unwrap();
        let p_style = declared_style(&tree, p);
        match p_style.width {
            Some(Dimension::Length(l)) => assert_eq!(l, Length::pt(75.0)),
            other => panic!("expected length, got {:?}", other),
        }
    }

    #[test]
    fn test_margin_spacing() {
        let tree = DomTree::parse(r#"<p style="margin: 10px 20px">x</p>"#).unwrap();
        let body = tree.body().unwrap();
        let p = tree.children(body)[0];

        let style = declared_style(&tree, p);
        assert_eq!(
            style.spacing,
            Some(Spacing {
                before: Some(150),
                after: Some(150),
            })
        );
    }
}
