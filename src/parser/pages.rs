//! Page splitting at explicit break markers.

use crate::dom::{DomTree, NodeId};

/// Split the body's top-level children into page segments.
///
/// Any child whose `class` contains the marker token starts a new segment;
/// the marker node itself is excluded from all segments. A trailing
/// non-empty segment is always included even without a trailing marker, and
/// a body with no marker yields exactly one segment.
pub fn split_pages(tree: &DomTree, body: NodeId, marker_class: &str) -> Vec<Vec<NodeId>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for &child in tree.children(body) {
        if tree.has_class(child, marker_class) {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(child);
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element_names(tree: &DomTree, ids: &[NodeId]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| tree.text(tree.children(id).first().copied()?))
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_split_on_markers() {
        let tree = DomTree::parse(
            r#"<p>A</p><div class="page-break"></div><p>B</p><p>C</p>
               <div class="page-break"></div><p>D</p>"#,
        )
        .unwrap();
        let body = tree.body().unwrap();

        let segments = split_pages(&tree, body, "page-break");
        // Whitespace between elements lands in segments as text nodes; count
        // elements only.
        let element_segments: Vec<Vec<NodeId>> = segments
            .iter()
            .map(|seg| {
                seg.iter()
                    .copied()
                    .filter(|&n| tree.tag(n).is_some())
                    .collect()
            })
            .collect();

        assert_eq!(element_segments.len(), 3);
        assert_eq!(element_names(&tree, &element_segments[0]), ["A"]);
        assert_eq!(element_names(&tree, &element_segments[1]), ["B", "C"]);
        assert_eq!(element_names(&tree, &element_segments[2]), ["D"]);
    }

    #[test]
    fn test_no_marker_single_page() {
        let tree = DomTree::parse("<p>A</p><p>B</p>").unwrap();
        let body = tree.body().unwrap();

        let segments = split_pages(&tree, body, "page-break");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 2);
    }

    #[test]
    fn test_trailing_marker_excluded() {
        let tree = DomTree::parse(r#"<p>A</p><div class="page-break"></div>"#).unwrap();
        let body = tree.body().unwrap();

        let segments = split_pages(&tree, body, "page-break");
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_leading_marker_empty_first_segment() {
        let tree = DomTree::parse(r#"<div class="page-break"></div><p>A</p>"#).unwrap();
        let body = tree.body().unwrap();

        let segments = split_pages(&tree, body, "page-break");
        assert_eq!(segments.len(), 2);
        assert!(segments[0].is_empty());
    }
}
