//! DOM arena built from the html5ever parse tree.
//!
//! The rcdom tree is `Rc`-based and cannot cross threads, so the parsed
//! document is flattened once into an immutable `Vec`-backed arena with
//! parent back-indices. The cascade and the builders only ever read from it.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::{Error, Result};

/// Index of a node in the arena.
pub type NodeId = usize;

/// The closed set of element tags the conversion dispatches on.
///
/// The tag set is finite and known at design time; everything else maps to
/// [`Tag::Other`] and is traversed without special behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `<html>`
    Html,
    /// `<head>`
    Head,
    /// `<body>`
    Body,
    /// `<p>`
    P,
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
    /// `<strong>`
    Strong,
    /// `<b>`
    B,
    /// `<em>`
    Em,
    /// `<i>`
    I,
    /// `<u>`
    U,
    /// `<s>`
    S,
    /// `<a>`
    A,
    /// `<span>`
    Span,
    /// `<br>`
    Br,
    /// `<img>`
    Img,
    /// `<ul>`
    Ul,
    /// `<ol>`
    Ol,
    /// `<li>`
    Li,
    /// `<table>`
    Table,
    /// `<thead>`
    Thead,
    /// `<tbody>`
    Tbody,
    /// `<tfoot>`
    Tfoot,
    /// `<tr>`
    Tr,
    /// `<td>`
    Td,
    /// `<th>`
    Th,
    /// Any tag outside the dispatch set
    Other,
}

impl Tag {
    /// Map a lowercase tag name to its variant.
    pub fn from_name(name: &str) -> Self {
        match name {
            "html" => Tag::Html,
            "head" => Tag::Head,
            "body" => Tag::Body,
            "p" => Tag::P,
            "h1" => Tag::H1,
            "h2" => Tag::H2,
            "h3" => Tag::H3,
            "h4" => Tag::H4,
            "h5" => Tag::H5,
            "h6" => Tag::H6,
            "strong" => Tag::Strong,
            "b" => Tag::B,
            "em" => Tag::Em,
            "i" => Tag::I,
            "u" => Tag::U,
            "s" => Tag::S,
            "a" => Tag::A,
            "span" => Tag::Span,
            "br" => Tag::Br,
            "img" => Tag::Img,
            "ul" => Tag::Ul,
            "ol" => Tag::Ol,
            "li" => Tag::Li,
            "table" => Tag::Table,
            "thead" => Tag::Thead,
            "tbody" => Tag::Tbody,
            "tfoot" => Tag::Tfoot,
            "tr" => Tag::Tr,
            "td" => Tag::Td,
            "th" => Tag::Th,
            _ => Tag::Other,
        }
    }

    /// Heading level for `h1`..`h6`, or None.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Tag::H1 => Some(1),
            Tag::H2 => Some(2),
            Tag::H3 => Some(3),
            Tag::H4 => Some(4),
            Tag::H5 => Some(5),
            Tag::H6 => Some(6),
            _ => None,
        }
    }

    /// True for `h1`..`h6`.
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// True for `ul` and `ol`.
    pub fn is_list_container(&self) -> bool {
        matches!(self, Tag::Ul | Tag::Ol)
    }

    /// True for the table-family elements whose `width`/`height` resolve to
    /// the serializer's discrete unit.
    pub fn is_table_element(&self) -> bool {
        matches!(self, Tag::Table | Tag::Tr | Tag::Td | Tag::Th)
    }
}

/// Node payload in the arena.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The synthetic document root
    Document,

    /// An element with its tag and attributes
    Element {
        /// Dispatch tag
        tag: Tag,
        /// Lowercased attribute name/value pairs in source order
        attrs: Vec<(String, String)>,
    },

    /// A text node; entities are already decoded by the DOM provider
    Text(String),
}

/// A node in the arena.
#[derive(Debug, Clone)]
pub struct DomNode {
    /// Payload
    pub kind: NodeKind,

    /// Parent back-index; None only for the root
    pub parent: Option<NodeId>,

    /// Child indices in document order
    pub children: Vec<NodeId>,
}

/// An immutable, `Send + Sync` flattening of the parsed document.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<DomNode>,
}

impl DomTree {
    /// Parse HTML into an arena.
    pub fn parse(html: &str) -> Result<Self> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|e| Error::Dom(e.to_string()))?;

        let mut tree = Self {
            nodes: vec![DomNode {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        };
        tree.flatten(&dom.document, 0);
        Ok(tree)
    }

    fn flatten(&mut self, handle: &Handle, parent: NodeId) {
        for child in handle.children.borrow().iter() {
            match &child.data {
                NodeData::Element { name, attrs, .. } => {
                    let tag = Tag::from_name(name.local.as_ref());
                    let attrs = attrs
                        .borrow()
                        .iter()
                        .map(|a| (a.name.local.as_ref().to_string(), a.value.to_string()))
                        .collect();
                    let id = self.push(
                        NodeKind::Element { tag, attrs },
                        parent,
                    );
                    self.flatten(child, id);
                }
                NodeData::Text { contents } => {
                    self.push(NodeKind::Text(contents.borrow().to_string()), parent);
                }
                // Comments, doctypes and processing instructions carry no
                // renderable content.
                _ => {}
            }
        }
    }

    fn push(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(DomNode {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// The node at `id`.
    pub fn node(&self, id: NodeId) -> &DomNode {
        &self.nodes[id]
    }

    /// Child indices of `id` in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Parent back-index of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Element tag of `id`, or None for text and the root.
    pub fn tag(&self, id: NodeId) -> Option<Tag> {
        match &self.nodes[id].kind {
            NodeKind::Element { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    /// Text content when `id` is a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id].kind {
            NodeKind::Text(content) => Some(content),
            _ => None,
        }
    }

    /// Attribute value by lowercase name.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id].kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// The raw inline `style` declaration string, if any.
    pub fn inline_style(&self, id: NodeId) -> Option<&str> {
        self.attr(id, "style")
    }

    /// Whether the node's `class` attribute contains the given token.
    pub fn has_class(&self, id: NodeId, token: &str) -> bool {
        self.attr(id, "class")
            .map(|classes| classes.split_whitespace().any(|c| c == token))
            .unwrap_or(false)
    }

    /// The nearest preceding sibling that is an element.
    pub fn prev_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes[id].parent?;
        let siblings = &self.nodes[parent].children;
        let pos = siblings.iter().position(|&s| s == id)?;
        siblings[..pos]
            .iter()
            .rev()
            .copied()
            .find(|&s| matches!(self.nodes[s].kind, NodeKind::Element { .. }))
    }

    /// The `<body>` element html5ever guarantees for any document.
    pub fn body(&self) -> Option<NodeId> {
        self.find_tag(0, Tag::Body)
    }

    fn find_tag(&self, from: NodeId, wanted: Tag) -> Option<NodeId> {
        for &child in &self.nodes[from].children {
            if self.tag(child) == Some(wanted) {
                return Some(child);
            }
            if let Some(found) = self.find_tag(child, wanted) {
                return Some(found);
            }
        }
        None
    }

    /// Total number of nodes, including the synthetic root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the arena holds only the synthetic root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_body() {
        let tree = DomTree::parse("<p>hello</p>").unwrap();
        let body = tree.body().expect("body");
        assert_eq!(tree.tag(body), Some(Tag::Body));

        let children = tree.children(body);
        assert_eq!(children.len(), 1);
        assert_eq!(tree.tag(children[0]), Some(Tag::P));
        assert_eq!(tree.text(tree.children(children[0])[0]), Some("hello"));
    }

    #[test]
    fn test_parent_chain() {
        let tree = DomTree::parse("<p><strong><span>x</span></strong></p>").unwrap();
        let body = tree.body().unwrap();
        let p = tree.children(body)[0];
        let strong = tree.children(p)[0];
        let span = tree.children(strong)[0];
        let text = tree.children(span)[0];

        assert_eq!(tree.parent(text), Some(span));
        assert_eq!(tree.parent(span), Some(strong));
        assert_eq!(tree.parent(strong), Some(p));
    }

    #[test]
    fn test_attrs_and_classes() {
        let tree =
            DomTree::parse(r#"<div class="page-break extra" style="color: red">x</div>"#).unwrap();
        let body = tree.body().unwrap();
        let div = tree.children(body)[0];

        assert_eq!(tree.tag(div), Some(Tag::Other));
        assert!(tree.has_class(div, "page-break"));
        assert!(tree.has_class(div, "extra"));
        assert!(!tree.has_class(div, "page"));
        assert_eq!(tree.inline_style(div), Some("color: red"));
    }

    #[test]
    fn test_prev_element_sibling_skips_text() {
        let tree = DomTree::parse("<p>a</p> text <br>").unwrap();
        let body = tree.body().unwrap();
        let children = tree.children(body);
        let br = *children.last().unwrap();

        let prev = tree.prev_element_sibling(br).unwrap();
        assert_eq!(tree.tag(prev), Some(Tag::P));
    }

    #[test]
    fn test_implicit_tbody() {
        let tree = DomTree::parse("<table><tr><td>x</td></tr></table>").unwrap();
        let body = tree.body().unwrap();
        let table = tree.children(body)[0];
        let tbody = tree.children(table)[0];
        assert_eq!(tree.tag(tbody), Some(Tag::Tbody));
    }

    #[test]
    fn test_entities_decoded_by_provider() {
        let tree = DomTree::parse("<p>a &amp; b</p>").unwrap();
        let body = tree.body().unwrap();
        let p = tree.children(body)[0];
        assert_eq!(tree.text(tree.children(p)[0]), Some("a & b"));
    }
}
