//! Block and run building.
//!
//! A single top-to-bottom traversal per page turns DOM children into a flat
//! block sequence. The traversal carries one piece of state: the currently
//! open paragraph (or list) accumulator. Inline elements recurse into it,
//! block-level elements close it first.

use crate::dom::{DomTree, NodeId, Tag};
use crate::error::Result;
use crate::model::{
    Block, BulletMeta, ImageRun, ListBlock, ListFormat, Paragraph, Run, Style, TextRun,
};
use crate::style::{apply_transform, decode_entities, declared_style, resolve};

use super::image::decode_data_uri;
use super::table::build_table;

/// The accumulator carried across the traversal.
enum OpenBlock {
    Paragraph { runs: Vec<Run> },
    List { bullet: BulletMeta, runs: Vec<Run> },
}

/// Build the block sequence for a page root or a table cell.
///
/// Invoked once per page and recursively per cell; the two traversals are
/// identical, which is what lets tables nest arbitrarily deep.
pub fn build_blocks(tree: &DomTree, children: &[NodeId]) -> Result<Vec<Block>> {
    let mut sheet = Vec::new();
    let mut open: Option<OpenBlock> = None;

    for &child in children {
        process_node(tree, child, &mut sheet, &mut open)?;
    }

    flush(&mut sheet, &mut open);

    // Blocks that normalized to nothing are discarded; only explicit breaks
    // survive empty.
    sheet.retain(|block| match block {
        Block::Break => true,
        Block::Paragraph(p) => !p.runs.is_empty(),
        Block::List(l) => !l.runs.is_empty(),
        Block::Table(t) => !t.rows.is_empty(),
    });

    Ok(sheet)
}

fn process_node(
    tree: &DomTree,
    id: NodeId,
    sheet: &mut Vec<Block>,
    open: &mut Option<OpenBlock>,
) -> Result<()> {
    if let Some(content) = tree.text(id) {
        let style = resolve(tree, id);
        push_run(open, Run::Text(TextRun::new(content, style)));
        return Ok(());
    }

    let Some(tag) = tree.tag(id) else {
        return Ok(());
    };

    match tag {
        Tag::Br => {
            flush(sheet, open);

            // Consecutive forced breaks model blank paragraphs: a br whose
            // previous element sibling is itself br, table or p emits one.
            let prev = tree.prev_element_sibling(id).and_then(|p| tree.tag(p));
            if matches!(prev, Some(Tag::Br | Tag::Table | Tag::P)) {
                sheet.push(Block::Break);
            }
        }

        Tag::Img => {
            if let Some(run) = build_image_run(tree, id)? {
                push_run(open, run);
            }
        }

        Tag::Ul | Tag::Ol => {
            flush(sheet, open);
            *open = Some(OpenBlock::List {
                bullet: BulletMeta {
                    level: list_level(tree, id),
                    format: list_format(tree, id, tag),
                    start: tree.attr(id, "start").and_then(|s| s.trim().parse().ok()),
                    numbering_ref: None,
                },
                runs: Vec::new(),
            });

            for &child in tree.children(id) {
                process_node(tree, child, sheet, open)?;
            }
        }

        Tag::P | Tag::H1 | Tag::H2 | Tag::H3 | Tag::H4 | Tag::H5 | Tag::H6 => {
            flush(sheet, open);

            for &child in tree.children(id) {
                process_node(tree, child, sheet, open)?;
            }
        }

        Tag::Table => {
            flush(sheet, open);
            sheet.push(Block::Table(build_table(tree, id)?));
        }

        // Inline formatting, anchors, list items and any unsupported tag
        // recurse into children without creating a new block boundary.
        _ => {
            for &child in tree.children(id) {
                process_node(tree, child, sheet, open)?;
            }
        }
    }

    Ok(())
}

/// Decode an `img` element into an image run.
///
/// An unsupported or undecodable image produces no run at all, rather than
/// a placeholder. When only one of width/height is declared, the other is
/// derived from the intrinsic aspect ratio.
fn build_image_run(tree: &DomTree, id: NodeId) -> Result<Option<Run>> {
    let Some(src) = tree.attr(id, "src") else {
        return Ok(None);
    };
    let Some(image) = decode_data_uri(src)? else {
        return Ok(None);
    };

    let declared = declared_style(tree, id);
    let mut width = image.width as f32;
    let mut height = image.height as f32;

    match (
        declared.width.map(|d| d.value()),
        declared.height.map(|d| d.value()),
    ) {
        (Some(w), None) => {
            width = w;
            height = w / image.ratio;
        }
        (None, Some(h)) => {
            height = h;
            width = h * image.ratio;
        }
        (Some(w), Some(h)) => {
            width = w;
            height = h;
        }
        (None, None) => {}
    }

    Ok(Some(Run::Image(ImageRun {
        style: resolve(tree, id),
        data: image.data,
        extension: image.extension,
        width,
        height,
    })))
}

fn push_run(open: &mut Option<OpenBlock>, run: Run) {
    match open {
        Some(OpenBlock::Paragraph { runs }) | Some(OpenBlock::List { runs, .. }) => {
            runs.push(run);
        }
        None => {
            *open = Some(OpenBlock::Paragraph { runs: vec![run] });
        }
    }
}

/// Close the open accumulator, normalize it and append it to the sheet.
fn flush(sheet: &mut Vec<Block>, open: &mut Option<OpenBlock>) {
    match open.take() {
        None => {}
        Some(OpenBlock::Paragraph { runs }) => {
            let (style, runs) = normalize_runs(runs, false);
            sheet.push(Block::Paragraph(Paragraph { style, runs }));
        }
        Some(OpenBlock::List { bullet, runs }) => {
            let (style, runs) = normalize_runs(runs, true);
            sheet.push(Block::List(ListBlock {
                style,
                bullet,
                runs,
            }));
        }
    }
}

/// Normalize a finished block's runs.
///
/// Order matters: whitespace-only boundary runs are dropped, adjacent text
/// runs with the same resolved style collapse into one, boundary edges are
/// trimmed (interior runs keep their internal whitespace) with surviving
/// entities decoded, then the paragraph-level style is hoisted from the
/// union of run styles, and case transforms run last, on the trimmed
/// content. List blocks drop blank runs anywhere and trim every item fully.
fn normalize_runs(runs: Vec<Run>, is_list: bool) -> (Style, Vec<Run>) {
    let mut kept: Vec<Run> = Vec::with_capacity(runs.len());
    let mut found_content = false;

    for run in runs {
        if run.is_blank_text() && (is_list || !found_content) {
            continue;
        }
        found_content = true;

        if is_list {
            if let Run::Text(mut item) = run {
                item.content = item.content.trim().to_string();
                kept.push(Run::Text(item));
            } else {
                kept.push(run);
            }
        } else {
            kept.push(run);
        }
    }

    while matches!(kept.last(), Some(run) if run.is_blank_text()) {
        kept.pop();
    }

    // Adjacent text runs in the same formatting context collapse into one.
    // Not for lists: there every run is a separate item, styles alike or
    // not.
    if !is_list {
        let mut merged: Vec<Run> = Vec::with_capacity(kept.len());
        for run in kept {
            if let Run::Text(next) = &run {
                if let Some(Run::Text(prev)) = merged.last_mut() {
                    if prev.style == next.style {
                        prev.content.push_str(&next.content);
                        continue;
                    }
                }
            }
            merged.push(run);
        }
        kept = merged;
    }

    let len = kept.len();
    for (index, run) in kept.iter_mut().enumerate() {
        let Run::Text(text) = run else {
            continue;
        };

        let trimmed = if len == 1 {
            text.content.trim()
        } else if index == 0 {
            text.content.trim_start()
        } else if index + 1 == len {
            text.content.trim_end()
        } else {
            text.content.as_str()
        };
        text.content = decode_entities(trimmed);
    }

    // Hoist the unified paragraph style so e.g. an alignment declared on an
    // inner span affects the whole paragraph.
    let mut union = Style::default();
    for run in &kept {
        union = run.style().merged_over(&union);
    }
    let style = Style {
        alignment: union.alignment,
        indent: union.indent,
        heading: union.heading,
        spacing: union.spacing,
        ..Default::default()
    };

    for run in &mut kept {
        if let Run::Text(text) = run {
            if let Some(transform) = text.style.transform {
                text.content = apply_transform(&text.content, transform);
            }
        }
    }

    (style, kept)
}

/// Nesting depth of a list element, counted via the ancestor `ul`/`ol`
/// chain.
fn list_level(tree: &DomTree, id: NodeId) -> u32 {
    let mut level = 0;
    let mut current = tree.parent(id);

    while let Some(ancestor) = current {
        if tree.tag(ancestor).is_some_and(|t| t.is_list_container()) {
            level += 1;
        }
        current = tree.parent(ancestor);
    }

    level
}

/// Ordinal format from the list's `list-style(-type)` declaration, falling
/// back to the tag default: decimal for `ol`, bullet for `ul`.
fn list_format(tree: &DomTree, id: NodeId, tag: Tag) -> ListFormat {
    if let Some(declarations) = tree.inline_style(id) {
        for item in declarations.split(';') {
            if let Some((key, value)) = item.split_once(':') {
                if matches!(key.trim(), "list-style-type" | "list-style") {
                    return ListFormat::parse(value.trim());
                }
            }
        }
    }

    if tag == Tag::Ol {
        ListFormat::Decimal
    } else {
        ListFormat::Bullet
    }
}
