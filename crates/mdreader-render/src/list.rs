//! List grouping and rendering.
//!
//! The parser emits one [`Block::ListItem`] per line. Before serialization,
//! each maximal run of items of the same kind folds into a single
//! [`Block::List`], so `- a` / `- b` renders as one `<ul>`.

use log::trace;
use mdreader_core::ListKind;
use mdreader_parser::Block;

/// Fold consecutive list items of equal kind into [`Block::List`] blocks.
///
/// A change of kind or any other block, blank lines included, ends the run.
pub fn group_lists(blocks: Vec<Block>) -> Vec<Block> {
    let mut grouped: Vec<Block> = Vec::with_capacity(blocks.len());

    for block in blocks {
        let (kind, content) = match block {
            Block::ListItem { kind, content } => (kind, content),
            other => {
                grouped.push(other);
                continue;
            }
        };

        if let Some(Block::List {
            kind: open_kind,
            items,
        }) = grouped.last_mut()
        {
            if *open_kind == kind {
                items.push(content);
                continue;
            }
        }

        trace!("Starting {} list", kind);
        grouped.push(Block::List {
            kind,
            items: vec![content],
        });
    }

    grouped
}

/// Render a list with one `<li>` per item.
pub fn render_list(kind: ListKind, items: &[String]) -> String {
    let tag = kind.tag();
    let mut html = format!("<{}>", tag);
    for item in items {
        html.push_str("<li>");
        html.push_str(item);
        html.push_str("</li>");
    }
    html.push_str(&format!("</{}>", tag));
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: ListKind, content: &str) -> Block {
        Block::ListItem {
            kind,
            content: content.to_string(),
        }
    }

    fn list(kind: ListKind, items: &[&str]) -> Block {
        Block::List {
            kind,
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_groups_same_kind() {
        let blocks = vec![
            item(ListKind::Unordered, "a"),
            item(ListKind::Unordered, "b"),
        ];
        assert_eq!(
            group_lists(blocks),
            vec![list(ListKind::Unordered, &["a", "b"])]
        );
    }

    #[test]
    fn test_kind_change_starts_new_list() {
        let blocks = vec![
            item(ListKind::Unordered, "a"),
            item(ListKind::Ordered, "b"),
            item(ListKind::Ordered, "c"),
            item(ListKind::Unordered, "d"),
        ];
        assert_eq!(
            group_lists(blocks),
            vec![
                list(ListKind::Unordered, &["a"]),
                list(ListKind::Ordered, &["b", "c"]),
                list(ListKind::Unordered, &["d"]),
            ]
        );
    }

    #[test]
    fn test_other_blocks_split_lists() {
        let blocks = vec![
            item(ListKind::Unordered, "a"),
            Block::Blank,
            item(ListKind::Unordered, "b"),
            Block::Paragraph("p".to_string()),
            item(ListKind::Unordered, "c"),
        ];
        assert_eq!(
            group_lists(blocks),
            vec![
                list(ListKind::Unordered, &["a"]),
                Block::Blank,
                list(ListKind::Unordered, &["b"]),
                Block::Paragraph("p".to_string()),
                list(ListKind::Unordered, &["c"]),
            ]
        );
    }

    #[test]
    fn test_non_list_blocks_pass_through() {
        let blocks = vec![Block::HorizontalRule, Block::Blank];
        assert_eq!(group_lists(blocks.clone()), blocks);
    }

    #[test]
    fn test_render_list() {
        assert_eq!(
            render_list(ListKind::Ordered, &["a".to_string(), "b".to_string()]),
            "<ol><li>a</li><li>b</li></ol>"
        );
    }
}
