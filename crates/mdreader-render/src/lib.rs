//! mdreader Render
//!
//! This crate turns parsed [`Block`]s into an HTML fragment. The fragment
//! has one line per block and no surrounding `<html>`/`<body>`; wrapping it
//! into a page is up to the caller.
//!
//! # Example
//!
//! ```
//! let html = mdreader_render::render("- a\n- b");
//! assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
//! ```

pub mod code;
pub mod list;
pub mod table;

pub use code::render_code_block;
pub use list::{group_lists, render_list};
pub use table::render_table;

use std::io::{self, Write};

use log::{debug, trace};
use mdreader_parser::{Block, Parser};

/// Render a markdown document into an HTML fragment.
///
/// Never fails: every line maps to some block, malformed tables are dropped
/// and unterminated constructs are flushed at the end.
///
/// Input is split with [`str::lines`], so a final newline is a line
/// terminator rather than an extra empty line: `"# a\n"` renders as
/// `<h1>a</h1>` with no trailing blank output line.
pub fn render(text: &str) -> String {
    let blocks = Parser::new().parse_document(text);
    let lines = render_blocks(blocks);
    debug!("Rendered {} block(s)", lines.len());
    lines.join("\n")
}

/// Group list items and serialize each block, in document order.
pub fn render_blocks(blocks: Vec<Block>) -> Vec<String> {
    group_lists(blocks).iter().map(render_block).collect()
}

/// Serialize a single block. [`Block::Blank`] becomes the empty string.
pub fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, content } => format!("<h{0}>{1}</h{0}>", level, content),
        Block::HorizontalRule => "<hr>".to_string(),
        Block::ListItem { kind, content } => render_list(*kind, std::slice::from_ref(content)),
        Block::List { kind, items } => render_list(*kind, items),
        Block::Paragraph(content) => format!("<p>{}</p>", content),
        Block::CodeBlock { language, code } => render_code_block(language.as_deref(), code),
        Block::Table { header, rows } => render_table(header, rows),
        Block::Blank => String::new(),
    }
}

/// Streaming HTML renderer.
///
/// Lines are fed one at a time; blocks are written as soon as they are
/// complete. A list stays open until a block that cannot extend it arrives,
/// so output matches [`render`] for the same input.
pub struct Renderer<W: Write> {
    /// Output writer
    writer: W,
    /// Block classifier
    parser: Parser,
    /// List that may still grow
    open_list: Option<Block>,
    /// Number of blocks written so far
    written: usize,
}

impl<W: Write> Renderer<W> {
    /// Create a new renderer writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            parser: Parser::new(),
            open_list: None,
            written: 0,
        }
    }

    /// Feed one line of markdown.
    pub fn render_line(&mut self, line: &str) -> io::Result<()> {
        let blocks = self.parser.parse_line(line);
        self.render_blocks(blocks)
    }

    /// Render a complete document and finish.
    pub fn render_document(&mut self, content: &str) -> io::Result<()> {
        for line in content.lines() {
            self.render_line(line)?;
        }
        self.finish()
    }

    /// Flush open constructs and the writer.
    pub fn finish(&mut self) -> io::Result<()> {
        let blocks = self.parser.finalize();
        self.render_blocks(blocks)?;
        if let Some(list) = self.open_list.take() {
            self.write_block(&list)?;
        }
        self.writer.flush()
    }

    /// Number of blocks written so far.
    pub fn blocks_written(&self) -> usize {
        self.written
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render_blocks(&mut self, blocks: Vec<Block>) -> io::Result<()> {
        for block in group_lists(blocks) {
            self.push_block(block)?;
        }
        Ok(())
    }

    fn push_block(&mut self, block: Block) -> io::Result<()> {
        if let Block::List { kind, items } = block {
            if let Some(Block::List {
                kind: open_kind,
                items: open_items,
            }) = self.open_list.as_mut()
            {
                if *open_kind == kind {
                    open_items.extend(items);
                    return Ok(());
                }
            }
            if let Some(list) = self.open_list.take() {
                self.write_block(&list)?;
            }
            self.open_list = Some(Block::List { kind, items });
            return Ok(());
        }

        if let Some(list) = self.open_list.take() {
            self.write_block(&list)?;
        }
        self.write_block(&block)
    }

    fn write_block(&mut self, block: &Block) -> io::Result<()> {
        trace!("Writing block {:?}", block);
        if self.written > 0 {
            self.writer.write_all(b"\n")?;
        }
        self.writer.write_all(render_block(block).as_bytes())?;
        self.written += 1;
        Ok(())
    }
}
