//! mdreader Parser
//!
//! A line-oriented markdown parser. Each input line is classified into
//! exactly one [`Block`]; fenced code and pipe tables span several lines and
//! are buffered in an explicit [`ParserState`] until they close.
//!
//! # Example
//!
//! ```
//! use mdreader_parser::{Block, Parser};
//!
//! let mut parser = Parser::new();
//! let blocks = parser.parse_document("# Hello **World**");
//! assert_eq!(
//!     blocks,
//!     vec![Block::Heading {
//!         level: 1,
//!         content: "Hello <strong>World</strong>".to_string(),
//!     }]
//! );
//! ```

pub mod escape;
pub mod inline;
pub mod table;

pub use escape::{escape_html, push_escaped};
pub use inline::{format_inline, parse_inline, InlineElement};
pub use mdreader_core::{ListKind, ParserState};
pub use table::reassemble;

use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// Regex for a code fence, optionally tagged with a language
static CODE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```([A-Za-z0-9_]+)?$").unwrap());

/// Regex for table rows (untrimmed line)
static TABLE_ROW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|.+\|$").unwrap());

/// Regex for horizontal rules
static HR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^---+$").unwrap());

/// Regex for headings
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})(?-u:\s)+(.+)$").unwrap());

/// Regex for unordered list items
static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*](?-u:\s)+(.+)$").unwrap());

/// Regex for ordered list items
static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.(?-u:\s)+(.+)$").unwrap());

// =============================================================================
// Types
// =============================================================================

/// A block-level unit of parser output.
///
/// Text carried by headings, list items, paragraphs and table cells is
/// already inline-formatted HTML. Code block text is raw and gets escaped
/// when serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        content: String,
    },
    HorizontalRule,
    /// A single list item, as classified from one line.
    ListItem {
        kind: ListKind,
        content: String,
    },
    /// Consecutive list items of one kind. Never emitted by [`Parser`];
    /// produced by grouping list items after parsing.
    List {
        kind: ListKind,
        items: Vec<String>,
    },
    Paragraph(String),
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Blank,
}

impl Block {
    /// The list kind, if this is a list item.
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Block::ListItem { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Line-oriented markdown parser.
#[derive(Debug, Default)]
pub struct Parser {
    state: ParserState,
    blocks: Vec<Block>,
}

impl Parser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Parse a single line and return the blocks it completes.
    ///
    /// Lines inside a code fence or a table return nothing until the
    /// construct closes.
    pub fn parse_line(&mut self, line: &str) -> Vec<Block> {
        self.blocks.clear();
        trace!("[{}] {:?}", self.state.name(), line);

        // Fences toggle first and take precedence over everything else
        if let Some(caps) = CODE_FENCE_RE.captures(line) {
            let language = caps.get(1).map(|m| m.as_str().to_string());
            self.toggle_fence(language);
            return self.take_blocks();
        }

        if let ParserState::InFence { lines, .. } = &mut self.state {
            lines.push(line.to_string());
            return self.take_blocks();
        }

        if TABLE_ROW_RE.is_match(line) {
            self.push_table_row(line);
            return self.take_blocks();
        }

        self.close_table();

        let block = classify_line(line);
        trace!("Classified line as {:?}", block);
        self.blocks.push(block);
        self.take_blocks()
    }

    fn take_blocks(&mut self) -> Vec<Block> {
        std::mem::take(&mut self.blocks)
    }

    fn toggle_fence(&mut self, language: Option<String>) {
        match std::mem::take(&mut self.state) {
            ParserState::InFence { language, lines } => {
                trace!("Closing code fence with {} line(s)", lines.len());
                self.blocks.push(Block::CodeBlock {
                    language,
                    code: lines.join("\n"),
                });
            }
            ParserState::InTable { rows } => {
                self.flush_table(rows);
                self.state = ParserState::InFence {
                    language,
                    lines: Vec::new(),
                };
            }
            ParserState::Normal => {
                self.state = ParserState::InFence {
                    language,
                    lines: Vec::new(),
                };
            }
        }
    }

    fn push_table_row(&mut self, line: &str) {
        if let ParserState::InTable { rows } = &mut self.state {
            rows.push(line.to_string());
        } else {
            self.state = ParserState::InTable {
                rows: vec![line.to_string()],
            };
        }
    }

    fn close_table(&mut self) {
        if !self.state.is_in_table() {
            return;
        }
        if let ParserState::InTable { rows } = std::mem::take(&mut self.state) {
            self.flush_table(rows);
        }
    }

    fn flush_table(&mut self, rows: Vec<String>) {
        match table::reassemble(&rows) {
            Some(block) => self.blocks.push(block),
            None => debug!(
                "Dropping table run of {} row(s): header and separator required",
                rows.len()
            ),
        }
    }

    /// Parse a complete document.
    ///
    /// Lines are split with [`str::lines`]: `\r\n` endings are accepted and a
    /// final newline does not add a trailing [`Block::Blank`].
    pub fn parse_document(&mut self, content: &str) -> Vec<Block> {
        let mut all_blocks = Vec::new();
        for line in content.lines() {
            all_blocks.extend(self.parse_line(line));
        }
        all_blocks.extend(self.finalize());
        all_blocks
    }

    /// Finalize parsing, flushing any open table or code fence.
    pub fn finalize(&mut self) -> Vec<Block> {
        self.blocks.clear();

        match std::mem::take(&mut self.state) {
            ParserState::InTable { rows } => self.flush_table(rows),
            ParserState::InFence { language, lines } => {
                if lines.is_empty() {
                    debug!("Discarding unterminated code fence with no content");
                } else {
                    debug!("Flushing unterminated code fence ({} line(s))", lines.len());
                    self.blocks.push(Block::CodeBlock {
                        language,
                        code: lines.join("\n"),
                    });
                }
            }
            ParserState::Normal => {}
        }

        self.take_blocks()
    }

    /// Reset the parser to initial state.
    pub fn reset(&mut self) {
        self.state = ParserState::new();
        self.blocks.clear();
    }
}

// =============================================================================
// Line classification
// =============================================================================

/// Classify a line that is neither a fence, fenced content, nor a table row.
///
/// Only ASCII whitespace counts as whitespace, so a full-width space does not
/// separate a marker from its text.
fn classify_line(line: &str) -> Block {
    let line = line.trim_ascii();
    if line.is_empty() {
        return Block::Blank;
    }

    try_parse_hr(line)
        .or_else(|| try_parse_heading(line))
        .or_else(|| try_parse_list_item(line))
        .unwrap_or_else(|| Block::Paragraph(format_inline(line)))
}

fn try_parse_hr(line: &str) -> Option<Block> {
    HR_RE.is_match(line).then_some(Block::HorizontalRule)
}

fn try_parse_heading(line: &str) -> Option<Block> {
    let caps = HEADING_RE.captures(line)?;
    let level = caps.get(1).map(|m| m.as_str().len()).unwrap_or(1) as u8;
    let content = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    Some(Block::Heading {
        level,
        content: format_inline(content),
    })
}

fn try_parse_list_item(line: &str) -> Option<Block> {
    let (kind, caps) = if let Some(caps) = UNORDERED_ITEM_RE.captures(line) {
        (ListKind::Unordered, caps)
    } else {
        (ListKind::Ordered, ORDERED_ITEM_RE.captures(line)?)
    };
    let content = caps.get(1).map(|m| m.as_str()).unwrap_or("");

    Some(Block::ListItem {
        kind,
        content: format_inline(content),
    })
}

// =============================================================================
// Tests
// =============================================================================
