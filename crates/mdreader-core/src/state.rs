//! Block classifier state.
//!
//! The classifier is either reading ordinary lines, buffering a fenced code
//! block, or buffering the rows of a pipe table. The two multi-line
//! constructs are never open at the same time.

/// State of the block classifier between two lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParserState {
    /// Ordinary line-by-line classification
    #[default]
    Normal,
    /// Inside a ``` fence; lines are buffered verbatim
    InFence {
        /// Language tag from the opening fence
        language: Option<String>,
        /// Raw lines seen since the opening fence
        lines: Vec<String>,
    },
    /// Accumulating consecutive `|...|` rows
    InTable {
        /// Raw row lines in input order
        rows: Vec<String>,
    },
}

impl ParserState {
    /// Create a new state in [`ParserState::Normal`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a code fence is open.
    pub fn is_in_fence(&self) -> bool {
        matches!(self, ParserState::InFence { .. })
    }

    /// Check if table rows are being buffered.
    pub fn is_in_table(&self) -> bool {
        matches!(self, ParserState::InTable { .. })
    }

    /// Short name of the current state, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ParserState::Normal => "normal",
            ParserState::InFence { .. } => "fence",
            ParserState::InTable { .. } => "table",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_normal() {
        let state = ParserState::new();
        assert_eq!(state, ParserState::Normal);
        assert!(!state.is_in_fence());
        assert!(!state.is_in_table());
    }

    #[test]
    fn test_state_queries() {
        let fence = ParserState::InFence {
            language: Some("rust".to_string()),
            lines: Vec::new(),
        };
        assert!(fence.is_in_fence());
        assert!(!fence.is_in_table());
        assert_eq!(fence.name(), "fence");

        let table = ParserState::InTable {
            rows: vec!["|a|".to_string()],
        };
        assert!(table.is_in_table());
        assert_eq!(table.name(), "table");
    }
}
