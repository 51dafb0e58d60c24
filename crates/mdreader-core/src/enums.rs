//! Core enums shared between the parser and the renderer.

use serde::{Deserialize, Serialize};

/// Represents the kind of list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// Unordered list with bullets (-, *)
    Unordered,
    /// Ordered list with numbers (1., 2., etc.)
    Ordered,
}

impl ListKind {
    /// HTML element name for this kind of list.
    pub fn tag(&self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Unordered => write!(f, "unordered"),
            ListKind::Ordered => write!(f, "ordered"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_kind_display() {
        assert_eq!(ListKind::Unordered.to_string(), "unordered");
        assert_eq!(ListKind::Ordered.to_string(), "ordered");
    }

    #[test]
    fn test_list_kind_tag() {
        assert_eq!(ListKind::Unordered.tag(), "ul");
        assert_eq!(ListKind::Ordered.tag(), "ol");
    }
}
