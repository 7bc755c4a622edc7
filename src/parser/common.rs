use std::fmt;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// 1-based position of a node in a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A source file that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("failed to parse {}:{position}: {message}", .path.display())]
#[diagnostic(
    code(unused_resolver::source_parse),
    help("fix the syntax error or exclude the file from the resolver scan")
)]
pub struct SourceParseError {
    pub path: PathBuf,
    pub position: Position,
    pub message: String,
}

impl SourceParseError {
    pub fn new(path: &Path, position: Position, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            position,
            message: message.into(),
        }
    }
}

/// Convert a tree-sitter start point to a 1-based position
pub fn node_position(node: tree_sitter::Node) -> Position {
    let start = node.start_position();
    Position {
        line: start.row + 1,       // tree-sitter uses 0-indexed rows
        column: start.column + 1,  // and 0-indexed columns
    }
}

/// Extract text from a node
pub fn node_text<'a>(node: tree_sitter::Node<'a>, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Find all children of a specific kind
pub fn children_of_kind<'a>(
    node: tree_sitter::Node<'a>,
    kind: &str,
) -> Vec<tree_sitter::Node<'a>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| child.kind() == kind)
        .collect()
}

/// Pre-order iterator over a node and all of its descendants
pub fn descendants<'a>(node: tree_sitter::Node<'a>) -> impl Iterator<Item = tree_sitter::Node<'a>> {
    DescendantIterator::new(node)
}

struct DescendantIterator<'a> {
    cursor: tree_sitter::TreeCursor<'a>,
    done: bool,
}

impl<'a> DescendantIterator<'a> {
    fn new(node: tree_sitter::Node<'a>) -> Self {
        Self {
            cursor: node.walk(),
            done: false,
        }
    }
}

impl<'a> Iterator for DescendantIterator<'a> {
    type Item = tree_sitter::Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let node = self.cursor.node();

        if self.cursor.goto_first_child() {
            return Some(node);
        }

        loop {
            if self.cursor.goto_next_sibling() {
                return Some(node);
            }

            // The cursor is rooted at the starting node, so this stops there
            if !self.cursor.goto_parent() {
                self.done = true;
                return Some(node);
            }
        }
    }
}
