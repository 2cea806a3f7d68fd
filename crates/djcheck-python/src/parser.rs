//! Python parser front end.

use djcheck_core::{Node, Position};
use tree_sitter::{Language, Parser};
use tracing::debug;

use crate::lower::Lowerer;

/// Errors produced while parsing Python source.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The grammar could not be loaded into the parser.
    #[error("Failed to load Python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// Tree-sitter returned no tree.
    #[error("Parser produced no syntax tree")]
    NoTree,

    /// The source contains a syntax error.
    #[error("Syntax error at {position}")]
    Syntax {
        /// Position of the first erroneous node.
        position: Position,
    },
}

/// Parses Python source into the core syntax model.
///
/// The parser is stateless between calls and can be shared across threads.
pub struct PythonParser {
    language: Language,
}

impl PythonParser {
    /// Creates a new Python parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    /// File extensions this parser handles.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        &["py", "pyi"]
    }

    /// Parses `source` and lowers it into a [`Node::Module`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] if the source is not valid Python, or
    /// another variant if tree-sitter itself fails.
    pub fn parse(&self, source: &str) -> Result<Node, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(ParseError::NoTree)?;
        let root = tree.root_node();

        if root.has_error() {
            let position = first_error(root).map_or(Position::new(1, 1), |node| {
                let point = node.start_position();
                Position::new(point.row + 1, point.column + 1)
            });
            debug!("Syntax error at {position}");
            return Err(ParseError::Syntax { position });
        }

        Ok(Lowerer::new(src).module(root))
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the first `ERROR` or missing node in document order.
fn first_error(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}
