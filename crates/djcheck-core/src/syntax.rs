//! Syntax tree model consumed by checkers.
//!
//! The tree is produced by a front end (see `djcheck-python`) and is only
//! ever read by the core. It models the node kinds checkers inspect; every
//! other construct is kept as [`Node::Other`] so that traversal still reaches
//! class definitions nested inside functions, conditionals, and so on.

use std::borrow::Cow;

/// Source position of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, counted in bytes).
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Literal constant value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Text string, escapes already decoded.
    Str(String),
    /// Byte string, escapes already decoded.
    Bytes(Vec<u8>),
    /// Integer, float, or imaginary number, as written.
    Number(String),
    /// `True` / `False`.
    Bool(bool),
    /// `None`.
    None,
    /// `...`
    Ellipsis,
}

impl Literal {
    /// Returns the textual value of a string or byte-string literal.
    ///
    /// Byte strings are decoded as UTF-8. Returns `None` for non-string
    /// literals and for byte strings that are not valid UTF-8.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Str(s) => Some(Cow::Borrowed(s.as_str())),
            Self::Bytes(bytes) => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            Self::Number(_) | Self::Bool(_) | Self::None | Self::Ellipsis => None,
        }
    }
}

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    /// Top-level statements.
    pub body: Vec<Node>,
}

/// `class Name(bases): body`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    /// Class name.
    pub name: String,
    /// Positional base-class expressions, in declaration order.
    pub bases: Vec<Node>,
    /// Statements of the class body.
    pub body: Vec<Node>,
    /// Position of the `class` keyword.
    pub position: Position,
}

impl ClassDef {
    /// Returns the nested class definitions directly in this class body.
    pub fn nested_classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.body.iter().filter_map(Node::as_class_def)
    }

    /// Returns the assignment statements directly in this class body.
    pub fn assignments(&self) -> impl Iterator<Item = &Assign> {
        self.body.iter().filter_map(Node::as_assign)
    }
}

/// `target_1 = target_2 = ... = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    /// Assignment targets, left to right.
    pub targets: Vec<Node>,
    /// Assigned value.
    pub value: Box<Node>,
    /// Position of the statement.
    pub position: Position,
}

impl Assign {
    /// Returns the identifiers of plain-name targets, left to right.
    ///
    /// Targets that are not bare names (tuples, subscripts, attributes) are
    /// skipped.
    pub fn target_names(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().filter_map(Node::as_name)
    }
}

/// A syntax tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Whole file.
    Module(Module),
    /// Class definition.
    ClassDef(ClassDef),
    /// Plain assignment statement.
    Assign(Assign),
    /// Bare identifier.
    Name {
        /// Identifier text.
        id: String,
        /// Position of the identifier.
        position: Position,
    },
    /// Member access, `value.attr`.
    Attribute {
        /// Receiver expression.
        value: Box<Node>,
        /// Member name.
        attr: String,
        /// Position of the expression.
        position: Position,
    },
    /// Literal constant.
    Constant {
        /// Literal value.
        value: Literal,
        /// Position of the literal.
        position: Position,
    },
    /// Any construct the core does not model.
    Other {
        /// Front-end node kind (e.g. `function_definition`).
        kind: String,
        /// Lowered children, in source order.
        children: Vec<Node>,
        /// Position of the node.
        position: Position,
    },
}

impl Node {
    /// Returns a short name for the node kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Module(_) => "module",
            Self::ClassDef(_) => "class_def",
            Self::Assign(_) => "assign",
            Self::Name { .. } => "name",
            Self::Attribute { .. } => "attribute",
            Self::Constant { .. } => "constant",
            Self::Other { kind, .. } => kind,
        }
    }

    /// Returns the node position. Modules start at `1:1`.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Module(_) => Position::new(1, 1),
            Self::ClassDef(class) => class.position,
            Self::Assign(assign) => assign.position,
            Self::Name { position, .. }
            | Self::Attribute { position, .. }
            | Self::Constant { position, .. }
            | Self::Other { position, .. } => *position,
        }
    }

    /// Returns the direct children of this node, in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Self::Module(module) => module.body.iter().collect(),
            Self::ClassDef(class) => class.bases.iter().chain(&class.body).collect(),
            Self::Assign(assign) => assign
                .targets
                .iter()
                .chain(std::iter::once(assign.value.as_ref()))
                .collect(),
            Self::Attribute { value, .. } => vec![value.as_ref()],
            Self::Other { children, .. } => children.iter().collect(),
            Self::Name { .. } | Self::Constant { .. } => Vec::new(),
        }
    }

    /// Returns the class definition if this node is one.
    #[must_use]
    pub fn as_class_def(&self) -> Option<&ClassDef> {
        match self {
            Self::ClassDef(class) => Some(class),
            _ => None,
        }
    }

    /// Returns the assignment if this node is one.
    #[must_use]
    pub fn as_assign(&self) -> Option<&Assign> {
        match self {
            Self::Assign(assign) => Some(assign),
            _ => None,
        }
    }

    /// Returns the identifier if this node is a bare name.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Returns the literal if this node is a constant.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Constant { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Walks the tree and returns every class definition in pre-order.
    ///
    /// A class is yielded before the classes nested inside it.
    #[must_use]
    pub fn class_defs(&self) -> Vec<&ClassDef> {
        let mut found = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Self::ClassDef(class) = node {
                found.push(class);
            }
            // Reversed so the leftmost child is popped first.
            stack.extend(node.children().into_iter().rev());
        }
        found
    }
}

impl From<Module> for Node {
    fn from(module: Module) -> Self {
        Self::Module(module)
    }
}

impl From<ClassDef> for Node {
    fn from(class: ClassDef) -> Self {
        Self::ClassDef(class)
    }
}

impl From<Assign> for Node {
    fn from(assign: Assign) -> Self {
        Self::Assign(assign)
    }
}
