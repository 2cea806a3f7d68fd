//! Lowering of tree-sitter Python trees into the core syntax model.

use djcheck_core::{Assign, ClassDef, Literal, Module, Node, Position};
use tree_sitter::Node as TsNode;

use crate::literal::parse_string;

/// Converts tree-sitter nodes into [`Node`]s, reading text from `src`.
pub(crate) struct Lowerer<'src> {
    src: &'src [u8],
}

impl<'src> Lowerer<'src> {
    pub(crate) fn new(src: &'src [u8]) -> Self {
        Self { src }
    }

    pub(crate) fn module(&self, root: TsNode<'_>) -> Node {
        Node::Module(Module {
            body: self.children(root),
        })
    }

    fn lower(&self, node: TsNode<'_>) -> Node {
        match node.kind() {
            "class_definition" => self.class_definition(node),
            "assignment" => self.assignment(node),
            "identifier" | "keyword_identifier" => self.identifier(node),
            "attribute" => self.attribute(node),
            "string" => self.string(node),
            "concatenated_string" => self.concatenated_string(node),
            "integer" | "float" => self.constant(node, |text| Some(Literal::Number(text.into()))),
            "true" => self.constant(node, |_| Some(Literal::Bool(true))),
            "false" => self.constant(node, |_| Some(Literal::Bool(false))),
            "none" => self.constant(node, |_| Some(Literal::None)),
            "ellipsis" => self.constant(node, |_| Some(Literal::Ellipsis)),
            // Expression statements and parentheses are transparent when they
            // wrap a single node.
            "expression_statement" | "parenthesized_expression" => {
                let mut inner = self.named_children(node);
                match (inner.pop(), inner.is_empty()) {
                    (Some(only), true) => self.lower(only),
                    _ => self.other(node),
                }
            }
            _ => self.other(node),
        }
    }

    fn class_definition(&self, node: TsNode<'_>) -> Node {
        let Some(name) = node
            .child_by_field_name("name")
            .and_then(|n| self.text(n))
        else {
            return self.other(node);
        };

        // Keyword arguments (`metaclass=...`, `**kwargs`) are not bases.
        let bases = node
            .child_by_field_name("superclasses")
            .map(|args| {
                self.named_children(args)
                    .into_iter()
                    .filter(|arg| !matches!(arg.kind(), "keyword_argument" | "dictionary_splat"))
                    .map(|arg| self.lower(arg))
                    .collect()
            })
            .unwrap_or_default();

        let body = node
            .child_by_field_name("body")
            .map(|body| self.children(body))
            .unwrap_or_default();

        Node::ClassDef(ClassDef {
            name: name.to_string(),
            bases,
            body,
            position: position(node),
        })
    }

    /// `a = b = value` nests as `assignment(a, assignment(b, value))`.
    fn assignment(&self, node: TsNode<'_>) -> Node {
        let mut targets = Vec::new();
        let mut current = node;

        loop {
            // Annotated assignments are a different statement kind.
            if current.child_by_field_name("type").is_some() {
                return self.other(node);
            }
            let (Some(left), Some(right)) = (
                current.child_by_field_name("left"),
                current.child_by_field_name("right"),
            ) else {
                return self.other(node);
            };

            targets.push(self.lower(left));
            if right.kind() == "assignment" {
                current = right;
                continue;
            }

            return Node::Assign(Assign {
                targets,
                value: Box::new(self.lower(right)),
                position: position(node),
            });
        }
    }

    fn identifier(&self, node: TsNode<'_>) -> Node {
        match self.text(node) {
            Some(id) => Node::Name {
                id: id.to_string(),
                position: position(node),
            },
            None => self.other(node),
        }
    }

    fn attribute(&self, node: TsNode<'_>) -> Node {
        let (Some(object), Some(attr)) = (
            node.child_by_field_name("object"),
            node.child_by_field_name("attribute")
                .and_then(|a| self.text(a)),
        ) else {
            return self.other(node);
        };

        Node::Attribute {
            value: Box::new(self.lower(object)),
            attr: attr.to_string(),
            position: position(node),
        }
    }

    fn string(&self, node: TsNode<'_>) -> Node {
        self.constant(node, parse_string)
    }

    /// Adjacent literals of the same kind join into one constant, as in Python.
    fn concatenated_string(&self, node: TsNode<'_>) -> Node {
        let parts: Option<Vec<Literal>> = self
            .named_children(node)
            .into_iter()
            .map(|part| self.text(part).and_then(parse_string))
            .collect();

        let joined = parts.and_then(|parts| {
            let mut parts = parts.into_iter();
            let first = parts.next()?;
            parts.try_fold(first, |acc, part| match (acc, part) {
                (Literal::Str(mut a), Literal::Str(b)) => {
                    a.push_str(&b);
                    Some(Literal::Str(a))
                }
                (Literal::Bytes(mut a), Literal::Bytes(b)) => {
                    a.extend(b);
                    Some(Literal::Bytes(a))
                }
                _ => None,
            })
        });

        match joined {
            Some(value) => Node::Constant {
                value,
                position: position(node),
            },
            None => self.other(node),
        }
    }

    fn constant(&self, node: TsNode<'_>, literal: impl FnOnce(&str) -> Option<Literal>) -> Node {
        match self.text(node).and_then(literal) {
            Some(value) => Node::Constant {
                value,
                position: position(node),
            },
            None => self.other(node),
        }
    }

    fn other(&self, node: TsNode<'_>) -> Node {
        Node::Other {
            kind: node.kind().to_string(),
            children: self.children(node),
            position: position(node),
        }
    }

    fn children(&self, node: TsNode<'_>) -> Vec<Node> {
        self.named_children(node)
            .into_iter()
            .map(|child| self.lower(child))
            .collect()
    }

    /// Named children without comments.
    fn named_children<'tree>(&self, node: TsNode<'tree>) -> Vec<TsNode<'tree>> {
        let mut cursor = node.walk();
        let children = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .collect();
        children
    }

    fn text(&self, node: TsNode<'_>) -> Option<&'src str> {
        node.utf8_text(self.src).ok()
    }
}

fn position(node: TsNode<'_>) -> Position {
    let point = node.start_position();
    Position::new(point.row + 1, point.column + 1)
}
