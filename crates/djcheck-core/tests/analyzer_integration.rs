//! Integration test: a user-defined checker plugged into the analyzer.
//!
//! Builds trees by hand, the way a front end would hand them over, and checks
//! that the analyzer stays checker-agnostic.

use djcheck_core::{
    matches_literal_value, Analyzer, Assign, BaseClassPattern, Checker, ClassDef, Issue,
    IssueCode, Literal, Module, Node, Position,
};

const XX01: IssueCode = IssueCode::new("XX01", "Serializer.Meta should not set depth");

/// A second rule of the configuration-block family: `depth = <anything>` in
/// the Meta of a `serializers.ModelSerializer`.
struct NoSerializerDepth {
    base: BaseClassPattern,
}

impl Checker for NoSerializerDepth {
    fn name(&self) -> &'static str {
        "no-serializer-depth"
    }

    fn codes(&self) -> &'static [IssueCode] {
        &[XX01]
    }

    fn applies_to(&self, class: &ClassDef) -> bool {
        class.bases.iter().any(|base| self.base.matches(base))
    }

    fn run(&self, class: &ClassDef) -> Vec<Issue> {
        let Some(meta) = class.nested_classes().next() else {
            return Vec::new();
        };
        meta.assignments()
            .flat_map(Assign::target_names)
            .filter(|name| *name == "depth")
            .map(|_| XX01.at(class.position))
            .collect()
    }
}

fn at(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

fn name(id: &str, position: Position) -> Node {
    Node::Name {
        id: id.to_string(),
        position,
    }
}

fn serializer(class_name: &str, line: usize, meta_body: Vec<Node>) -> Node {
    Node::ClassDef(ClassDef {
        name: class_name.to_string(),
        bases: vec![Node::Attribute {
            value: Box::new(name("serializers", at(line, 20))),
            attr: "ModelSerializer".to_string(),
            position: at(line, 20),
        }],
        body: vec![Node::ClassDef(ClassDef {
            name: "Meta".to_string(),
            bases: Vec::new(),
            body: meta_body,
            position: at(line + 1, 5),
        })],
        position: at(line, 1),
    })
}

fn assign(target: &str, line: usize, value: Literal) -> Node {
    Node::Assign(Assign {
        targets: vec![name(target, at(line, 9))],
        value: Box::new(Node::Constant {
            value,
            position: at(line, 17),
        }),
        position: at(line, 9),
    })
}

#[test]
fn custom_checker_runs_without_driver_changes() {
    let tree = Node::Module(Module {
        body: vec![
            serializer(
                "BookSerializer",
                1,
                vec![assign("depth", 3, Literal::Number("2".into()))],
            ),
            serializer(
                "AuthorSerializer",
                5,
                vec![assign("fields", 7, Literal::Str("__all__".into()))],
            ),
        ],
    });

    let analyzer = Analyzer::builder()
        .checker(NoSerializerDepth {
            base: BaseClassPattern::new("serializers", "ModelSerializer"),
        })
        .build();

    let issues = analyzer.analyze(&tree);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code(), "XX01");
    assert_eq!(issues[0].position(), at(1, 1));
}

#[test]
fn literal_matcher_is_usable_from_checkers() {
    let node = Node::Constant {
        value: Literal::Bytes(b"__all__".to_vec()),
        position: at(1, 1),
    };
    assert!(matches_literal_value(&node, "__all__"));
}
