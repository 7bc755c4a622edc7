use super::common::{
    children_of_kind, descendants, node_position, node_text, Position, SourceParseError,
};
use std::path::Path;
use tracing::debug;
use tree_sitter::{LanguageError, Node, Parser as TsParser};

/// A top-level Go method declaration (a `func` with a receiver)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Receiver type name, `*`-prefixed for pointer receivers
    pub receiver_type: String,
    pub method_name: String,
    /// 1-based line of the `func` keyword
    pub line: usize,
}

/// Go source code parser using tree-sitter
pub struct GoParser {
    parser: TsParser,
}

impl GoParser {
    pub fn new() -> Result<Self, LanguageError> {
        let mut parser = TsParser::new();
        parser.set_language(&tree_sitter_go::language())?;
        Ok(Self { parser })
    }

    /// Parse a Go file and return its method declarations in source order.
    ///
    /// Free functions are never returned. Any syntax error in the file fails
    /// the whole file.
    pub fn parse(&mut self, path: &Path, contents: &str) -> Result<Vec<MethodDecl>, SourceParseError> {
        let tree = self.parser.parse(contents, None).ok_or_else(|| {
            SourceParseError::new(
                path,
                Position { line: 1, column: 1 },
                "parser produced no syntax tree",
            )
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(syntax_error(path, root, contents));
        }

        let methods: Vec<MethodDecl> = children_of_kind(root, "method_declaration")
            .into_iter()
            .filter_map(|node| method_decl(node, contents))
            .collect();

        debug!("Parsed {}: {} methods", path.display(), methods.len());
        Ok(methods)
    }
}

fn syntax_error(path: &Path, root: Node, source: &str) -> SourceParseError {
    let Some(node) = descendants(root).find(|n| n.is_error() || n.is_missing()) else {
        return SourceParseError::new(path, node_position(root), "syntax error");
    };

    let message = if node.is_missing() {
        format!("expected {}", node.kind())
    } else {
        let text = node_text(node, source);
        match text.lines().next().map(str::trim) {
            Some(first) if !first.is_empty() => format!("unexpected `{}`", first),
            _ => "syntax error".to_string(),
        }
    };

    SourceParseError::new(path, node_position(node), message)
}

fn method_decl(node: Node, source: &str) -> Option<MethodDecl> {
    let receiver = node.child_by_field_name("receiver")?;
    let name = node.child_by_field_name("name")?;

    // func (r *T) ... declares exactly one receiver parameter
    let param = children_of_kind(receiver, "parameter_declaration")
        .into_iter()
        .next()?;
    let receiver_type = receiver_type_name(param.child_by_field_name("type")?, source)?;

    Some(MethodDecl {
        receiver_type,
        method_name: node_text(name, source).to_string(),
        line: node_position(node).line,
    })
}

/// Reduce a receiver type expression to `T` or `*T`.
///
/// Parentheses are unwrapped and type arguments dropped, so `(*list[T])`
/// becomes `*list`.
fn receiver_type_name(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "pointer_type" => {
            let base = base_type_name(node.named_child(0)?, source)?;
            Some(format!("*{}", base))
        }
        "parenthesized_type" => receiver_type_name(node.named_child(0)?, source),
        _ => base_type_name(node, source),
    }
}

fn base_type_name(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "type_identifier" => Some(node_text(node, source).to_string()),
        "generic_type" => base_type_name(node.child_by_field_name("type")?, source),
        "parenthesized_type" => base_type_name(node.named_child(0)?, source),
        _ => None,
    }
}
