use tree_sitter::{Language, Node, Parser, Tree};

/// Grammar variant for one source file. JSX changes the grammar enough that
/// tree-sitter ships TypeScript and TSX as separate languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    /// Pick the dialect from a file path. `None` means the file is not
    /// TypeScript and should not be analyzed at all.
    pub fn for_path(path: &str) -> Option<Dialect> {
        if path.ends_with(".tsx") {
            return Some(Dialect::Tsx);
        }
        if path.ends_with(".ts") || path.ends_with(".mts") || path.ends_with(".cts") {
            return Some(Dialect::TypeScript);
        }
        None
    }

    fn language(self) -> Language {
        match self {
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// One parsed source file: the text plus the tree-sitter tree over it.
/// Built once per analysis pass and discarded with it.
pub struct SourceTree {
    source: String,
    tree: Tree,
}

impl SourceTree {
    /// Parse source text. `None` when the parser cannot produce a tree;
    /// callers treat that as "cannot judge" and skip analysis.
    pub fn parse(source: String, dialect: Dialect) -> Option<SourceTree> {
        let mut parser = Parser::new();
        parser.set_language(&dialect.language()).ok()?;
        let tree = parser.parse(&source, None)?;
        Some(SourceTree { source, tree })
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text of a node. Spans are byte offsets into the original
    /// string, so this never allocates.
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// 1-based start line of a node.
    pub fn line(node: Node<'_>) -> usize {
        node.start_position().row + 1
    }

    /// Visit every node in document order, parents before children.
    pub fn preorder(&self, mut visit: impl FnMut(Node<'_>)) {
        walk(self.root(), &mut visit);
    }
}

fn walk<'t>(node: Node<'t>, visit: &mut dyn FnMut(Node<'t>)) {
    visit(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> SourceTree {
        SourceTree::parse(source.to_string(), Dialect::TypeScript).unwrap()
    }

    #[test]
    fn dialect_for_ts_variants() {
        assert_eq!(Dialect::for_path("src/a.ts"), Some(Dialect::TypeScript));
        assert_eq!(Dialect::for_path("src/a.mts"), Some(Dialect::TypeScript));
        assert_eq!(Dialect::for_path("src/a.cts"), Some(Dialect::TypeScript));
        assert_eq!(Dialect::for_path("src/App.tsx"), Some(Dialect::Tsx));
    }

    #[test]
    fn dialect_for_non_typescript() {
        assert_eq!(Dialect::for_path("src/a.js"), None);
        assert_eq!(Dialect::for_path("README.md"), None);
        assert_eq!(Dialect::for_path("src/a.rs"), None);
    }

    #[test]
    fn parses_to_program_root() {
        let tree = parse("const x = 1;\n");
        assert_eq!(tree.root().kind(), "program");
    }

    #[test]
    fn line_numbers_are_one_based() {
        let tree = parse("const a = 1;\nconst b = 2;\n");
        let root = tree.root();
        let first = root.named_child(0).unwrap();
        let second = root.named_child(1).unwrap();
        assert_eq!(SourceTree::line(first), 1);
        assert_eq!(SourceTree::line(second), 2);
    }

    #[test]
    fn text_recovers_source_slice() {
        let tree = parse("const answer = 42;\n");
        let mut found = false;
        tree.preorder(|node| {
            if node.kind() == "identifier" {
                assert_eq!(tree.text(node), "answer");
                found = true;
            }
        });
        assert!(found);
    }

    #[test]
    fn preorder_visits_parents_first() {
        let tree = parse("function f() { return 1; }\n");
        let mut kinds = Vec::new();
        tree.preorder(|node| kinds.push(node.kind()));
        let program = kinds.iter().position(|k| *k == "program").unwrap();
        let func = kinds
            .iter()
            .position(|k| *k == "function_declaration")
            .unwrap();
        let body = kinds.iter().position(|k| *k == "statement_block").unwrap();
        assert!(program < func);
        assert!(func < body);
    }

    #[test]
    fn tsx_dialect_parses_jsx() {
        let tree = SourceTree::parse(
            "const el = <div className=\"x\">hi</div>;\n".to_string(),
            Dialect::Tsx,
        )
        .unwrap();
        assert_eq!(tree.root().kind(), "program");
    }
}
