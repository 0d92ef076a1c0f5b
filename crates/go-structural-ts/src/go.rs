//! Go parser adapter using Tree-sitter.

use std::path::Path;
use tree_sitter::{Language, Node, Parser};

use go_structural_core::{
    DeclKind, Declaration, FuncDecl, ParamGroup, ParseError, SourceFile, SourceParser, TypeSpec,
};

/// Longest source excerpt quoted in a syntax error message.
const MAX_EXCERPT: usize = 24;

/// Parses Go source into the [`SourceFile`] model.
///
/// Tree-sitter recovers from syntax errors and accepts some programs Go
/// rejects; this adapter does not. The following are reported as a
/// [`ParseError`]:
///
/// - any ERROR or MISSING node
/// - a missing or repeated `package` clause
/// - a statement at file scope
/// - an `import` after any other declaration
/// - a parameter or result list mixing named and unnamed entries
pub struct GoParser {
    language: Language,
}

impl GoParser {
    /// Creates a new Go parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn line(node: &Node<'_>) -> usize {
        node.start_position().row + 1
    }

    fn field_text(node: &Node<'_>, field: &str, src: &[u8]) -> String {
        node.child_by_field_name(field)
            .map(|n| Self::text(&n, src).to_owned())
            .unwrap_or_default()
    }

    fn package_name(node: &Node<'_>, src: &[u8]) -> String {
        let mut cursor = node.walk();
        let name = node
            .named_children(&mut cursor)
            .find(|c| c.kind() == "package_identifier")
            .map(|c| Self::text(&c, src).to_owned());
        name.unwrap_or_default()
    }

    fn type_specs(node: &Node<'_>, src: &[u8]) -> Vec<TypeSpec> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|c| matches!(c.kind(), "type_spec" | "type_alias"))
            .map(|spec| TypeSpec {
                name: Self::field_text(&spec, "name", src),
                line: Self::line(&spec),
                is_interface: spec
                    .child_by_field_name("type")
                    .is_some_and(|t| t.kind() == "interface_type"),
            })
            .collect()
    }

    fn func_decl(path: &Path, source: &str, node: &Node<'_>) -> Result<FuncDecl, ParseError> {
        let src = source.as_bytes();
        let name = Self::field_text(node, "name", src);
        let params = match node.child_by_field_name("parameters") {
            Some(list) => Self::param_groups(path, source, &list)?,
            None => Vec::new(),
        };
        if let Some(result) = node
            .child_by_field_name("result")
            .filter(|r| r.kind() == "parameter_list")
        {
            Self::param_groups(path, source, &result)?;
        }

        Ok(match node.child_by_field_name("receiver") {
            Some(receiver) => FuncDecl::method(name, Self::receiver_type(&receiver, src), params),
            None => FuncDecl::function(name, params),
        })
    }

    /// One group per `parameter_declaration`; a variadic parameter is always
    /// a single parameter, named or not. A list must be either all named or
    /// all unnamed.
    fn param_groups(
        path: &Path,
        source: &str,
        list: &Node<'_>,
    ) -> Result<Vec<ParamGroup>, ParseError> {
        let src = source.as_bytes();
        let mut cursor = list.walk();
        let decls: Vec<Node<'_>> = list
            .named_children(&mut cursor)
            .filter(|c| {
                matches!(
                    c.kind(),
                    "parameter_declaration" | "variadic_parameter_declaration"
                )
            })
            .collect();

        let groups: Vec<ParamGroup> = decls
            .iter()
            .map(|decl| {
                let mut names_cursor = decl.walk();
                let names = decl
                    .children_by_field_name("name", &mut names_cursor)
                    .map(|n| Self::text(&n, src).to_owned());
                ParamGroup::named(names)
            })
            .collect();

        let named = groups.iter().filter(|g| !g.names.is_empty()).count();
        if named > 0 && named < groups.len() {
            return Err(Self::error_at(
                path,
                source,
                list,
                "mixed named and unnamed parameters",
            ));
        }

        Ok(groups)
    }

    fn receiver_type(list: &Node<'_>, src: &[u8]) -> String {
        let mut cursor = list.walk();
        let receiver = list
            .named_children(&mut cursor)
            .find(|c| c.kind() == "parameter_declaration")
            .map(|decl| Self::field_text(&decl, "type", src));
        receiver.unwrap_or_default()
    }

    fn syntax_error(path: &Path, source: &str, root: Node<'_>) -> ParseError {
        let Some(node) = first_error(root) else {
            return ParseError::new(path, source, "syntax error");
        };

        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            let excerpt: String = Self::text(&node, source.as_bytes())
                .lines()
                .next()
                .unwrap_or("")
                .chars()
                .take(MAX_EXCERPT)
                .collect();
            if excerpt.trim().is_empty() {
                "syntax error".to_owned()
            } else {
                format!("syntax error: unexpected {:?}", excerpt.trim())
            }
        };

        Self::error_at(path, source, &node, message)
    }

    fn error_at(path: &Path, source: &str, node: &Node<'_>, message: impl Into<String>) -> ParseError {
        let start = node.start_position();
        ParseError::new(path, source, message)
            .at(start.row + 1, start.column + 1)
            .with_span(node.start_byte(), node.end_byte() - node.start_byte())
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for GoParser {
    fn language_id(&self) -> &'static str {
        "go"
    }

    fn parse(&self, path: &Path, source: &str) -> Result<SourceFile, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::new(path, source, format!("loading Go grammar: {e}")))?;

        let src = source.as_bytes();
        let tree = parser
            .parse(src, None)
            .ok_or_else(|| ParseError::new(path, source, "parser returned no syntax tree"))?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(Self::syntax_error(path, source, root));
        }

        let mut package = None;
        let mut declarations = Vec::new();
        let mut past_imports = false;

        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            let kind = match node.kind() {
                "comment" => continue,
                "package_clause" if package.is_some() => {
                    return Err(Self::error_at(
                        path,
                        source,
                        &node,
                        "expected declaration, found 'package'",
                    ));
                }
                "package_clause" => {
                    package = Some(Self::package_name(&node, src));
                    continue;
                }
                _ if package.is_none() => {
                    return Err(Self::error_at(path, source, &node, "expected 'package' clause"));
                }
                "import_declaration" if past_imports => {
                    return Err(Self::error_at(
                        path,
                        source,
                        &node,
                        "imports must appear before other declarations",
                    ));
                }
                "import_declaration" => DeclKind::Import,
                "const_declaration" => DeclKind::Const,
                "var_declaration" => DeclKind::Var,
                "type_declaration" => DeclKind::Type {
                    specs: Self::type_specs(&node, src),
                },
                "function_declaration" | "method_declaration" => {
                    DeclKind::Func(Self::func_decl(path, source, &node)?)
                }
                _ => {
                    return Err(Self::error_at(
                        path,
                        source,
                        &node,
                        "non-declaration statement outside function body",
                    ));
                }
            };

            past_imports |= kind != DeclKind::Import;
            declarations.push(Declaration {
                line: Self::line(&node),
                kind,
            });
        }

        let Some(package) = package else {
            return Err(ParseError::new(path, source, "expected 'package' clause"));
        };

        tracing::debug!(
            "{}: package {}, {} top-level declarations",
            path.display(),
            package,
            declarations.len()
        );

        Ok(SourceFile {
            package,
            declarations,
        })
    }
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> SourceFile {
        GoParser::new()
            .parse(Path::new("test.go"), src)
            .expect("fixture should parse")
    }

    fn parse_err(src: &str) -> ParseError {
        GoParser::new()
            .parse(Path::new("test.go"), src)
            .expect_err("fixture should fail to parse")
    }

    #[test]
    fn extracts_package() {
        assert_eq!(parse("package users\n").package, "users");
    }

    #[test]
    fn empty_package_has_no_declarations() {
        assert!(parse("package users\n").declarations.is_empty());
    }

    #[test]
    fn classifies_top_level_declarations() {
        let file = parse(
            "package demo\n\
             \n\
             import \"fmt\"\n\
             \n\
             const limit = 3\n\
             \n\
             var name = \"x\"\n\
             \n\
             type Shape interface{ Area() float64 }\n\
             \n\
             func Print() { fmt.Println(name, limit) }\n",
        );

        let kinds: Vec<(usize, &str)> = file
            .declarations
            .iter()
            .map(|d| {
                let kind = match &d.kind {
                    DeclKind::Import => "import",
                    DeclKind::Const => "const",
                    DeclKind::Var => "var",
                    DeclKind::Type { .. } => "type",
                    DeclKind::Func(_) => "func",
                };
                (d.line, kind)
            })
            .collect();

        assert_eq!(
            kinds,
            vec![(3, "import"), (5, "const"), (7, "var"), (9, "type"), (11, "func")]
        );
    }

    #[test]
    fn grouped_imports_are_one_declaration() {
        let file = parse("package demo\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n");
        assert_eq!(file.declarations.len(), 1);
        assert_eq!(file.declarations[0].kind, DeclKind::Import);
    }

    #[test]
    fn type_specs_record_interfaces() {
        let file = parse(
            "package demo\n\ntype (\n\tReader interface{ Read() }\n\tFile struct{}\n\tAny = interface{}\n)\n",
        );
        let DeclKind::Type { specs } = &file.declarations[0].kind else {
            panic!("expected a type declaration");
        };
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].name, "Reader");
        assert!(specs[0].is_interface);
        assert_eq!(specs[0].line, 4);
        assert_eq!(specs[1].name, "File");
        assert!(!specs[1].is_interface);
        assert_eq!(specs[2].name, "Any");
        assert!(specs[2].is_interface);
    }

    #[test]
    fn function_parameters_are_grouped_as_written() {
        let file = parse("package demo\n\nfunc Build(a, b string, c int, opts ...string) {}\n");
        let (line, func) = file.functions().next().expect("one function");
        assert_eq!(line, 3);
        assert_eq!(func.name, "Build");
        assert!(func.receiver.is_none());
        assert_eq!(
            func.params,
            vec![
                ParamGroup::named(["a", "b"]),
                ParamGroup::named(["c"]),
                ParamGroup::named(["opts"]),
            ]
        );
        assert_eq!(func.param_count(), 4);
    }

    #[test]
    fn unnamed_parameters_count_once_each() {
        let file = parse("package demo\n\nfunc Sum(int, int, ...int) int { return 0 }\n");
        let (_, func) = file.functions().next().expect("one function");
        assert_eq!(func.param_count(), 3);
    }

    #[test]
    fn method_receiver_is_not_a_parameter() {
        let file = parse("package demo\n\ntype User struct{}\n\nfunc (u *User) Rename(name string) {}\n");
        let (line, func) = file.functions().next().expect("one method");
        assert_eq!(line, 5);
        assert_eq!(func.name, "Rename");
        assert_eq!(func.receiver.as_deref(), Some("*User"));
        assert_eq!(func.param_count(), 1);
    }

    #[test]
    fn type_parameters_are_not_counted() {
        let file = parse("package demo\n\nfunc Map[T, U any](xs []T, f func(T) U) []U { return nil }\n");
        let (_, func) = file.functions().next().expect("one function");
        assert_eq!(func.param_count(), 2);
    }

    #[test]
    fn doc_comments_do_not_shift_lines() {
        let file = parse("package demo\n\n// Run does things.\n// More docs.\nfunc Run() {}\n");
        assert_eq!(file.declarations[0].line, 5);
    }

    #[test]
    fn rejects_syntax_errors() {
        let err = parse_err("package demo\n\nfunc Broken( {\n");
        assert_eq!(err.path, Path::new("test.go"));
        assert!(err.line >= 3, "error reported at line {}", err.line);
    }

    #[test]
    fn rejects_missing_package_clause() {
        let err = parse_err("func main() {}\n");
        assert_eq!(err.message, "expected 'package' clause");
        assert_eq!(err.line, 1);
    }

    #[test]
    fn rejects_empty_source() {
        let err = parse_err("");
        assert_eq!(err.message, "expected 'package' clause");
    }

    #[test]
    fn rejects_statements_at_file_scope() {
        let err = parse_err("package demo\n\nx := 1\n");
        assert!(err.line >= 3, "error reported at line {}", err.line);
    }

    #[test]
    fn rejects_import_after_other_declarations() {
        let err = parse_err("package demo\n\nconst c = 1\n\nimport \"fmt\"\n\nfunc F() { fmt.Println(c) }\n");
        assert_eq!(err.message, "imports must appear before other declarations");
        assert_eq!(err.line, 5);
    }

    #[test]
    fn consecutive_import_blocks_are_accepted() {
        let file = parse("package demo\n\nimport \"fmt\"\n\nimport \"os\"\n\nfunc F() {}\n");
        assert_eq!(file.declarations.len(), 3);
    }

    #[test]
    fn rejects_second_package_clause() {
        let err = parse_err("package a\n\npackage b\n\nfunc F() {}\n");
        assert_eq!(err.message, "expected declaration, found 'package'");
        assert_eq!(err.line, 3);
    }

    #[test]
    fn rejects_mixed_named_and_unnamed_parameters() {
        let err = parse_err("package demo\n\nfunc F(a int, b) {}\n");
        assert_eq!(err.message, "mixed named and unnamed parameters");
        assert_eq!(err.line, 3);
    }

    #[test]
    fn rejects_mixed_named_and_unnamed_results() {
        let err = parse_err("package demo\n\nfunc F() (n int, error) { return 0, nil }\n");
        assert_eq!(err.message, "mixed named and unnamed parameters");
    }
}
