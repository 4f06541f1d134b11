//! Identifier harvesting from parsed Go files
//!
//! Walks every node of a tree-sitter-go tree and emits the names that
//! declaration-shaped nodes introduce. Names are passed through verbatim,
//! including the blank identifier `_`.

use lexicon_metal::ParsedFile;
use serde::Serialize;
use std::fmt;
use tree_sitter::{Node, TreeCursor};

/// Which kind of declaration an identifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentKind {
    Function,
    Parameter,
    Type,
    Field,
    InterfaceMethod,
    Value,
    Binding,
}

impl IdentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentKind::Function => "function",
            IdentKind::Parameter => "parameter",
            IdentKind::Type => "type",
            IdentKind::Field => "field",
            IdentKind::InterfaceMethod => "interface_method",
            IdentKind::Value => "value",
            IdentKind::Binding => "binding",
        }
    }
}

impl fmt::Display for IdentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared name and where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a> {
    pub name: &'a str,
    pub kind: IdentKind,
    /// 1-based line of the name
    pub line: usize,
}

/// Go node shapes that introduce names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Declaration {
    /// `func f(a, b int)` and `func (r T) m(a int)`
    Function,
    /// `func(a int) {}`
    FuncLiteral,
    /// `type T struct{}` and `type T = U`
    TypeSpec,
    /// one line of a struct body
    Field,
    /// one method of an interface body
    InterfaceMethod,
    /// `var x, y int` / `const k = 1`
    ValueSpec,
    /// `x, err := f()`
    ShortVar,
    /// `for k, v := range m`
    Range,
    /// `switch x := v.(type)`
    TypeSwitch,
    /// `case v, ok := <-ch:`
    Receive,
}

impl Declaration {
    fn classify(kind: &str) -> Option<Self> {
        let decl = match kind {
            "function_declaration" | "method_declaration" => Declaration::Function,
            "func_literal" => Declaration::FuncLiteral,
            "type_spec" | "type_alias" => Declaration::TypeSpec,
            "field_declaration" => Declaration::Field,
            "method_elem" | "method_spec" => Declaration::InterfaceMethod,
            "var_spec" | "const_spec" => Declaration::ValueSpec,
            "short_var_declaration" => Declaration::ShortVar,
            "range_clause" => Declaration::Range,
            "type_switch_statement" => Declaration::TypeSwitch,
            "receive_statement" => Declaration::Receive,
            _ => return None,
        };
        Some(decl)
    }
}

/// Call `emit` for every identifier declared in `file`, in document order
pub fn for_each_identifier<'f>(file: &'f ParsedFile, mut emit: impl FnMut(Identifier<'f>)) {
    let mut cursor = file.tree.walk();
    visit_node(&mut cursor, file, &mut emit);
}

/// Every identifier declared in `file`, in document order
pub fn collect_identifiers(file: &ParsedFile) -> Vec<Identifier<'_>> {
    let mut identifiers = Vec::new();
    for_each_identifier(file, |ident| identifiers.push(ident));
    identifiers
}

fn visit_node<'f>(
    cursor: &mut TreeCursor<'f>,
    file: &'f ParsedFile,
    emit: &mut impl FnMut(Identifier<'f>),
) {
    let node = cursor.node();

    if let Some(decl) = Declaration::classify(node.kind()) {
        extract_declaration(decl, node, file, emit);
    }

    if cursor.goto_first_child() {
        loop {
            visit_node(cursor, file, emit);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
}

fn extract_declaration<'f>(
    decl: Declaration,
    node: Node<'f>,
    file: &'f ParsedFile,
    emit: &mut impl FnMut(Identifier<'f>),
) {
    match decl {
        Declaration::Function => {
            emit_field(node, "name", IdentKind::Function, file, emit);
            emit_parameters(node, file, emit);
        }
        Declaration::FuncLiteral => emit_parameters(node, file, emit),
        Declaration::TypeSpec => emit_field(node, "name", IdentKind::Type, file, emit),
        Declaration::Field => emit_field(node, "name", IdentKind::Field, file, emit),
        Declaration::InterfaceMethod => {
            emit_field(node, "name", IdentKind::InterfaceMethod, file, emit)
        }
        Declaration::ValueSpec => emit_field(node, "name", IdentKind::Value, file, emit),
        Declaration::ShortVar => emit_left(node, "left", file, emit),
        Declaration::Range | Declaration::Receive => {
            if defines(node) {
                emit_left(node, "left", file, emit);
            }
        }
        Declaration::TypeSwitch => emit_left(node, "alias", file, emit),
    }
}

/// Emit the text of every named child stored under `field`
fn emit_field<'f>(
    node: Node<'f>,
    field: &str,
    kind: IdentKind,
    file: &'f ParsedFile,
    emit: &mut impl FnMut(Identifier<'f>),
) {
    let mut cursor = node.walk();
    // `const a, b = ...` tags the separating commas with the field too
    for child in node
        .children_by_field_name(field, &mut cursor)
        .filter(|child| child.is_named())
    {
        emit(Identifier {
            name: file.text(child),
            kind,
            line: child.start_position().row + 1,
        });
    }
}

fn emit_parameters<'f>(
    node: Node<'f>,
    file: &'f ParsedFile,
    emit: &mut impl FnMut(Identifier<'f>),
) {
    let Some(params) = node.child_by_field_name("parameters") else {
        return;
    };

    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        if matches!(
            param.kind(),
            "parameter_declaration" | "variadic_parameter_declaration"
        ) {
            emit_field(param, "name", IdentKind::Parameter, file, emit);
        }
    }
}

/// Emit the plain identifiers of an assignment's left-hand side
fn emit_left<'f>(
    node: Node<'f>,
    field: &str,
    file: &'f ParsedFile,
    emit: &mut impl FnMut(Identifier<'f>),
) {
    let Some(left) = node.child_by_field_name(field) else {
        return;
    };

    let mut emit_ident = |ident: Node<'f>| {
        emit(Identifier {
            name: file.text(ident),
            kind: IdentKind::Binding,
            line: ident.start_position().row + 1,
        })
    };

    if left.kind() == "identifier" {
        emit_ident(left);
        return;
    }

    let mut cursor = left.walk();
    for expr in left.named_children(&mut cursor) {
        if expr.kind() == "identifier" {
            emit_ident(expr);
        }
    }
}

/// Whether the statement binds with `:=` rather than assigning with `=`
fn defines(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == ":=");
    found
}
