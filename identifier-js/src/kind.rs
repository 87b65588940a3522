use crate::ast::Field as F;
use crate::ast::Node;
use crate::ast::NodeType as T;
use crate::path::Path;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use tracing::trace;

/// The role an identifier occurrence plays.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
  /// Introduces a name: declarations, parameters, import locals, destructuring targets.
  Binding,
  /// Reads a name bound elsewhere.
  Reference,
  /// A label that is not a variable: property keys, import/export names, type member keys.
  Static,
}

impl IdentifierKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      IdentifierKind::Binding => "binding",
      IdentifierKind::Reference => "reference",
      IdentifierKind::Static => "static",
    }
  }
}

impl Display for IdentifierKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Classifies the identifier-like node at `path` as a binding, reference or static name.
///
/// `path` must satisfy [`crate::is_identifier_like`]. This is not checked; any other node is
/// reported as a [`IdentifierKind::Reference`].
pub fn identifier_kind(path: &Path) -> IdentifierKind {
  match path.typ() {
    T::Identifier => plain_identifier_kind(path),
    T::TypeParameter | T::TSTypeParameter => IdentifierKind::Binding,
    T::JSXIdentifier => jsx_identifier_kind(path),
    _ => IdentifierKind::Reference,
  }
}

fn plain_identifier_kind(path: &Path) -> IdentifierKind {
  use IdentifierKind::*;

  let (Some(parent), Some(key)) = (path.parent_path(), path.parent_key()) else {
    return Reference;
  };
  let node = parent.node();

  // `a.b`, `a?.b`; never `a[b]`.
  if node.typ.is_member_expression() && key == &F::Property && !node.computed {
    return Static;
  }

  // `let {a: b} = c`, including the duplicated key/value of shorthand `{a}`.
  if node.typ == T::ObjectProperty && parent.parent().is_some_and(|p| p.typ == T::ObjectPattern) {
    match key {
      F::Key if !node.computed => return Static,
      F::Value => return Binding,
      _ => {}
    };
  }

  if is_declared_pattern_target(path) {
    return Binding;
  }

  match (&node.typ, key) {
    (T::ObjectProperty | T::ObjectMethod, F::Key) if !node.computed => Static,
    (
      T::ClassMethod
      | T::ClassPrivateMethod
      | T::ClassProperty
      | T::ClassPrivateProperty
      | T::ClassAccessorProperty,
      F::Key,
    ) if !node.computed => Static,
    (T::PrivateName, _) => Static,

    (T::VariableDeclarator, F::Id) => Binding,
    (typ, F::Id | F::Params) if typ.is_function() => Binding,
    (typ, F::Id) if typ.is_class() => Binding,
    (T::CatchClause, F::Param) => Binding,

    (T::ImportDefaultSpecifier | T::ImportNamespaceSpecifier, _) => Binding,
    (T::ImportSpecifier, F::Imported) => Static,
    (T::ImportSpecifier, F::Local) => Binding,
    (T::ExportDefaultSpecifier | T::ExportNamespaceSpecifier, _) => Static,
    (T::ExportSpecifier, F::Exported) => Static,
    // `export {a} from "m"` names the other module's export; without a source, `a` is local.
    (T::ExportSpecifier, F::Local) if parent.parent().is_some_and(has_source) => Static,

    (
      T::TypeAlias
      | T::OpaqueType
      | T::InterfaceDeclaration
      | T::DeclareTypeAlias
      | T::DeclareOpaqueType
      | T::DeclareInterface
      | T::TSTypeAliasDeclaration
      | T::TSInterfaceDeclaration
      | T::TSEnumDeclaration
      | T::TSModuleDeclaration,
      F::Id,
    ) => Binding,
    (T::TSMappedType, F::Key) => Binding,

    (T::FunctionTypeParam, F::Name)
    | (T::ObjectTypeProperty, F::Key)
    | (T::ObjectTypeIndexer, F::Id)
    | (T::QualifiedTypeIdentifier, F::Id)
    | (T::TSQualifiedName, F::Right)
    | (T::TSEnumMember, F::Id)
    | (T::TSIndexSignature, F::Parameters) => Static,
    (T::TSPropertySignature | T::TSMethodSignature, F::Key) if !node.computed => Static,
    (
      T::TSFunctionType
      | T::TSConstructorType
      | T::TSCallSignatureDeclaration
      | T::TSConstructSignatureDeclaration
      | T::TSMethodSignature,
      F::Parameters | F::Params,
    ) => Static,

    (T::LabeledStatement | T::BreakStatement | T::ContinueStatement, F::Label) => Static,
    (T::MetaProperty, _) => Static,

    _ => Reference,
  }
}

fn has_source(declaration: &Node) -> bool {
  declaration.has_child(&F::Source)
}

/// Whether `path` is a destructuring target whose outermost pattern is declared, e.g. `a` in
/// `let [{b: a}] = c` or `function f(...[a]) {}`. The same shape used as an assignment target
/// (`[a] = c`) does not declare anything.
fn is_declared_pattern_target(path: &Path) -> bool {
  let Some(mut outermost) = enclosing_pattern(path) else {
    return false;
  };
  while let Some(wrapper) = enclosing_pattern(outermost) {
    outermost = wrapper;
  }
  let declared = match (outermost.parent(), outermost.parent_key()) {
    (Some(site), Some(key)) => is_binding_site(site, key),
    _ => false,
  };
  if declared {
    trace!(
      depth = path.depth() - outermost.depth(),
      "destructuring target reaches binding site"
    );
  }
  declared
}

/// The parent of `path` if it holds `path` as a destructuring target.
fn enclosing_pattern<'a>(path: &Path<'a>) -> Option<&'a Path<'a>> {
  let parent = path.parent_path()?;
  let key = path.parent_key()?;
  let wraps = match (parent.typ(), key) {
    (T::ObjectPattern, F::Properties)
    | (T::ArrayPattern, F::Elements)
    | (T::RestElement, F::Argument)
    | (T::AssignmentPattern, F::Left) => true,
    (T::ObjectProperty, F::Value) => parent.parent().is_some_and(|p| p.typ == T::ObjectPattern),
    _ => false,
  };
  wraps.then_some(parent)
}

fn is_binding_site(site: &Node, key: &F) -> bool {
  match (&site.typ, key) {
    (T::VariableDeclarator, F::Id) => true,
    (typ, F::Params) => typ.is_function(),
    _ => false,
  }
}

fn jsx_identifier_kind(path: &Path) -> IdentifierKind {
  if path.is_in(&T::JSXMemberExpression, &F::Property)
    || path.is_in(&T::JSXAttribute, &F::Name)
    || path.parent().is_some_and(|p| p.typ == T::JSXNamespacedName)
  {
    return IdentifierKind::Static;
  }
  // `<a.b/>` reads `a` whatever its case.
  if path.is_in(&T::JSXMemberExpression, &F::Object) {
    return IdentifierKind::Reference;
  }
  // Lower-case element names are host elements (`<div>`), capitalized ones are components.
  if starts_lowercase(path.node()) {
    IdentifierKind::Static
  } else {
    IdentifierKind::Reference
  }
}

fn starts_lowercase(node: &Node) -> bool {
  node
    .name
    .as_deref()
    .and_then(|name| name.chars().next())
    .is_some_and(char::is_lowercase)
}
