use ahash::HashMap;
use ahash::HashMapExt;
use once_cell::sync::Lazy;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

macro_rules! node_types {
  ($($variant:ident),* $(,)?) => {
    /// Discriminant of a syntax tree node, named exactly as the Babel `type` string.
    ///
    /// Only the shapes that matter for identifier classification (and the common containers around
    /// them) get their own variant; every other type string is kept verbatim in `Other`.
    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    pub enum NodeType {
      $($variant,)*
      Other(String),
    }

    impl NodeType {
      pub fn as_str(&self) -> &str {
        match self {
          $(NodeType::$variant => stringify!($variant),)*
          NodeType::Other(name) => name,
        }
      }
    }

    static NODE_TYPES: Lazy<HashMap<&'static str, NodeType>> = Lazy::new(|| {
      let mut map = HashMap::<&'static str, NodeType>::new();
      $(map.insert(stringify!($variant), NodeType::$variant);)*
      map
    });
  };
}

node_types! {
  // Identifier-like.
  Identifier,
  JSXIdentifier,
  TypeParameter,
  TSTypeParameter,

  // Containers.
  File,
  Program,
  BlockStatement,
  ExpressionStatement,
  ForStatement,
  VariableDeclaration,
  AssignmentExpression,
  ArrayExpression,
  ObjectExpression,
  StringLiteral,
  BooleanLiteral,
  ClassBody,
  ImportDeclaration,
  ExportAllDeclaration,
  ExportDefaultDeclaration,
  SpreadElement,

  // Access, patterns and declarations.
  MemberExpression,
  OptionalMemberExpression,
  ObjectPattern,
  ArrayPattern,
  RestElement,
  AssignmentPattern,
  ObjectProperty,
  ObjectMethod,
  VariableDeclarator,
  FunctionDeclaration,
  FunctionExpression,
  ArrowFunctionExpression,
  ClassDeclaration,
  ClassExpression,
  ClassMethod,
  ClassPrivateMethod,
  ClassProperty,
  ClassPrivateProperty,
  ClassAccessorProperty,
  PrivateName,
  CatchClause,
  LabeledStatement,
  BreakStatement,
  ContinueStatement,
  MetaProperty,

  // Modules.
  ImportDefaultSpecifier,
  ImportNamespaceSpecifier,
  ImportSpecifier,
  ExportDefaultSpecifier,
  ExportNamespaceSpecifier,
  ExportSpecifier,
  ExportNamedDeclaration,

  // Flow.
  TypeAlias,
  OpaqueType,
  InterfaceDeclaration,
  DeclareTypeAlias,
  DeclareOpaqueType,
  DeclareInterface,
  TypeAnnotation,
  GenericTypeAnnotation,
  ClassImplements,
  InterfaceExtends,
  FunctionTypeAnnotation,
  FunctionTypeParam,
  ObjectTypeAnnotation,
  ObjectTypeProperty,
  ObjectTypeIndexer,
  QualifiedTypeIdentifier,
  TypeParameterDeclaration,
  TypeParameterInstantiation,

  // TypeScript.
  TSTypeAnnotation,
  TSTypeReference,
  TSTypeLiteral,
  TSTypeOperator,
  TSInterfaceDeclaration,
  TSInterfaceBody,
  TSEnumDeclaration,
  TSEnumMember,
  TSTypeAliasDeclaration,
  TSModuleDeclaration,
  TSModuleBlock,
  TSMappedType,
  TSTypeParameterDeclaration,
  TSTypeParameterInstantiation,
  TSQualifiedName,
  TSExpressionWithTypeArguments,
  TSInterfaceHeritage,
  TSClassImplements,
  TSTypeQuery,
  TSPropertySignature,
  TSMethodSignature,
  TSIndexSignature,
  TSFunctionType,
  TSConstructorType,
  TSCallSignatureDeclaration,
  TSConstructSignatureDeclaration,

  // JSX.
  JSXElement,
  JSXOpeningElement,
  JSXClosingElement,
  JSXMemberExpression,
  JSXNamespacedName,
  JSXAttribute,
  JSXSpreadAttribute,
  JSXExpressionContainer,
  JSXSpreadChild,
}

impl NodeType {
  /// Looks up a known type name; unknown names are not interned.
  pub fn known(name: &str) -> Option<NodeType> {
    NODE_TYPES.get(name).cloned()
  }

  /// Plain identifiers, both flavours of type parameter declaration, and JSX names.
  pub fn is_identifier_like(&self) -> bool {
    matches!(
      self,
      NodeType::Identifier
        | NodeType::JSXIdentifier
        | NodeType::TypeParameter
        | NodeType::TSTypeParameter
    )
  }

  /// Nodes with a signature whose `params` introduce bindings.
  pub fn is_function(&self) -> bool {
    matches!(
      self,
      NodeType::FunctionDeclaration
        | NodeType::FunctionExpression
        | NodeType::ArrowFunctionExpression
        | NodeType::ObjectMethod
        | NodeType::ClassMethod
        | NodeType::ClassPrivateMethod
    )
  }

  pub fn is_class(&self) -> bool {
    matches!(self, NodeType::ClassDeclaration | NodeType::ClassExpression)
  }

  pub fn is_member_expression(&self) -> bool {
    matches!(
      self,
      NodeType::MemberExpression | NodeType::OptionalMemberExpression
    )
  }

  /// Slot order used when visiting children, for types whose traversal order differs from the
  /// order their fields appear in source (and in serialized trees).
  pub fn visit_order(&self) -> &'static [&'static str] {
    match self {
      NodeType::ImportSpecifier => &["local", "imported"],
      NodeType::ExportSpecifier => &["local", "exported"],
      NodeType::JSXElement => &["openingElement", "children", "closingElement"],
      _ => &[],
    }
  }
}

impl From<&str> for NodeType {
  fn from(name: &str) -> Self {
    NodeType::known(name).unwrap_or_else(|| NodeType::Other(name.to_string()))
  }
}

impl Display for NodeType {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
