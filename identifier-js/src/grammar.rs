use crate::ast::Field as F;
use crate::ast::NodeType as T;
use crate::error::ClassifyErrorType;
use crate::error::ClassifyResult;
use crate::path::Path;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The syntax extension that governs the construct an identifier appears in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarDialect {
  Javascript,
  Jsx,
  Flow,
  Typescript,
}

impl GrammarDialect {
  pub fn as_str(&self) -> &'static str {
    match self {
      GrammarDialect::Javascript => "javascript",
      GrammarDialect::Jsx => "jsx",
      GrammarDialect::Flow => "flow",
      GrammarDialect::Typescript => "typescript",
    }
  }
}

impl Display for GrammarDialect {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Determines which dialect the identifier-like node at `path` belongs to.
///
/// Only type annotation and declaration slots are attributed to Flow or TypeScript; a value
/// identifier inside a typed construct (`b` in `function a(b: c)`) stays JavaScript.
///
/// `path` must satisfy [`crate::is_identifier_like`]. Fails for a type parameter outside any
/// type parameter list or mapped type, whose dialect cannot be told from its surroundings.
pub fn identifier_grammar(path: &Path) -> ClassifyResult<GrammarDialect> {
  let node = path.node();
  if matches!(node.typ, T::TypeParameter | T::TSTypeParameter) {
    return match path.parent().map(|p| &p.typ) {
      Some(T::TypeParameterDeclaration) => Ok(GrammarDialect::Flow),
      Some(T::TSMappedType) => Ok(GrammarDialect::Typescript),
      _ if node.typ == T::TSTypeParameter => Ok(GrammarDialect::Typescript),
      parent => Err(
        node
          .loc
          .classify_error(ClassifyErrorType::UnexpectedTypeParameterParent {
            parent: parent.map(|typ| typ.to_string()),
          }),
      ),
    };
  }

  if let Some(dialect) = slot_dialect(path) {
    return Ok(dialect);
  }
  Ok(match node.typ {
    T::JSXIdentifier => GrammarDialect::Jsx,
    _ => GrammarDialect::Javascript,
  })
}

/// Dialect implied by the parent slot holding `path`, for type-level slots only.
fn slot_dialect(path: &Path) -> Option<GrammarDialect> {
  let (parent, key) = (path.parent()?, path.parent_key()?);
  match (&parent.typ, key) {
    (
      T::TypeAlias
      | T::OpaqueType
      | T::InterfaceDeclaration
      | T::DeclareTypeAlias
      | T::DeclareOpaqueType
      | T::DeclareInterface
      | T::GenericTypeAnnotation
      | T::ClassImplements
      | T::InterfaceExtends
      | T::ObjectTypeIndexer,
      F::Id,
    )
    | (T::FunctionTypeParam, F::Name)
    | (T::ObjectTypeProperty, F::Key)
    | (T::QualifiedTypeIdentifier, _) => Some(GrammarDialect::Flow),

    (T::TSTypeReference, F::TypeName)
    | (
      T::TSInterfaceDeclaration
      | T::TSEnumDeclaration
      | T::TSTypeAliasDeclaration
      | T::TSModuleDeclaration
      | T::TSEnumMember,
      F::Id,
    )
    | (T::TSQualifiedName, _)
    | (
      T::TSExpressionWithTypeArguments | T::TSInterfaceHeritage | T::TSClassImplements,
      F::Expression,
    )
    | (T::TSTypeQuery, F::ExprName)
    | (T::TSPropertySignature | T::TSMethodSignature, F::Key)
    | (T::TSIndexSignature, F::Parameters)
    | (T::TSMappedType, F::Key)
    | (
      T::TSFunctionType
      | T::TSConstructorType
      | T::TSCallSignatureDeclaration
      | T::TSConstructSignatureDeclaration
      | T::TSMethodSignature,
      F::Parameters | F::Params,
    ) => Some(GrammarDialect::Typescript),

    _ => None,
  }
}
