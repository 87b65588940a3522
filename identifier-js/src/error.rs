use crate::loc::Loc;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Formatter;
use std::error::Error;
use std::fmt::Display;

/// Failures of the classifiers themselves.
///
/// Diagnostic codes (prefix `IC`) are assigned per variant and are stable:
/// - `IC0001`: [`ClassifyErrorType::UnexpectedTypeParameterParent`]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ClassifyErrorType {
  /// A type parameter whose parent is neither a Flow type parameter list nor a TypeScript mapped
  /// type, so its dialect cannot be decided. Holds the parent's type, or `None` at the root.
  UnexpectedTypeParameterParent { parent: Option<String> },
}

impl ClassifyErrorType {
  pub fn code(&self) -> &'static str {
    match self {
      ClassifyErrorType::UnexpectedTypeParameterParent { .. } => "IC0001",
    }
  }

  pub fn message(&self) -> String {
    match self {
      ClassifyErrorType::UnexpectedTypeParameterParent { parent: Some(parent) } => {
        format!("cannot determine grammar of type parameter inside {}", parent)
      }
      ClassifyErrorType::UnexpectedTypeParameterParent { parent: None } => {
        "cannot determine grammar of type parameter without a parent".into()
      }
    }
  }
}

#[derive(Clone)]
pub struct ClassifyError {
  pub typ: ClassifyErrorType,
  pub loc: Loc,
}

impl ClassifyError {
  pub fn new(typ: ClassifyErrorType, loc: Loc) -> ClassifyError {
    ClassifyError { typ, loc }
  }
}

impl Debug for ClassifyError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} around loc [{}:{}]", self, self.loc.0, self.loc.1)
  }
}

impl Display for ClassifyError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.typ.code(), self.typ.message())
  }
}

impl Error for ClassifyError {}

impl PartialEq for ClassifyError {
  fn eq(&self, other: &Self) -> bool {
    self.typ == other.typ
  }
}

impl Eq for ClassifyError {}

pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Failures converting a serialized Babel tree into [`crate::ast::Node`]s.
///
/// Diagnostic codes (prefix `IL`) are assigned per variant and are stable:
/// - `IL0001`: [`LoadErrorType::ExpectedNode`]
/// - `IL0002`: [`LoadErrorType::MissingType`]
/// - `IL0003`: [`LoadErrorType::UnknownType`]
/// - `IL0004`: [`LoadErrorType::TooDeep`]
/// - `IL0005`: [`LoadErrorType::MalformedJson`]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum LoadErrorType {
  ExpectedNode,
  MissingType,
  UnknownType(String),
  TooDeep(usize),
  MalformedJson(String),
}

impl LoadErrorType {
  pub fn code(&self) -> &'static str {
    match self {
      LoadErrorType::ExpectedNode => "IL0001",
      LoadErrorType::MissingType => "IL0002",
      LoadErrorType::UnknownType(_) => "IL0003",
      LoadErrorType::TooDeep(_) => "IL0004",
      LoadErrorType::MalformedJson(_) => "IL0005",
    }
  }

  pub fn message(&self) -> String {
    match self {
      LoadErrorType::ExpectedNode => "expected an object with a `type` field".into(),
      LoadErrorType::MissingType => "node has no string `type` field".into(),
      LoadErrorType::UnknownType(typ) => format!("unknown node type {}", typ),
      LoadErrorType::TooDeep(limit) => format!("tree nests deeper than {} nodes", limit),
      LoadErrorType::MalformedJson(reason) => format!("malformed JSON: {}", reason),
    }
  }
}

#[derive(Clone)]
pub struct LoadError {
  pub typ: LoadErrorType,
  pub loc: Loc,
}

impl LoadError {
  pub fn new(typ: LoadErrorType, loc: Loc) -> LoadError {
    LoadError { typ, loc }
  }
}

impl Debug for LoadError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} around loc [{}:{}]", self, self.loc.0, self.loc.1)
  }
}

impl Display for LoadError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.typ.code(), self.typ.message())
  }
}

impl Error for LoadError {}

impl PartialEq for LoadError {
  fn eq(&self, other: &Self) -> bool {
    self.typ == other.typ
  }
}

impl Eq for LoadError {}

impl From<serde_json::Error> for LoadError {
  fn from(err: serde_json::Error) -> Self {
    LoadError::new(LoadErrorType::MalformedJson(err.to_string()), Loc::default())
  }
}

pub type LoadResult<T> = Result<T, LoadError>;
