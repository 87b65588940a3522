//! Classifies every identifier in a JavaScript syntax tree along two axes:
//!
//! - [`IdentifierKind`]: whether the occurrence introduces a name (`binding`), reads one
//!   (`reference`), or is only a label such as a property key (`static`).
//! - [`GrammarDialect`]: whether the construct it sits in is plain JavaScript, JSX, Flow or
//!   TypeScript syntax.
//!
//! Both answers are a pure function of the node's local surroundings (its parent, the slot it
//! occupies, and for destructuring the chain of patterns up to the declaration). No scopes are
//! built and nothing is resolved, so a `reference` is not guaranteed to resolve anywhere.
//!
//! Trees come from Babel's JSON AST (see [`ast::babel`]) or are built directly with [`Node`]'s
//! builder methods.
//!
//! ```
//! use identifier_js::ast::babel::LoadOptions;
//! use identifier_js::ast::Node;
//! use identifier_js::classify_identifiers;
//! use serde_json::json;
//!
//! // `a.b`
//! let tree = Node::from_babel_json(
//!   &json!({
//!     "type": "ExpressionStatement",
//!     "expression": {
//!       "type": "MemberExpression",
//!       "object": { "type": "Identifier", "name": "a" },
//!       "computed": false,
//!       "property": { "type": "Identifier", "name": "b" }
//!     }
//!   }),
//!   &LoadOptions::default(),
//! )
//! .unwrap();
//! let labels: Vec<String> = classify_identifiers(&tree)
//!   .unwrap()
//!   .into_iter()
//!   .map(|id| format!("{}:{}:{}", id.name, id.kind, id.grammar))
//!   .collect();
//! assert_eq!(labels, vec!["a:reference:javascript", "b:static:javascript"]);
//! ```

use ast::Node;
use error::ClassifyError;
use error::ClassifyResult;
use loc::Loc;
use path::try_traverse;
use path::Path;
use serde::Serialize;
use tracing::debug_span;

pub mod ast;
pub mod error;
pub mod grammar;
pub mod kind;
pub mod loc;
pub mod path;

pub use grammar::identifier_grammar;
pub use grammar::GrammarDialect;
pub use kind::identifier_kind;
pub use kind::IdentifierKind;

/// Whether the node at `path` carries a name token that can be classified: a plain identifier, a
/// Flow or TypeScript type parameter declaration, or a JSX name.
///
/// The classifiers assume this holds for every path they are given.
pub fn is_identifier_like(path: &Path) -> bool {
  path.typ().is_identifier_like()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Classification {
  pub kind: IdentifierKind,
  pub grammar: GrammarDialect,
}

/// Both labels of the identifier-like node at `path`.
pub fn classify(path: &Path) -> ClassifyResult<Classification> {
  Ok(Classification {
    kind: identifier_kind(path),
    grammar: identifier_grammar(path)?,
  })
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ClassifiedIdentifier {
  pub name: String,
  pub kind: IdentifierKind,
  pub grammar: GrammarDialect,
  pub loc: Loc,
}

/// Classifies every identifier-like node under `root` (inclusive), in pre-order.
///
/// Stops at the first node whose grammar cannot be determined.
pub fn classify_identifiers(root: &Node) -> ClassifyResult<Vec<ClassifiedIdentifier>> {
  let span = debug_span!("classify_identifiers", identifiers = tracing::field::Empty);
  let _guard = span.enter();

  let mut identifiers = Vec::new();
  try_traverse(root, |path| {
    if is_identifier_like(path) {
      let Classification { kind, grammar } = classify(path)?;
      let node = path.node();
      identifiers.push(ClassifiedIdentifier {
        name: node.name.clone().unwrap_or_default(),
        kind,
        grammar,
        loc: node.loc,
      });
    }
    Ok::<(), ClassifyError>(())
  })?;

  span.record("identifiers", identifiers.len());
  Ok(identifiers)
}
