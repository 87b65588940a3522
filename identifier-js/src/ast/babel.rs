//! Conversion from Babel's JSON AST (`@babel/parser` output, `File` or any subtree) into [`Node`]s.

use super::Field;
use super::Node;
use super::NodeType;
use super::Slot;
use super::SlotValue;
use crate::error::LoadErrorType;
use crate::error::LoadResult;
use crate::loc::Loc;
use serde::Deserialize;
use serde_json::Map;
use serde_json::Value;
use tracing::debug;

/// What to do with a `type` string that has no [`NodeType`] variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownTypes {
  /// Keep it as [`NodeType::Other`] and still load its children.
  #[default]
  Opaque,
  /// Fail with [`LoadErrorType::UnknownType`].
  Reject,
}

/// Options controlling how a serialized tree is loaded.
#[derive(Clone, Debug)]
pub struct LoadOptions {
  /// Handling of node types the classifiers do not know about.
  pub unknown_types: UnknownTypes,
  /// Maximum nesting of nodes; deeper trees fail with [`LoadErrorType::TooDeep`].
  pub max_depth: usize,
}

impl Default for LoadOptions {
  fn default() -> Self {
    Self {
      unknown_types: UnknownTypes::Opaque,
      max_depth: 2048,
    }
  }
}

// Position data, parser bookkeeping, and comment attachments. Comments are objects with a `type`
// too, so they must never be mistaken for children.
const METADATA_FIELDS: &[&str] = &[
  "type",
  "start",
  "end",
  "loc",
  "range",
  "extra",
  "comments",
  "leadingComments",
  "trailingComments",
  "innerComments",
  "tokens",
];

impl Node {
  pub fn from_babel_json(value: &Value, options: &LoadOptions) -> LoadResult<Node> {
    Loader { options }.node(value, 0)
  }

  /// Parses `source` and loads it like [`Node::from_babel_json`].
  ///
  /// JSON nesting is not limited by the parser; trees deeper than `max_depth` nodes fail with
  /// [`LoadErrorType::TooDeep`] like any other tree.
  pub fn from_babel_str(source: &str, options: &LoadOptions) -> LoadResult<Node> {
    let mut de = serde_json::Deserializer::from_str(source);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Node::from_babel_json(&value, options)
  }
}

const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_GROWTH: usize = 2 * 1024 * 1024;

struct Loader<'o> {
  options: &'o LoadOptions,
}

impl<'o> Loader<'o> {
  fn node(&self, value: &Value, depth: usize) -> LoadResult<Node> {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || self.load(value, depth))
  }

  fn load(&self, value: &Value, depth: usize) -> LoadResult<Node> {
    let Value::Object(map) = value else {
      return Err(Loc::default().load_error(LoadErrorType::ExpectedNode));
    };
    let loc = loc_of(map);
    if depth >= self.options.max_depth {
      return Err(loc.load_error(LoadErrorType::TooDeep(self.options.max_depth)));
    }
    let Some(typ) = map.get("type").and_then(Value::as_str) else {
      return Err(loc.load_error(LoadErrorType::MissingType));
    };
    let typ = NodeType::from(typ);
    if let NodeType::Other(name) = &typ {
      match self.options.unknown_types {
        UnknownTypes::Reject => return Err(loc.load_error(LoadErrorType::UnknownType(name.clone()))),
        UnknownTypes::Opaque => debug!(typ = %name, "keeping unknown node type opaque"),
      };
    }

    // Type parameters are identifier-like themselves; newer Babel versions wrap their name in an
    // `Identifier`, which would otherwise be visited as a second occurrence.
    let inline_name = matches!(typ, NodeType::TypeParameter | NodeType::TSTypeParameter);
    let mut node = Node::new(typ).at(loc);

    for (key, field_value) in map {
      if METADATA_FIELDS.contains(&key.as_str()) {
        continue;
      }
      match (key.as_str(), field_value) {
        ("computed", Value::Bool(computed)) => node.computed = *computed,
        ("name", Value::String(name)) => node.name = Some(name.clone()),
        ("name", Value::Object(inner)) if inline_name => {
          node.name = inner.get("name").and_then(Value::as_str).map(str::to_string);
        }
        (_, Value::Object(_)) if is_node(field_value) => node.slots.push(Slot {
          field: Field::from(key.as_str()),
          value: SlotValue::Node(self.node(field_value, depth + 1)?),
        }),
        (_, Value::Array(items)) if is_node_list(items) => {
          let list = items
            .iter()
            .map(|item| match item {
              Value::Null => Ok(None),
              item => self.node(item, depth + 1).map(Some),
            })
            .collect::<LoadResult<Vec<_>>>()?;
          node.slots.push(Slot {
            field: Field::from(key.as_str()),
            value: SlotValue::List(list),
          });
        }
        _ => {}
      };
    }

    let order = node.typ.visit_order();
    if !order.is_empty() {
      node.slots.sort_by_key(|slot| {
        order
          .iter()
          .position(|name| *name == slot.field.as_str())
          .unwrap_or(order.len())
      });
    }
    Ok(node)
  }
}

fn is_node(value: &Value) -> bool {
  value
    .as_object()
    .is_some_and(|map| map.get("type").is_some_and(Value::is_string))
}

fn is_node_list(items: &[Value]) -> bool {
  items.iter().all(|item| item.is_null() || is_node(item))
}

fn loc_of(map: &Map<String, Value>) -> Loc {
  let offset = |key: &str| {
    map
      .get(key)
      .and_then(Value::as_u64)
      .and_then(|v| usize::try_from(v).ok())
  };
  let start = offset("start").unwrap_or(0);
  let end = offset("end").unwrap_or(start);
  Loc(start, end)
}
