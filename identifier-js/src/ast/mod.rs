use crate::loc::Loc;
use derive_more::derive::From;

pub mod babel;
pub mod field;
pub mod node_type;

pub use field::Field;
pub use node_type::NodeType;

/// An immutable syntax tree node, shaped like a Babel AST node.
///
/// Only what the classifiers read is kept: the type, the name token of identifier-like nodes, the
/// `computed` flag of member/property nodes, and the child slots in traversal order. Scalars that
/// do not matter (operators, literal values, `async`, ...) are dropped when loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
  pub loc: Loc,
  pub typ: NodeType,
  pub name: Option<String>,
  pub computed: bool,
  pub slots: Vec<Slot>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
  pub field: Field,
  pub value: SlotValue,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
pub enum SlotValue {
  Node(Node),
  // `None` entries are holes, e.g. `[, a] = b`.
  List(Vec<Option<Node>>),
}

impl Node {
  pub fn new(typ: NodeType) -> Node {
    Node {
      loc: Loc::default(),
      typ,
      name: None,
      computed: false,
      slots: Vec::new(),
    }
  }

  pub fn identifier(name: impl Into<String>) -> Node {
    Node::new(NodeType::Identifier).named(name)
  }

  pub fn jsx_identifier(name: impl Into<String>) -> Node {
    Node::new(NodeType::JSXIdentifier).named(name)
  }

  pub fn named(mut self, name: impl Into<String>) -> Node {
    self.name = Some(name.into());
    self
  }

  pub fn computed(mut self, computed: bool) -> Node {
    self.computed = computed;
    self
  }

  pub fn at(mut self, loc: Loc) -> Node {
    self.loc = loc;
    self
  }

  /// Appends a single-node slot.
  pub fn with(mut self, field: Field, child: Node) -> Node {
    self.slots.push(Slot {
      field,
      value: child.into(),
    });
    self
  }

  /// Appends a list slot without holes.
  pub fn with_list(self, field: Field, children: Vec<Node>) -> Node {
    self.with_holes(field, children.into_iter().map(Some).collect())
  }

  pub fn with_holes(mut self, field: Field, children: Vec<Option<Node>>) -> Node {
    self.slots.push(Slot {
      field,
      value: children.into(),
    });
    self
  }

  /// The node held in a single-node slot, if the slot exists.
  pub fn child(&self, field: &Field) -> Option<&Node> {
    self.slots.iter().find_map(|slot| match &slot.value {
      SlotValue::Node(node) if &slot.field == field => Some(node),
      _ => None,
    })
  }

  pub fn has_child(&self, field: &Field) -> bool {
    self.child(field).is_some()
  }

  /// Every present child in traversal order, with the slot it lives in. List holes are skipped.
  pub fn children(&self) -> impl Iterator<Item = (&Field, &Node)> {
    self.slots.iter().flat_map(|slot| {
      let (single, list): (Option<&Node>, &[Option<Node>]) = match &slot.value {
        SlotValue::Node(node) => (Some(node), &[]),
        SlotValue::List(list) => (None, list),
      };
      single
        .into_iter()
        .chain(list.iter().flatten())
        .map(move |node| (&slot.field, node))
    })
  }
}
