use crate::ast::Field;
use crate::ast::Node;
use crate::ast::NodeType;
use std::convert::Infallible;

/// A node together with the chain of ancestors it was reached through.
///
/// Paths are created by [`traverse`] on the stack, one per visited node, and borrow both the tree
/// and their parent's path; nothing is allocated and nothing outlives the visit.
#[derive(Clone, Copy, Debug)]
pub struct Path<'a> {
  node: &'a Node,
  parent: Option<&'a Path<'a>>,
  key: Option<&'a Field>,
}

impl<'a> Path<'a> {
  pub fn root(node: &'a Node) -> Path<'a> {
    Path {
      node,
      parent: None,
      key: None,
    }
  }

  /// The path of `node`, held by this path's node in slot `key`.
  pub fn child(&'a self, node: &'a Node, key: &'a Field) -> Path<'a> {
    Path {
      node,
      parent: Some(self),
      key: Some(key),
    }
  }

  pub fn node(&self) -> &'a Node {
    self.node
  }

  pub fn typ(&self) -> &'a NodeType {
    &self.node.typ
  }

  pub fn parent_path(&self) -> Option<&'a Path<'a>> {
    self.parent
  }

  pub fn parent(&self) -> Option<&'a Node> {
    self.parent.map(|p| p.node)
  }

  /// The slot of the parent holding this node; `None` at the root.
  pub fn parent_key(&self) -> Option<&'a Field> {
    self.key
  }

  /// Whether the parent exists, has type `typ`, and holds this node in slot `key`.
  pub fn is_in(&self, typ: &NodeType, key: &Field) -> bool {
    self.parent().is_some_and(|p| &p.typ == typ) && self.key == Some(key)
  }

  /// Strict ancestors, nearest first.
  pub fn ancestors(&self) -> impl Iterator<Item = &'a Path<'a>> {
    std::iter::successors(self.parent, |p| p.parent)
  }

  pub fn depth(&self) -> usize {
    self.ancestors().count()
  }
}

/// Visits `root` and every descendant in pre-order: a node before its children, children in slot
/// order, list elements by index, holes skipped.
pub fn traverse<F>(root: &Node, mut enter: F)
where
  F: FnMut(&Path<'_>),
{
  let result = try_traverse(root, |path| {
    enter(path);
    Ok::<(), Infallible>(())
  });
  match result {
    Ok(()) => {}
    Err(never) => match never {},
  }
}

/// Like [`traverse`], stopping at the first error returned by `enter`.
pub fn try_traverse<F, E>(root: &Node, mut enter: F) -> Result<(), E>
where
  F: FnMut(&Path<'_>) -> Result<(), E>,
{
  walk(&Path::root(root), &mut enter)
}

const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_GROWTH: usize = 2 * 1024 * 1024;

fn walk<F, E>(path: &Path<'_>, enter: &mut F) -> Result<(), E>
where
  F: FnMut(&Path<'_>) -> Result<(), E>,
{
  stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || -> Result<(), E> {
    enter(path)?;
    for (key, child) in path.node.children() {
      walk(&path.child(child, key), enter)?;
    }
    Ok(())
  })
}
