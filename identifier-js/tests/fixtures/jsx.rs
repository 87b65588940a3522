use crate::common::*;
use identifier_js::ast::Field;
use identifier_js::ast::Node;
use identifier_js::ast::NodeType;

fn attribute(name: &str, value: Option<Node>) -> Node {
  let attribute = Node::new(NodeType::JSXAttribute).with(Field::Name, jsx_id(name));
  match value {
    Some(value) => attribute.with(Field::Value, value),
    None => attribute,
  }
}

fn container(expression: Node) -> Node {
  Node::new(NodeType::JSXExpressionContainer).with(Field::Expression, expression)
}

#[test]
fn element_names() {
  check(
    "<a/>",
    expr(jsx_element(jsx_id("a"), vec![], None)),
    &["a:static"],
    Some(&["a:jsx"]),
  );
  check(
    "<A/>",
    expr(jsx_element(jsx_id("A"), vec![], None)),
    &["A:reference"],
    Some(&["A:jsx"]),
  );
  check(
    "<a.b/>",
    expr(jsx_element(
      Node::new(NodeType::JSXMemberExpression)
        .with(Field::Object, jsx_id("a"))
        .with(Field::Property, jsx_id("b")),
      vec![],
      None,
    )),
    &["a:reference", "b:static"],
    Some(&["a:jsx", "b:jsx"]),
  );
  check(
    "<a:b/>",
    expr(jsx_element(
      Node::new(NodeType::JSXNamespacedName)
        .with(Field::Namespace, jsx_id("a"))
        .with(Field::Name, jsx_id("b")),
      vec![],
      None,
    )),
    &["a:static", "b:static"],
    Some(&["a:jsx", "b:jsx"]),
  );
}

#[test]
fn attributes() {
  check(
    "<a b/>",
    expr(jsx_element(jsx_id("a"), vec![attribute("b", None)], None)),
    &["a:static", "b:static"],
    Some(&["a:jsx", "b:jsx"]),
  );
  check(
    "<a b={true}/>",
    expr(jsx_element(
      jsx_id("a"),
      vec![attribute(
        "b",
        Some(container(Node::new(NodeType::BooleanLiteral))),
      )],
      None,
    )),
    &["a:static", "b:static"],
    Some(&["a:jsx", "b:jsx"]),
  );
  check(
    "<A b={c}/>",
    expr(jsx_element(
      jsx_id("A"),
      vec![attribute("b", Some(container(id("c"))))],
      None,
    )),
    &["A:reference", "b:static", "c:reference"],
    Some(&["A:jsx", "b:jsx", "c:javascript"]),
  );
  check(
    "<a {...b}/>",
    expr(jsx_element(
      jsx_id("a"),
      vec![Node::new(NodeType::JSXSpreadAttribute).with(Field::Argument, id("b"))],
      None,
    )),
    &["a:static", "b:reference"],
    Some(&["a:jsx", "b:javascript"]),
  );
}

#[test]
fn children() {
  check(
    "<a>{b}</a>",
    expr(jsx_element(jsx_id("a"), vec![], Some(vec![container(id("b"))]))),
    &["a:static", "b:reference", "a:static"],
    Some(&["a:jsx", "b:javascript", "a:jsx"]),
  );
  check(
    "<a>{...b}</a>",
    expr(jsx_element(
      jsx_id("a"),
      vec![],
      Some(vec![
        Node::new(NodeType::JSXSpreadChild).with(Field::Expression, id("b"))
      ]),
    )),
    &["a:static", "b:reference", "a:static"],
    Some(&["a:jsx", "b:javascript", "a:jsx"]),
  );
}
