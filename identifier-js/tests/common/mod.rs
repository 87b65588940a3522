#![allow(dead_code)]

use identifier_js::ast::Field;
use identifier_js::ast::Node;
use identifier_js::ast::NodeType;
use identifier_js::classify_identifiers;
use similar::ChangeTag;
use similar::TextDiff;

pub fn id(name: &str) -> Node {
  Node::identifier(name)
}

pub fn jsx_id(name: &str) -> Node {
  Node::jsx_identifier(name)
}

pub fn other(field: &str) -> Field {
  Field::Other(field.to_string())
}

pub fn program(body: Vec<Node>) -> Node {
  Node::new(NodeType::File).with(
    Field::Program,
    Node::new(NodeType::Program).with_list(Field::Body, body),
  )
}

pub fn expr(expression: Node) -> Node {
  Node::new(NodeType::ExpressionStatement).with(Field::Expression, expression)
}

pub fn block() -> Node {
  Node::new(NodeType::BlockStatement).with_list(Field::Body, vec![])
}

pub fn string() -> Node {
  Node::new(NodeType::StringLiteral)
}

pub fn member(object: Node, property: Node, computed: bool) -> Node {
  Node::new(NodeType::MemberExpression)
    .computed(computed)
    .with(Field::Object, object)
    .with(Field::Property, property)
}

pub fn object(properties: Vec<Node>) -> Node {
  Node::new(NodeType::ObjectExpression).with_list(Field::Properties, properties)
}

pub fn array(elements: Vec<Node>) -> Node {
  Node::new(NodeType::ArrayExpression).with_list(Field::Elements, elements)
}

pub fn property(key: Node, value: Node, computed: bool) -> Node {
  Node::new(NodeType::ObjectProperty)
    .computed(computed)
    .with(Field::Key, key)
    .with(Field::Value, value)
}

/// `{a}` in a pattern: Babel gives the shorthand property two copies of the same identifier.
pub fn shorthand(name: &str) -> Node {
  property(id(name), id(name), false)
}

pub fn object_pattern(properties: Vec<Node>) -> Node {
  Node::new(NodeType::ObjectPattern).with_list(Field::Properties, properties)
}

pub fn array_pattern(elements: Vec<Node>) -> Node {
  Node::new(NodeType::ArrayPattern).with_list(Field::Elements, elements)
}

pub fn rest(argument: Node) -> Node {
  Node::new(NodeType::RestElement).with(Field::Argument, argument)
}

pub fn default_value(left: Node, right: Node) -> Node {
  Node::new(NodeType::AssignmentPattern)
    .with(Field::Left, left)
    .with(Field::Right, right)
}

pub fn assign(left: Node, right: Node) -> Node {
  Node::new(NodeType::AssignmentExpression)
    .with(Field::Left, left)
    .with(Field::Right, right)
}

pub fn declarator(target: Node, init: Option<Node>) -> Node {
  let declarator = Node::new(NodeType::VariableDeclarator).with(Field::Id, target);
  match init {
    Some(init) => declarator.with(Field::Init, init),
    None => declarator,
  }
}

/// `let <target> = <init>`.
pub fn let_decl(target: Node, init: Option<Node>) -> Node {
  Node::new(NodeType::VariableDeclaration)
    .with_list(Field::Declarations, vec![declarator(target, init)])
}

pub fn function(typ: NodeType, name: Option<&str>, params: Vec<Node>) -> Node {
  let function = Node::new(typ);
  let function = match name {
    Some(name) => function.with(Field::Id, id(name)),
    None => function,
  };
  function
    .with_list(Field::Params, params)
    .with(Field::Body, block())
}

pub fn class(typ: NodeType, name: &str) -> Node {
  Node::new(typ).with(Field::Id, id(name))
}

pub fn class_body() -> Node {
  Node::new(NodeType::ClassBody).with_list(Field::Body, vec![])
}

pub fn import(specifiers: Vec<Node>) -> Node {
  Node::new(NodeType::ImportDeclaration)
    .with_list(Field::Specifiers, specifiers)
    .with(Field::Source, string())
}

pub fn import_specifier(local: &str, imported: &str) -> Node {
  Node::new(NodeType::ImportSpecifier)
    .with(Field::Local, id(local))
    .with(Field::Imported, id(imported))
}

pub fn export_named(specifiers: Vec<Node>, from_module: bool) -> Node {
  let export =
    Node::new(NodeType::ExportNamedDeclaration).with_list(Field::Specifiers, specifiers);
  if from_module {
    export.with(Field::Source, string())
  } else {
    export
  }
}

pub fn export_specifier(local: &str, exported: &str) -> Node {
  Node::new(NodeType::ExportSpecifier)
    .with(Field::Local, id(local))
    .with(Field::Exported, id(exported))
}

pub fn generic(name: &str) -> Node {
  Node::new(NodeType::GenericTypeAnnotation).with(Field::Id, id(name))
}

pub fn flow_object_type(properties: Vec<Node>) -> Node {
  Node::new(NodeType::ObjectTypeAnnotation).with_list(Field::Properties, properties)
}

pub fn type_alias(name: &str, right: Node) -> Node {
  Node::new(NodeType::TypeAlias)
    .with(Field::Id, id(name))
    .with(Field::Right, right)
}

pub fn flow_type_params(params: Vec<Node>) -> Node {
  Node::new(NodeType::TypeParameterDeclaration).with_list(Field::Params, params)
}

pub fn flow_type_param(name: &str) -> Node {
  Node::new(NodeType::TypeParameter).named(name)
}

pub fn ts_ref(name: &str) -> Node {
  Node::new(NodeType::TSTypeReference).with(Field::TypeName, id(name))
}

pub fn ts_type_params(params: Vec<Node>) -> Node {
  Node::new(NodeType::TSTypeParameterDeclaration).with_list(Field::Params, params)
}

pub fn ts_type_param(name: &str) -> Node {
  Node::new(NodeType::TSTypeParameter).named(name)
}

pub fn ts_annotation(annotation: Node) -> Node {
  Node::new(NodeType::TSTypeAnnotation).with(Field::TypeAnnotation, annotation)
}

pub fn jsx_element(name: Node, attributes: Vec<Node>, children: Option<Vec<Node>>) -> Node {
  let opening = Node::new(NodeType::JSXOpeningElement)
    .with(Field::Name, name.clone())
    .with_list(Field::Attributes, attributes);
  let element = Node::new(NodeType::JSXElement).with(Field::OpeningElement, opening);
  match children {
    None => element.with_list(Field::Children, vec![]),
    Some(children) => element.with_list(Field::Children, children).with(
      Field::ClosingElement,
      Node::new(NodeType::JSXClosingElement).with(Field::Name, name),
    ),
  }
}

/// `name:kind` and `name:grammar` labels of every identifier in `tree`, in visit order.
pub fn labels(tree: &Node) -> (Vec<String>, Vec<String>) {
  let identifiers = classify_identifiers(tree).unwrap();
  let kinds = identifiers
    .iter()
    .map(|id| format!("{}:{}", id.name, id.kind))
    .collect();
  let grammars = identifiers
    .iter()
    .map(|id| format!("{}:{}", id.name, id.grammar))
    .collect();
  (kinds, grammars)
}

fn render(lines: &[String]) -> String {
  lines.iter().map(|l| format!("{l}\n")).collect()
}

fn assert_lines(case: &str, axis: &str, expected: &[&str], actual: &[String]) {
  let expected: Vec<String> = expected.iter().map(|l| l.to_string()).collect();
  if expected == actual {
    return;
  }
  let expected_fmt = render(&expected);
  let actual_fmt = render(actual);
  let mut msg = format!("Failed {} ({}), got:\n", case, axis);
  let diff = TextDiff::from_lines(&expected_fmt, &actual_fmt);
  for change in diff.iter_all_changes() {
    let sign = match change.tag() {
      ChangeTag::Delete => "-",
      ChangeTag::Insert => "+",
      ChangeTag::Equal => " ",
    };
    msg.push_str(sign);
    msg.push_str(change.as_str().unwrap());
  }
  panic!("{}", msg);
}

/// Checks kind labels and, when given, grammar labels. A grammar of `None` means every identifier
/// is expected to be JavaScript.
pub fn check(case: &str, tree: Node, kinds: &[&str], grammars: Option<&[&str]>) {
  let (actual_kinds, actual_grammars) = labels(&tree);
  assert_lines(case, "kind", kinds, &actual_kinds);
  match grammars {
    Some(grammars) => assert_lines(case, "grammar", grammars, &actual_grammars),
    None => {
      let all_js: Vec<String> = actual_kinds
        .iter()
        .map(|label| {
          let name = label.rsplit_once(':').map_or(label.as_str(), |(n, _)| n);
          format!("{name}:javascript")
        })
        .collect();
      let all_js: Vec<&str> = all_js.iter().map(String::as_str).collect();
      assert_lines(case, "grammar", &all_js, &actual_grammars);
    }
  }
}
