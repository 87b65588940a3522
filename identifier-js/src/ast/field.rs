use ahash::HashMap;
use ahash::HashMapExt;
use once_cell::sync::Lazy;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

macro_rules! fields {
  ($($variant:ident => $name:literal),* $(,)?) => {
    /// Name of the structural slot through which a parent holds a child, e.g. the `property` of a
    /// `MemberExpression`. List slots (`params`, `elements`) name the whole list, not an index.
    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    pub enum Field {
      $($variant,)*
      Other(String),
    }

    impl Field {
      pub fn as_str(&self) -> &str {
        match self {
          $(Field::$variant => $name,)*
          Field::Other(name) => name,
        }
      }
    }

    static FIELDS: Lazy<HashMap<&'static str, Field>> = Lazy::new(|| {
      let mut map = HashMap::<&'static str, Field>::new();
      $(map.insert($name, Field::$variant);)*
      map
    });
  };
}

fields! {
  Argument => "argument",
  Attributes => "attributes",
  Body => "body",
  Children => "children",
  ClosingElement => "closingElement",
  Constraint => "constraint",
  Declaration => "declaration",
  Declarations => "declarations",
  Elements => "elements",
  Expression => "expression",
  ExprName => "exprName",
  Exported => "exported",
  Id => "id",
  Imported => "imported",
  Init => "init",
  Key => "key",
  Label => "label",
  Left => "left",
  Local => "local",
  Meta => "meta",
  Name => "name",
  Namespace => "namespace",
  Object => "object",
  OpeningElement => "openingElement",
  Param => "param",
  Parameters => "parameters",
  Params => "params",
  Program => "program",
  Properties => "properties",
  Property => "property",
  Qualification => "qualification",
  Right => "right",
  Source => "source",
  Specifiers => "specifiers",
  SuperClass => "superClass",
  SuperTypeParameters => "superTypeParameters",
  TypeAnnotation => "typeAnnotation",
  TypeName => "typeName",
  TypeParameter => "typeParameter",
  TypeParameters => "typeParameters",
  Value => "value",
}

impl Field {
  pub fn known(name: &str) -> Option<Field> {
    FIELDS.get(name).cloned()
  }
}

impl From<&str> for Field {
  fn from(name: &str) -> Self {
    Field::known(name).unwrap_or_else(|| Field::Other(name.to_string()))
  }
}

impl Display for Field {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
