use crate::error::ClassifyError;
use crate::error::ClassifyErrorType;
use crate::error::LoadError;
use crate::error::LoadErrorType;
use serde::Serialize;

/// A location within the source file the tree was parsed from, as byte offsets.
///
/// Trees built by hand (or loaded without `start`/`end`) carry `Loc(0, 0)`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Loc(pub usize, pub usize);

impl Loc {
  pub fn classify_error(self, typ: ClassifyErrorType) -> ClassifyError {
    ClassifyError::new(typ, self)
  }

  pub fn load_error(self, typ: LoadErrorType) -> LoadError {
    LoadError::new(typ, self)
  }
}
