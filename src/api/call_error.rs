/*!

Failures at the call boundary of the module surface. The underlying functions never fail; every error here means the
caller named something that does not exist, or passed arguments that no overload accepts.

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::{
  abstractions::IString,
  api::value::ValueKind
};

pub type CallResult<T = crate::api::Value> = Result<T, CallError>;

#[derive(Clone, PartialEq)]
pub enum CallError {
  /// The module has no function, class, or constant by this name.
  UndefinedName {
    module: IString,
    name  : IString
  },
  /// The class has no method, member, or constant by this name.
  UndefinedMember {
    class: IString,
    name : IString
  },
  /// No overload of the function accepts the given arguments.
  IncompatibleArguments {
    function  : IString,
    received  : String,
    signatures: Vec<String>
  },
  /// Assignment to a member that has no setter, or to a class constant.
  ReadOnlyMember {
    class: IString,
    name : IString
  },
  /// A value of the wrong kind was assigned to a member or found in argument position.
  IncompatibleValue {
    expected: &'static str,
    received: ValueKind
  },
}

impl Display for CallError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      CallError::UndefinedName { module, name } => {
        write!(f, "module '{}' has no attribute '{}'", module, name)
      }

      CallError::UndefinedMember { class, name } => {
        write!(f, "'{}' object has no attribute '{}'", class, name)
      }

      CallError::IncompatibleArguments { function, received, signatures } => {
        write!(
          f,
          "{}(): incompatible function arguments. The following argument types are supported:",
          function
        )?;
        for (index, signature) in signatures.iter().enumerate() {
          write!(f, "\n    {}. {}", index + 1, signature)?;
        }
        write!(f, "\n\nInvoked with: {}", received)
      } // end `CallError::IncompatibleArguments` branch

      CallError::ReadOnlyMember { class, name } => {
        write!(f, "can't set attribute '{}' of '{}'", name, class)
      }

      CallError::IncompatibleValue { expected, received } => {
        write!(f, "expected a value of type '{}', got '{}'", expected, received)
      }

    } // end match on `CallError`
  }
}

impl Debug for CallError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for CallError {}
