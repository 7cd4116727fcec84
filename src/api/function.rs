/*!

A `Function` is a named, overloaded callable of the module surface. Overloads are tried in the order they were
registered, and the first whose signature binds the arguments is invoked. If none does, the error lists every
supported signature together with the arguments actually received.

*/

use std::fmt::{Display, Formatter};

use crate::{
  abstractions::{IString, join_string},
  api::{
    call_error::{CallError, CallResult},
    signature::{NativeFn, Parameter, Signature},
    value::Value
  },
  debug,
  trace,
};

#[derive(Clone)]
pub struct Function {
  pub name     : IString,
  pub overloads: Vec<Signature>,
}

impl Function {
  pub fn new(name: &str) -> Self {
    Function {
      name     : IString::from(name),
      overloads: Vec::new(),
    }
  }

  /// Adds an overload. Earlier overloads take precedence.
  pub fn overload(mut self, parameters: Vec<Parameter>, returns: &'static str, native: NativeFn) -> Self {
    self.overloads.push(Signature::new(parameters, returns, native));
    self
  }

  pub fn call(&self, args: &[Value], kwargs: &[(&str, Value)]) -> CallResult {
    for (index, signature) in self.overloads.iter().enumerate() {
      if let Some(bound) = signature.bind(args, kwargs) {
        trace!(5, "{}: resolved to overload {} of {}", self.name, index + 1, self.overloads.len());
        return signature.invoke(&bound);
      }
    }

    let received = describe_arguments(args, kwargs);
    debug!(4, "{}: no overload accepts ({})", self.name, received);
    Err(
      CallError::IncompatibleArguments {
        function  : self.name.clone(),
        received,
        signatures: self.signatures(),
      }
    )
  }

  pub fn signatures(&self) -> Vec<String> {
    self.overloads.iter().map(|signature| signature.repr(&self.name)).collect()
  }
}

impl Display for Function {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", join_string(self.signatures().iter(), "\n"))
  }
}

/// Renders call arguments as `1.0, Point(3, 4); kwargs: alpha=0.25`.
fn describe_arguments(args: &[Value], kwargs: &[(&str, Value)]) -> String {
  let positional = join_string(args.iter(), ", ");
  if kwargs.is_empty() {
    return positional;
  }

  let keywords = join_string(kwargs.iter().map(|(name, value)| format!("{}={}", name, value)), ", ");
  format!("{}; kwargs: {}", positional, keywords)
}
