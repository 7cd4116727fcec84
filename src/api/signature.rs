/*!

A `Signature` is one overload of a function in the module surface: an ordered list of typed, named parameters, some
with default values, and the native body that receives the bound arguments.

## Binding

Binding positional arguments `args` and keyword arguments `kwargs` to the parameter list succeeds when

 1. there are no more positional arguments than parameters,
 2. every keyword names a parameter that is not already bound positionally,
 3. every parameter left unbound has a default, and
 4. every bound value coerces to its parameter's declared type.

Otherwise the signature does not match and overload resolution moves on.

*/

use std::fmt::{Display, Formatter};

use crate::{
  abstractions::{IString, join_string},
  api::{
    call_error::{CallError, CallResult},
    value::Value
  },
  core::Point
};

/// The declared type of a parameter.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum ParameterType {
  Int,
  Float,
  Point,
}

impl ParameterType {
  pub fn name(&self) -> &'static str {
    match self {
      ParameterType::Int   => "int",
      ParameterType::Float => "float",
      ParameterType::Point => "Point",
    }
  }

  /// Converts `value` to the canonical representation of this type, if it is compatible.
  pub fn coerce(&self, value: &Value) -> Option<Value> {
    match self {
      ParameterType::Int   => value.to_int().map(Value::from),
      ParameterType::Float => value.to_float().map(Value::Float),
      ParameterType::Point => value.to_point().map(Value::Point),
    }
  }
}

impl Display for ParameterType {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}


#[derive(Clone, PartialEq, Debug)]
pub struct Parameter {
  pub name   : IString,
  pub ty     : ParameterType,
  pub default: Option<Value>,
}

impl Parameter {
  pub fn new(name: &str, ty: ParameterType) -> Self {
    Parameter {
      name   : IString::from(name),
      ty,
      default: None,
    }
  }

  pub fn with_default(mut self, default: impl Into<Value>) -> Self {
    self.default = Some(default.into());
    self
  }
}

impl Display for Parameter {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match &self.default {
      Some(default) => write!(f, "{}: {} = {}", self.name, self.ty, default),
      None          => write!(f, "{}: {}", self.name, self.ty),
    }
  }
}


/// Arguments after binding, one per parameter in declaration order, each already coerced to its declared type.
#[derive(Clone, PartialEq, Debug)]
pub struct BoundArguments(Vec<Value>);

impl BoundArguments {
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&Value> {
    self.0.get(index)
  }

  pub fn int(&self, index: usize) -> CallResult<i32> {
    let value = self.value(index);
    value.to_int().ok_or(CallError::IncompatibleValue { expected: "int", received: value.kind() })
  }

  pub fn float(&self, index: usize) -> CallResult<f64> {
    let value = self.value(index);
    value.to_float().ok_or(CallError::IncompatibleValue { expected: "float", received: value.kind() })
  }

  pub fn point(&self, index: usize) -> CallResult<Point> {
    let value = self.value(index);
    value.to_point().ok_or(CallError::IncompatibleValue { expected: "Point", received: value.kind() })
  }

  fn value(&self, index: usize) -> &Value {
    static MISSING: Value = Value::None;
    self.0.get(index).unwrap_or(&MISSING)
  }
}


/// The body of an overload.
pub type NativeFn = fn(&BoundArguments) -> CallResult;

#[derive(Clone)]
pub struct Signature {
  pub parameters: Vec<Parameter>,
  pub returns   : &'static str,
  pub native    : NativeFn,
}

impl Signature {
  pub fn new(parameters: Vec<Parameter>, returns: &'static str, native: NativeFn) -> Self {
    Signature { parameters, returns, native }
  }

  /// Binds the arguments to the parameters, returning `None` if this signature does not accept them.
  pub fn bind(&self, args: &[Value], kwargs: &[(&str, Value)]) -> Option<BoundArguments> {
    if args.len() > self.parameters.len() {
      return None;
    }

    let mut slots: Vec<Option<&Value>> = args.iter().map(Some).collect();
    slots.resize(self.parameters.len(), None);

    for (name, value) in kwargs {
      let index = self.parameters.iter().position(|parameter| &*parameter.name == *name)?;
      if slots[index].is_some() {
        return None;
      }
      slots[index] = Some(value);
    }

    self.parameters
        .iter()
        .zip(slots)
        .map(|(parameter, slot)| {
          let value = slot.or(parameter.default.as_ref())?;
          parameter.ty.coerce(value)
        })
        .collect::<Option<Vec<Value>>>()
        .map(BoundArguments)
  }

  pub fn invoke(&self, arguments: &BoundArguments) -> CallResult {
    (self.native)(arguments)
  }

  /// Renders the signature as it would be declared under the given name.
  pub fn repr(&self, name: &str) -> String {
    format!("{}({}) -> {}", name, join_string(self.parameters.iter(), ", "), self.returns)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn lerp_signature() -> Signature {
    Signature::new(
      vec![
        Parameter::new("left", ParameterType::Float),
        Parameter::new("right", ParameterType::Float),
        Parameter::new("alpha", ParameterType::Float).with_default(0.5),
      ],
      "float",
      |args| Ok(Value::Float(args.float(0)? + (args.float(1)? - args.float(0)?) * args.float(2)?))
    )
  }

  #[test]
  fn binds_positionally_with_defaults() {
    let signature = lerp_signature();
    let bound = signature.bind(&[Value::Int(1), 3.0.into()], &[]).unwrap();
    assert_eq!(bound.len(), 3);
    // The integer was widened.
    assert_eq!(bound.get(0), Some(&Value::Float(1.0)));
    assert_eq!(bound.get(2), Some(&Value::Float(0.5)));
    assert_eq!(signature.invoke(&bound), Ok(Value::Float(2.0)));
  }

  #[test]
  fn binds_keywords() {
    let signature = lerp_signature();
    let bound = signature.bind(&[0.0.into()], &[("alpha", 0.25.into()), ("right", 8.0.into())]).unwrap();
    assert_eq!(signature.invoke(&bound), Ok(Value::Float(2.0)));
  }

  #[test]
  fn rejects_mismatches() {
    let signature = lerp_signature();
    // Too many positional arguments.
    assert!(signature.bind(&[1.0.into(), 2.0.into(), 3.0.into(), 4.0.into()], &[]).is_none());
    // Missing required argument.
    assert!(signature.bind(&[1.0.into()], &[]).is_none());
    // Unknown keyword.
    assert!(signature.bind(&[1.0.into(), 2.0.into()], &[("beta", 0.1.into())]).is_none());
    // Keyword duplicates a positional argument.
    assert!(signature.bind(&[1.0.into(), 2.0.into()], &[("left", 0.1.into())]).is_none());
    // Wrong type.
    assert!(signature.bind(&["one".into(), 2.0.into()], &[]).is_none());
  }

  #[test]
  fn int_parameters_are_32_bit() {
    let signature = Signature::new(vec![Parameter::new("a", ParameterType::Int)], "int", |args| {
      Ok(Value::from(args.int(0)?))
    });
    assert!(signature.bind(&[Value::Int(i64::from(i32::MAX))], &[]).is_some());
    assert!(signature.bind(&[Value::Int(i64::from(i32::MAX) + 1)], &[]).is_none());
    assert!(signature.bind(&[Value::Float(1.0)], &[]).is_none());
  }

  #[test]
  fn accessors_report_kind_mismatch() {
    let bound = BoundArguments(vec![Value::Float(1.0)]);
    assert_eq!(bound.float(0), Ok(1.0));
    assert_eq!(
      bound.point(0),
      Err(CallError::IncompatibleValue { expected: "Point", received: crate::api::ValueKind::Float })
    );
    assert_eq!(
      bound.int(3),
      Err(CallError::IncompatibleValue { expected: "int", received: crate::api::ValueKind::None })
    );
  }

  #[test]
  fn repr() {
    assert_eq!(
      lerp_signature().repr("weighted_midpoint"),
      "weighted_midpoint(left: float, right: float, alpha: float = 0.5) -> float"
    );
  }
}
