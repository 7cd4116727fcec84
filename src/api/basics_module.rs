/*!

The `basics` module: the crate's functions, the `Point` class, and the module constants, registered under the names
and call conventions existing callers use.

```text
module basics
  PI = 3.141592653589793
  __version__ = '0.0.1'
  answer() -> int
  midpoint(left: float, right: float) -> float
  sum(a: int, b: int) -> int
  weighted_midpoint(left: float, right: float, alpha: float = 0.5) -> float
  class Point
    Point() -> Point
    Point(x: float, y: float) -> Point
    distance_to(self: Point, x: float, y: float) -> float
    distance_to(self: Point, other: Point) -> float
    length (read-only, derived)
    x (read-write)
    y (read-write)
    origin = Point(0, 0)
```

The module is built once, on first access, and is immutable afterward.

*/

use once_cell::sync::Lazy;

use crate::{
  api::{
    call_error::{CallError, CallResult},
    class::{Class, Member},
    function::Function,
    module::Module,
    signature::{Parameter, ParameterType},
    value::{Value, ValueKind}
  },
  core::{
    answer,
    midpoint,
    sum,
    weighted_midpoint,
    Point,
    DEFAULT_ALPHA,
    PI,
    VERSION
  },
  trace,
};

static BASICS: Lazy<Module> = Lazy::new(build_basics_module);

/// The process-wide `basics` module.
pub fn basics() -> &'static Module {
  &BASICS
}

fn build_basics_module() -> Module {
  use ParameterType::{Float, Int};

  let mut module = Module::new("basics");

  // Functions
  module
      .def(
        Function::new("answer")
            .overload(vec![], "int", |_| Ok(answer().into()))
      )
      .def(
        Function::new("sum")
            .overload(
              vec![Parameter::new("a", Int), Parameter::new("b", Int)],
              "int",
              |args| Ok(sum(args.int(0)?, args.int(1)?).into())
            )
      )
      .def(
        Function::new("midpoint")
            .overload(
              vec![Parameter::new("left", Float), Parameter::new("right", Float)],
              "float",
              |args| Ok(midpoint(args.float(0)?, args.float(1)?).into())
            )
      )
      .def(
        Function::new("weighted_midpoint")
            .overload(
              vec![
                Parameter::new("left", Float),
                Parameter::new("right", Float),
                Parameter::new("alpha", Float).with_default(DEFAULT_ALPHA),
              ],
              "float",
              |args| Ok(weighted_midpoint(args.float(0)?, args.float(1)?, args.float(2)?).into())
            )
      );

  // Classes
  module.add_class(point_class());

  // Module-level attributes
  module
      .add_constant("PI", *PI)
      .add_constant("__version__", VERSION);

  trace!(5, "built module {} with {} functions", module.name, module.functions.len());
  module
}

fn point_class() -> Class {
  let constructor = Function::new("Point")
      .overload(vec![], "Point", |_| Ok(Point::default().into()))
      .overload(
        vec![Parameter::new("x", ParameterType::Float), Parameter::new("y", ParameterType::Float)],
        "Point",
        |args| Ok(Point::new(args.float(0)?, args.float(1)?).into())
      );

  let mut class = Class::new(ValueKind::Point, constructor);
  class
      .def(
        Function::new("distance_to")
            .overload(
              vec![
                receiver_parameter(),
                Parameter::new("x", ParameterType::Float),
                Parameter::new("y", ParameterType::Float),
              ],
              "float",
              |args| Ok(args.point(0)?.distance_to_coordinates(args.float(1)?, args.float(2)?).into())
            )
            .overload(
              vec![receiver_parameter(), Parameter::new("other", ParameterType::Point)],
              "float",
              |args| Ok(args.point(0)?.distance_to_point(&args.point(1)?).into())
            )
      )
      .def_member(Member::read_write(
        "x",
        |receiver| Ok(as_point(receiver)?.x.into()),
        |receiver, value| {
          as_point_mut(receiver)?.x = as_coordinate(value)?;
          Ok(())
        }
      ))
      .def_member(Member::read_write(
        "y",
        |receiver| Ok(as_point(receiver)?.y.into()),
        |receiver, value| {
          as_point_mut(receiver)?.y = as_coordinate(value)?;
          Ok(())
        }
      ))
      .def_member(Member::derived("length", |receiver| Ok(as_point(receiver)?.length().into())))
      .add_constant("origin", Point::ORIGIN);

  class
}

fn receiver_parameter() -> Parameter {
  Parameter::new("self", ParameterType::Point)
}

fn as_point(value: &Value) -> CallResult<Point> {
  value.to_point().ok_or(CallError::IncompatibleValue { expected: "Point", received: value.kind() })
}

fn as_point_mut(value: &mut Value) -> CallResult<&mut Point> {
  let received = value.kind();
  match value {
    Value::Point(point) => Ok(point),
    _                   => Err(CallError::IncompatibleValue { expected: "Point", received })
  }
}

fn as_coordinate(value: &Value) -> CallResult<f64> {
  value.to_float().ok_or(CallError::IncompatibleValue { expected: "float", received: value.kind() })
}


#[cfg(test)]
mod tests {
  use super::*;

  fn float(value: CallResult) -> f64 {
    match value {
      Ok(Value::Float(x)) => x,
      other               => panic!("expected a float, got {:?}", other),
    }
  }

  fn new_point(x: f64, y: f64) -> Value {
    basics().call("Point", &[x.into(), y.into()], &[]).unwrap()
  }

  #[test]
  fn functions() {
    let module = basics();
    assert_eq!(module.call("answer", &[], &[]), Ok(Value::Int(42)));
    assert_eq!(module.call("sum", &[Value::Int(2), Value::Int(40)], &[]), Ok(Value::Int(42)));
    assert_eq!(module.call("sum", &[], &[("b", Value::Int(1)), ("a", Value::Int(-1))]), Ok(Value::Int(0)));
    assert_eq!(float(module.call("midpoint", &[1.0.into(), 4.0.into()], &[])), 2.5);
    assert_eq!(float(module.call("midpoint", &[], &[("right", 4.0.into()), ("left", 1.0.into())])), 2.5);
  }

  #[test]
  fn weighted_midpoint_default_and_keyword() {
    let module = basics();
    let args = [Value::Int(2), Value::Int(6)];
    assert_eq!(float(module.call("weighted_midpoint", &args, &[])), 4.0);
    assert_eq!(float(module.call("weighted_midpoint", &args, &[("alpha", 0.25.into())])), 3.0);
    assert_eq!(float(module.call("weighted_midpoint", &[2.0.into(), 6.0.into(), 1.5.into()], &[])), 8.0);
    assert_eq!(
      float(module.call("weighted_midpoint", &args, &[("alpha", 0.5.into())])),
      float(module.call("midpoint", &args, &[]))
    );
  }

  #[test]
  fn incompatible_arguments() {
    let module = basics();
    // `int` parameters do not accept floats.
    assert!(matches!(
      module.call("sum", &[1.5.into(), Value::Int(1)], &[]),
      Err(CallError::IncompatibleArguments { .. })
    ));
    // Out of range for a 32-bit int.
    assert!(module.call("sum", &[Value::Int(1 << 40), Value::Int(1)], &[]).is_err());
    assert!(module.call("answer", &[Value::Int(1)], &[]).is_err());
    assert!(module.call("midpoint", &[1.0.into()], &[("alpha", 0.5.into())]).is_err());
    assert!(module.call("weighted_midpoint", &[1.0.into(), "2".into()], &[]).is_err());
    assert!(matches!(module.call("mean", &[], &[]), Err(CallError::UndefinedName { .. })));
  }

  #[test]
  fn constants() {
    let module = basics();
    assert!((float(module.attr("PI")) - std::f64::consts::PI).abs() <= f64::EPSILON);
    assert_eq!(module.attr("__version__"), Ok(Value::from("0.0.1")));
  }

  #[test]
  fn point_construction_and_members() {
    let module = basics();
    let origin = module.call("Point", &[], &[]).unwrap();
    assert_eq!(module.get_member(&origin, "x"), Ok(Value::Float(0.0)));
    assert_eq!(module.get_member(&origin, "y"), Ok(Value::Float(0.0)));

    let p = module.call("Point", &[], &[("y", Value::Int(4)), ("x", Value::Int(3))]).unwrap();
    assert_eq!(float(module.get_member(&p, "length")), 5.0);
    // Only the two-argument form exists besides the default constructor.
    assert!(module.call("Point", &[1.0.into()], &[]).is_err());
  }

  #[test]
  fn point_distance_overloads() {
    let module = basics();
    let origin = new_point(0.0, 0.0);
    let p      = new_point(3.0, 4.0);

    assert_eq!(float(module.call_method(&origin, "distance_to", &[p.clone()], &[])), 5.0);
    assert_eq!(float(module.call_method(&p, "distance_to", &[Value::Int(0), Value::Int(0)], &[])), 5.0);
    assert_eq!(float(module.call_method(&p, "distance_to", &[], &[("other", origin.clone())])), 5.0);
    assert_eq!(float(module.call_method(&p, "distance_to", &[3.0.into()], &[("y", 4.0.into())])), 0.0);
    assert_eq!(float(module.call_method(&p, "distance_to", &[p.clone()], &[])), 0.0);

    assert!(module.call_method(&p, "distance_to", &[], &[]).is_err());
    assert!(matches!(
      module.call_method(&p, "rotate", &[], &[]),
      Err(CallError::UndefinedMember { .. })
    ));
  }

  #[test]
  fn point_mutation_is_local() {
    let module = basics();
    let mut p = module.get_member(&new_point(1.0, 1.0), "origin").unwrap();
    let q = p.clone();

    module.set_member(&mut p, "x", &Value::Int(6)).unwrap();
    module.set_member(&mut p, "y", &8.0.into()).unwrap();
    assert_eq!(float(module.get_member(&p, "length")), 10.0);

    assert_eq!(q, Value::Point(Point::ORIGIN));
    let origin = module.class("Point").and_then(|class| class.constant("origin"));
    assert_eq!(origin, Ok(Value::Point(Point::ORIGIN)));
  }

  #[test]
  fn read_only_members() {
    let module = basics();
    let mut p = new_point(3.0, 4.0);

    assert!(matches!(
      module.set_member(&mut p, "length", &1.0.into()),
      Err(CallError::ReadOnlyMember { .. })
    ));
    assert!(matches!(
      module.set_member(&mut p, "origin", &new_point(1.0, 1.0)),
      Err(CallError::ReadOnlyMember { .. })
    ));
    assert!(matches!(
      module.set_member(&mut p, "x", &"three".into()),
      Err(CallError::IncompatibleValue { expected: "float", .. })
    ));
    assert!(matches!(
      module.set_member(&mut p, "z", &1.0.into()),
      Err(CallError::UndefinedMember { .. })
    ));
    assert_eq!(p, Value::Point(Point::new(3.0, 4.0)));
  }

  #[test]
  fn listing() {
    let listing = basics().to_string();
    assert!(listing.starts_with("module basics\n"));
    assert!(listing.contains("weighted_midpoint(left: float, right: float, alpha: float = 0.5) -> float"));
    assert!(listing.contains("distance_to(self: Point, other: Point) -> float"));
    assert!(listing.contains("origin = Point(0, 0)"));
    assert!(listing.contains("__version__ = '0.0.1'"));
  }
}
