/*!

A `Value` is a dynamically typed argument to, or result of, a call through the module surface. There are exactly as
many variants as there are kinds of data the `basics` module traffics in.

Coercion from a `Value` to a parameter's declared type is deliberately narrow:

| declared type | accepts                                 |
|:--------------|:----------------------------------------|
| `int`         | `Int` within the 32-bit signed range    |
| `float`       | `Int` (widened) and `Float`             |
| `Point`       | `Point`                                 |

*/

use std::fmt::{Display, Formatter};
use paste::paste;

use crate::{
  abstractions::IString,
  core::Point
};

#[derive(Clone, PartialEq, Debug, Default)]
pub enum Value {
  #[default]
  None,
  Int(i64),
  Float(f64),
  Str(IString),
  Point(Point),
}

/// The runtime type of a `Value`, named the way the module surface reports it in errors.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum ValueKind {
  None,
  Int,
  Float,
  Str,
  Point,
}

impl ValueKind {
  pub fn name(&self) -> &'static str {
    match self {
      ValueKind::None  => "NoneType",
      ValueKind::Int   => "int",
      ValueKind::Float => "float",
      ValueKind::Str   => "str",
      ValueKind::Point => "Point",
    }
  }
}

impl Display for ValueKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl Value {
  pub fn kind(&self) -> ValueKind {
    match self {
      Value::None     => ValueKind::None,
      Value::Int(_)   => ValueKind::Int,
      Value::Float(_) => ValueKind::Float,
      Value::Str(_)   => ValueKind::Str,
      Value::Point(_) => ValueKind::Point,
    }
  }

  /// Coerces to a 32-bit integer, the width of an `int` parameter.
  pub fn to_int(&self) -> Option<i32> {
    match self {
      Value::Int(i) => i32::try_from(*i).ok(),
      _             => None
    }
  }

  /// Coerces to a float, widening integers.
  pub fn to_float(&self) -> Option<f64> {
    match self {
      Value::Int(i)   => Some(*i as f64),
      Value::Float(f) => Some(*f),
      _               => None
    }
  }

  pub fn to_point(&self) -> Option<Point> {
    match self {
      Value::Point(p) => Some(*p),
      _               => None
    }
  }

  pub fn is_none(&self) -> bool {
    matches!(self, Value::None)
  }
}

/**
Implements `From<$type>` for `Value` producing the `$variant` variant, together with the strict (non-coercing)
accessors `is_$variant` and `as_$variant`, where `$variant` is converted to snake case.

```ignore
implement_value_conversion!(Float, f64);
// Value::from(1.5) == Value::Float(1.5), Value::Float(1.5).is_float(), Value::Float(1.5).as_float() == Some(&1.5)
```
*/
macro_rules! implement_value_conversion {
  ($variant:ident, $type:ty) => {
    paste!{

    impl From<$type> for Value {
      fn from(value: $type) -> Self {
        Value::$variant(value)
      }
    }

    impl Value {
      pub fn [<is_ $variant:snake>](&self) -> bool {
        matches!(self, Value::$variant(_))
      }

      pub fn [<as_ $variant:snake>](&self) -> Option<&$type> {
        match self {
          Value::$variant(value) => Some(value),
          _                      => None
        }
      }
    }

    } // end paste!
  };
}

implement_value_conversion!(Int, i64);
implement_value_conversion!(Float, f64);
implement_value_conversion!(Str, IString);
implement_value_conversion!(Point, Point);

impl From<i32> for Value {
  fn from(value: i32) -> Self {
    Value::Int(value as i64)
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Value::Str(IString::from(value))
  }
}

impl From<(f64, f64)> for Value {
  fn from(coordinates: (f64, f64)) -> Self {
    Value::Point(Point::from(coordinates))
  }
}

impl Display for Value {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Value::None     => write!(f, "None"),
      Value::Int(i)   => write!(f, "{}", i),
      Value::Float(x) => write!(f, "{:?}", x),
      Value::Str(s)   => write!(f, "'{}'", s),
      Value::Point(p) => write!(f, "{}", p),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn conversions_pick_the_right_variant() {
    assert_eq!(Value::from(3), Value::Int(3));
    assert_eq!(Value::from(3i64), Value::Int(3));
    assert_eq!(Value::from(0.5), Value::Float(0.5));
    assert_eq!(Value::from("0.0.1").kind(), ValueKind::Str);
    assert_eq!(Value::from((3.0, 4.0)), Value::Point(Point::new(3.0, 4.0)));
    assert!(Value::default().is_none());
  }

  #[test]
  fn strict_accessors() {
    let value = Value::from(2.5);
    assert!(value.is_float());
    assert!(!value.is_int());
    assert_eq!(value.as_float(), Some(&2.5));
    assert_eq!(value.as_point(), None);
    assert_eq!(Value::from("abc").as_str().map(|s| s.to_string()), Some("abc".to_string()));
  }

  #[test]
  fn coercions() {
    assert_eq!(Value::Int(7).to_float(), Some(7.0));
    assert_eq!(Value::Float(7.0).to_int(), None);
    assert_eq!(Value::Int(i64::from(i32::MAX) + 1).to_int(), None);
    assert_eq!(Value::Int(-12).to_int(), Some(-12));
    assert_eq!(Value::from("1").to_float(), None);
    assert_eq!(Value::Point(Point::ORIGIN).to_point(), Some(Point::ORIGIN));
  }

  #[test]
  fn display() {
    assert_eq!(Value::Float(5.0).to_string(), "5.0");
    assert_eq!(Value::Int(42).to_string(), "42");
    assert_eq!(Value::from("0.0.1").to_string(), "'0.0.1'");
    assert_eq!(Value::from((1.0, 2.0)).to_string(), "Point(1, 2)");
    assert_eq!(ValueKind::None.to_string(), "NoneType");
  }
}
