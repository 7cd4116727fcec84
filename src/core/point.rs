/*!

A `Point` is a location in the Euclidean plane. It is a plain `Copy` value: every binding holds its own coordinates,
so mutating one point never affects another, including the one returned by `Point::origin()`.

`distance_to` is overloaded on its argument through `DistanceTarget`, which accepts either a coordinate pair or
another point:

```
use basics::Point;

let p = Point::new(3.0, 4.0);
assert_eq!(p.length(), 5.0);
assert_eq!(p.distance_to((0.0, 0.0)), 5.0);
assert_eq!(Point::ORIGIN.distance_to(p), 5.0);
```

*/

use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

/// The argument of `Point::distance_to`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum DistanceTarget {
  Coordinates {
    x: f64,
    y: f64
  },
  Point(Point)
}

impl Point {
  /// The point `(0, 0)`.
  pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

  pub const fn new(x: f64, y: f64) -> Self {
    Point { x, y }
  }

  /// A fresh copy of `Point::ORIGIN`.
  pub const fn origin() -> Self {
    Self::ORIGIN
  }

  /// The Euclidean norm, i.e. the distance from the origin.
  pub fn length(&self) -> f64 {
    (self.x * self.x + self.y * self.y).sqrt()
  }

  pub fn distance_to(&self, target: impl Into<DistanceTarget>) -> f64 {
    match target.into() {
      DistanceTarget::Coordinates { x, y } => self.distance_to_coordinates(x, y),
      DistanceTarget::Point(other)         => self.distance_to_point(&other),
    }
  }

  pub fn distance_to_coordinates(&self, other_x: f64, other_y: f64) -> f64 {
    let dx = self.x - other_x;
    let dy = self.y - other_y;
    (dx * dx + dy * dy).sqrt()
  }

  pub fn distance_to_point(&self, other: &Point) -> f64 {
    self.distance_to_coordinates(other.x, other.y)
  }
}

impl From<(f64, f64)> for Point {
  fn from((x, y): (f64, f64)) -> Self {
    Point { x, y }
  }
}

impl Display for Point {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "Point({}, {})", self.x, self.y)
  }
}

impl From<(f64, f64)> for DistanceTarget {
  fn from((x, y): (f64, f64)) -> Self {
    DistanceTarget::Coordinates { x, y }
  }
}

impl From<Point> for DistanceTarget {
  fn from(point: Point) -> Self {
    DistanceTarget::Point(point)
  }
}

impl From<&Point> for DistanceTarget {
  fn from(point: &Point) -> Self {
    DistanceTarget::Point(*point)
  }
}
