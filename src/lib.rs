/*!

Arithmetic and 2D point utilities.

```
use basics::{answer, sum, midpoint, weighted_midpoint, Point, PI, VERSION};

assert_eq!(answer(), 42);
assert_eq!(sum(40, 2), 42);
assert_eq!(midpoint(1.0, 2.0), 1.5);
assert_eq!(weighted_midpoint(1.0, 2.0, None), midpoint(1.0, 2.0));
assert_eq!(Point::new(3.0, 4.0).distance_to(Point::ORIGIN), 5.0);
assert!((*PI - std::f64::consts::PI).abs() < 1e-15);
assert_eq!(VERSION, "0.0.1");
```

The same surface is reachable by name through the `basics` module in `api`, for callers that address functions,
members, and constants by their names and pass keyword arguments.

*/

pub mod abstractions;
pub mod api;
pub mod core;

// We re-export abstractions that are meant to be used publicly.
pub use abstractions::{
  log,
  IString
};

pub use crate::core::{
  answer,
  sum,
  midpoint,
  weighted_midpoint,
  DistanceTarget,
  Point,
  ANSWER,
  DEFAULT_ALPHA,
  PI,
  VERSION
};

pub use api::{
  basics,
  CallError,
  CallResult,
  Module,
  Value
};
