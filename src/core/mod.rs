/*!

The computational surface of the crate: a handful of stateless scalar functions, the `Point` value type, and the
process-wide constants `PI` and `VERSION`. Nothing in here allocates, blocks, logs, or fails.

| name                | signature                                       |
|:--------------------|:------------------------------------------------|
| `answer`            | `() -> i32`                                     |
| `sum`               | `(a: i32, b: i32) -> i32`                       |
| `midpoint`          | `(left: f64, right: f64) -> f64`                |
| `weighted_midpoint` | `(left: f64, right: f64, alpha = 0.5) -> f64`   |
| `Point`             | `x`, `y`, `length`, `distance_to`, `ORIGIN`     |

*/

mod arithmetic;
mod point;

use once_cell::sync::Lazy;

pub use arithmetic::{answer, sum, midpoint, weighted_midpoint, ANSWER, DEFAULT_ALPHA};
pub use point::{Point, DistanceTarget};

/// π, computed once as `acos(-1)`. Bit-for-bit equal to `std::f64::consts::PI`.
pub static PI: Lazy<f64> = Lazy::new(|| (-1.0f64).acos());

/// The semantic version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pi_is_full_precision() {
    assert_eq!(PI.to_bits(), std::f64::consts::PI.to_bits());
    assert!((*PI - 3.14159265358979).abs() < 1e-14);
  }

  #[test]
  fn version_is_semantic() {
    assert_eq!(VERSION, "0.0.1");
    assert_eq!(VERSION.split('.').count(), 3);
  }
}
