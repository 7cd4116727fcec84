/*!

Scalar functions. All of them are pure closed-form expressions. The exact expression forms below are part of the
contract: `midpoint` is computed in displaced form rather than as `(left + right) / 2`, which keeps its rounding
behavior for inputs of extreme magnitude, and `weighted_midpoint` with an `alpha` of one half rounds identically.

*/

/// The value returned by `answer`.
pub const ANSWER: i32 = 42;

/// The interpolation parameter `weighted_midpoint` uses when none is given.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Returns the constant 42.
pub fn answer() -> i32 {
  ANSWER
}

/// Integer addition. Overflow wraps around.
pub fn sum(a: i32, b: i32) -> i32 {
  a.wrapping_add(b)
}

/// The arithmetic mean of `left` and `right`, computed as `left + (right - left) / 2`.
pub fn midpoint(left: f64, right: f64) -> f64 {
  left + (right - left) / 2.0
}

/**
Linear interpolation between `left` and `right`, computed as `left + (right - left) * alpha`.

`alpha` may be omitted by passing `None`, in which case `DEFAULT_ALPHA` is used and the result equals
`midpoint(left, right)`. Values of `alpha` outside of `[0, 1]` extrapolate.

```
use basics::{weighted_midpoint, midpoint};

assert_eq!(weighted_midpoint(2.0, 6.0, 0.25), 3.0);
assert_eq!(weighted_midpoint(2.0, 6.0, None), midpoint(2.0, 6.0));
assert_eq!(weighted_midpoint(2.0, 6.0, 2.0), 10.0);
```
*/
pub fn weighted_midpoint(left: f64, right: f64, alpha: impl Into<Option<f64>>) -> f64 {
  let alpha = alpha.into().unwrap_or(DEFAULT_ALPHA);
  left + (right - left) * alpha
}
