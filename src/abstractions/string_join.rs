use std::iter::once;
use std::fmt::Display;

/**
Interleaves `sep(&item)` between consecutive items of `iter`. The stdlib only offers this for slices (c.f.
`[T]::join(…)`), and signature rendering works on lazily mapped iterators.

```
use basics::abstractions::join_iter;

let names = ["left", "right", "alpha"].iter().cloned();
let joined: String = join_iter(names, |_| ", ").collect();
assert_eq!(joined, "left, right, alpha");
```
 */
pub fn join_iter<T>(mut iter: impl Iterator<Item = T>, sep: impl Fn(&T) -> T) -> impl Iterator<Item = T> {
  iter
      .next()
      .into_iter()
      .chain(iter.flat_map(move |item| once(sep(&item)).chain(once(item))))
}

/// Renders each item with `Display` and joins the results with `sep`.
pub fn join_string<T: Display>(iter: impl Iterator<Item = T>, sep: &str) -> String {
  join_iter(iter.map(|item| item.to_string()), |_| sep.to_string()).collect::<String>()
}
