/*!

Types/type aliases that abstract over the implementing backing type, plus small helpers with no better home.

Names of functions, classes, parameters and constants in the module surface are interned strings. Which crate
provides interning is decided here and nowhere else.

*/

mod string_join;

// Logging
pub mod log;

// Interned string.
pub use string_cache::DefaultAtom as IString;

// Symbol tables of the module surface.
pub use std::collections::HashMap;

// Join sequences with a separator
pub use string_join::{join_iter, join_string};
