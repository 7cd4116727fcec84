/*!

The module surface: the crate's functions, the `Point` class, and the module constants, addressable by name and
callable with positional and keyword arguments, default values, and overloads resolved by arity and type.

```
use basics::{basics, Value};

let module = basics();
let p      = module.call("Point", &[3.0.into(), 4.0.into()], &[]).unwrap();

assert_eq!(module.get_member(&p, "length"), Ok(Value::Float(5.0)));
assert_eq!(module.call_method(&p, "distance_to", &[0.0.into(), 0.0.into()], &[]), Ok(Value::Float(5.0)));
assert!(module.call("sum", &[1.5.into(), 2.5.into()], &[]).is_err());
```

This layer adds no arithmetic of its own. Every native body forwards to a function in `crate::core`.

*/

mod basics_module;
pub mod call_error;
pub mod class;
pub mod function;
pub mod module;
pub mod signature;
pub mod value;

pub use basics_module::basics;
pub use call_error::{CallError, CallResult};
pub use class::{Class, Member, MemberAttribute, MemberAttributes};
pub use function::Function;
pub use module::Module;
pub use signature::{BoundArguments, Parameter, ParameterType, Signature};
pub use value::{Value, ValueKind};
