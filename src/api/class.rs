/*!

A `Class` describes how the module surface constructs and manipulates one kind of `Value`. It has

 - a constructor, an ordinary overloaded `Function` named after the class;
 - methods, functions whose first parameter is the receiver (`self`);
 - members, per-instance properties read through a getter and, if flagged `Writable`, written through a setter;
 - constants, class-level values that are read-only. Reading one yields a copy.

*/

use std::fmt::{Display, Formatter};
use enumflags2::{bitflags, BitFlags};

use crate::{
  abstractions::{HashMap, IString, join_string},
  api::{
    call_error::{CallError, CallResult},
    function::Function,
    value::{Value, ValueKind}
  },
};

#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MemberAttribute {
  /// The member can be assigned through its setter.
  Writable,
  /// The member is computed from other state rather than stored.
  Derived,
}

pub type MemberAttributes = BitFlags<MemberAttribute, u8>;

pub type Getter = fn(&Value) -> CallResult;
pub type Setter = fn(&mut Value, &Value) -> CallResult<()>;

#[derive(Clone)]
pub struct Member {
  pub name      : IString,
  pub attributes: MemberAttributes,
  pub getter    : Getter,
  pub setter    : Option<Setter>,
}

impl Member {
  /// A stored field that can be read and assigned.
  pub fn read_write(name: &str, getter: Getter, setter: Setter) -> Self {
    Member {
      name      : IString::from(name),
      attributes: MemberAttribute::Writable.into(),
      getter,
      setter    : Some(setter),
    }
  }

  /// A read-only property computed from the receiver.
  pub fn derived(name: &str, getter: Getter) -> Self {
    Member {
      name      : IString::from(name),
      attributes: MemberAttribute::Derived.into(),
      getter,
      setter    : None,
    }
  }

  pub fn is_writable(&self) -> bool {
    self.attributes.contains(MemberAttribute::Writable) && self.setter.is_some()
  }
}

impl Display for Member {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    if self.is_writable() {
      write!(f, "{} (read-write)", self.name)
    } else if self.attributes.contains(MemberAttribute::Derived) {
      write!(f, "{} (read-only, derived)", self.name)
    } else {
      write!(f, "{} (read-only)", self.name)
    }
  }
}


pub struct Class {
  pub name       : IString,
  /// The kind of `Value` that instances of this class are.
  pub kind       : ValueKind,
  pub constructor: Function,
  pub methods    : HashMap<IString, Function>,
  pub members    : HashMap<IString, Member>,
  pub constants  : HashMap<IString, Value>,
}

impl Class {
  pub fn new(kind: ValueKind, constructor: Function) -> Self {
    Class {
      name       : constructor.name.clone(),
      kind,
      constructor,
      methods    : HashMap::new(),
      members    : HashMap::new(),
      constants  : HashMap::new(),
    }
  }

  pub fn def(&mut self, method: Function) -> &mut Self {
    self.methods.insert(method.name.clone(), method);
    self
  }

  pub fn def_member(&mut self, member: Member) -> &mut Self {
    self.members.insert(member.name.clone(), member);
    self
  }

  pub fn add_constant(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
    self.constants.insert(IString::from(name), value.into());
    self
  }

  pub fn construct(&self, args: &[Value], kwargs: &[(&str, Value)]) -> CallResult {
    self.constructor.call(args, kwargs)
  }

  /// A copy of the class-level constant `name`.
  pub fn constant(&self, name: &str) -> CallResult {
    self.constants
        .get(&IString::from(name))
        .cloned()
        .ok_or_else(|| self.undefined(name))
  }

  pub fn call_method(&self, receiver: &Value, name: &str, args: &[Value], kwargs: &[(&str, Value)]) -> CallResult {
    self.check_receiver(receiver)?;
    let method = self.methods.get(&IString::from(name)).ok_or_else(|| self.undefined(name))?;

    let mut arguments = Vec::with_capacity(args.len() + 1);
    arguments.push(receiver.clone());
    arguments.extend_from_slice(args);
    method.call(&arguments, kwargs)
  }

  /// Reads an instance member, falling back to the class constants.
  pub fn get(&self, receiver: &Value, name: &str) -> CallResult {
    self.check_receiver(receiver)?;
    match self.members.get(&IString::from(name)) {
      Some(member) => (member.getter)(receiver),
      None         => self.constant(name),
    }
  }

  pub fn set(&self, receiver: &mut Value, name: &str, value: &Value) -> CallResult<()> {
    self.check_receiver(receiver)?;
    let key = IString::from(name);

    if let Some(member) = self.members.get(&key) {
      return match member.setter {
        Some(setter) if member.is_writable() => setter(receiver, value),
        _ => Err(self.read_only(name)),
      };
    }

    if self.constants.contains_key(&key) {
      return Err(self.read_only(name));
    }
    Err(self.undefined(name))
  }

  fn check_receiver(&self, receiver: &Value) -> CallResult<()> {
    if receiver.kind() == self.kind {
      Ok(())
    } else {
      Err(CallError::IncompatibleValue { expected: self.kind.name(), received: receiver.kind() })
    }
  }

  fn undefined(&self, name: &str) -> CallError {
    CallError::UndefinedMember { class: self.name.clone(), name: IString::from(name) }
  }

  fn read_only(&self, name: &str) -> CallError {
    CallError::ReadOnlyMember { class: self.name.clone(), name: IString::from(name) }
  }
}

/// Sorted for stable output.
fn sorted<'a, T>(map: &'a HashMap<IString, T>) -> Vec<&'a T> {
  let mut entries: Vec<(&IString, &T)> = map.iter().collect();
  entries.sort_by(|(a, _), (b, _)| a.cmp(b));
  entries.into_iter().map(|(_, value)| value).collect()
}

impl Display for Class {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "class {}", self.name)?;
    writeln!(f, "  {}", join_string(self.constructor.signatures().iter(), "\n  "))?;

    for method in sorted(&self.methods) {
      writeln!(f, "  {}", join_string(method.signatures().iter(), "\n  "))?;
    }
    for member in sorted(&self.members) {
      writeln!(f, "  {}", member)?;
    }

    let mut constants: Vec<_> = self.constants.iter().collect();
    constants.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (name, value) in constants {
      writeln!(f, "  {} = {}", name, value)?;
    }
    Ok(())
  }
}
