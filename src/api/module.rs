/*!

A `Module` is a namespace of functions, classes, and constants, possibly with nested submodules. Everything in it is
addressed by name, which is how callers that only know the names and call conventions of the `basics` API reach
the underlying Rust functions.

Constants are read-only: `attr` returns a copy, and there is no way to rebind a name once the module is built.

*/

use std::fmt::{Display, Formatter};

use crate::{
  abstractions::{HashMap, IString},
  api::{
    call_error::{CallError, CallResult},
    class::Class,
    function::Function,
    value::Value
  },
};

const DISPLAY_INDENT: usize = 2;

pub type BxModule = Box<Module>;

#[derive(Default)]
pub struct Module {
  pub name      : IString,
  pub functions : HashMap<IString, Function>,
  pub classes   : HashMap<IString, Class>,
  pub constants : HashMap<IString, Value>,
  pub submodules: Vec<BxModule>,
}

impl Module {
  pub fn new(name: &str) -> Self {
    Module {
      name: IString::from(name),
      ..Module::default()
    }
  }

  pub fn def(&mut self, function: Function) -> &mut Self {
    self.functions.insert(function.name.clone(), function);
    self
  }

  pub fn add_class(&mut self, class: Class) -> &mut Self {
    self.classes.insert(class.name.clone(), class);
    self
  }

  pub fn add_constant(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
    self.constants.insert(IString::from(name), value.into());
    self
  }

  /// Returns the submodule `name`, creating it if it does not exist.
  pub fn def_submodule(&mut self, name: &str) -> &mut Module {
    let name = IString::from(name);
    let index = match self.submodules.iter().position(|module| module.name == name) {
      Some(index) => index,
      None => {
        self.submodules.push(Box::new(Module { name, ..Module::default() }));
        self.submodules.len() - 1
      }
    };
    &mut self.submodules[index]
  }

  pub fn submodule(&self, name: &str) -> Option<&Module> {
    self.submodules.iter().find(|module| &*module.name == name).map(|module| &**module)
  }

  pub fn function(&self, name: &str) -> CallResult<&Function> {
    self.functions.get(&IString::from(name)).ok_or_else(|| self.undefined(name))
  }

  pub fn class(&self, name: &str) -> CallResult<&Class> {
    self.classes.get(&IString::from(name)).ok_or_else(|| self.undefined(name))
  }

  /// A copy of the module constant `name`.
  pub fn attr(&self, name: &str) -> CallResult {
    self.constants.get(&IString::from(name)).cloned().ok_or_else(|| self.undefined(name))
  }

  /// The class whose instances are values of the receiver's kind.
  pub fn class_of(&self, receiver: &Value) -> CallResult<&Class> {
    let kind = receiver.kind();
    self.classes
        .values()
        .find(|class| class.kind == kind)
        .ok_or_else(|| CallError::IncompatibleValue { expected: "an instance of a class", received: kind })
  }

  /// Calls the function `name`, or constructs an instance if `name` is a class.
  pub fn call(&self, name: &str, args: &[Value], kwargs: &[(&str, Value)]) -> CallResult {
    let key = IString::from(name);
    if let Some(function) = self.functions.get(&key) {
      return function.call(args, kwargs);
    }
    match self.classes.get(&key) {
      Some(class) => class.construct(args, kwargs),
      None        => Err(self.undefined(name)),
    }
  }

  pub fn call_method(&self, receiver: &Value, name: &str, args: &[Value], kwargs: &[(&str, Value)]) -> CallResult {
    self.class_of(receiver)?.call_method(receiver, name, args, kwargs)
  }

  pub fn get_member(&self, receiver: &Value, name: &str) -> CallResult {
    self.class_of(receiver)?.get(receiver, name)
  }

  pub fn set_member(&self, receiver: &mut Value, name: &str, value: &Value) -> CallResult<()> {
    let class = self.class_of(receiver)?;
    class.set(receiver, name, value)
  }

  fn undefined(&self, name: &str) -> CallError {
    CallError::UndefinedName { module: self.name.clone(), name: IString::from(name) }
  }

  fn fmt_indented(&self, f: &mut Formatter<'_>, indent: usize) -> std::fmt::Result {
    let pad = " ".repeat(indent);
    let inner = " ".repeat(indent + DISPLAY_INDENT);
    writeln!(f, "{}module {}", pad, self.name)?;

    let mut names: Vec<&IString> = self.constants.keys().collect();
    names.sort();
    for name in names {
      writeln!(f, "{}{} = {}", inner, name, self.constants[name])?;
    }

    let mut names: Vec<&IString> = self.functions.keys().collect();
    names.sort();
    for name in names {
      for signature in self.functions[name].signatures() {
        writeln!(f, "{}{}", inner, signature)?;
      }
    }

    let mut names: Vec<&IString> = self.classes.keys().collect();
    names.sort();
    for name in names {
      for line in self.classes[name].to_string().lines() {
        writeln!(f, "{}{}", inner, line)?;
      }
    }

    for submodule in &self.submodules {
      submodule.fmt_indented(f, indent + DISPLAY_INDENT)?;
    }
    Ok(())
  }
}

impl Display for Module {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.fmt_indented(f, 0)
  }
}
