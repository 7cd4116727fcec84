use basics::{
  answer,
  basics,
  log::{info, set_global_logging_threshold},
  midpoint,
  sum,
  weighted_midpoint,
  CallResult,
  Point,
  Value,
  PI,
  VERSION,
};

fn main() -> CallResult<()> {
  set_global_logging_threshold(5);

  println!("basics {}", VERSION);
  println!("answer() = {}", answer());
  println!("sum(40, 2) = {}", sum(40, 2));
  println!("midpoint(1, 4) = {}", midpoint(1.0, 4.0));
  println!("weighted_midpoint(1, 4) = {}", weighted_midpoint(1.0, 4.0, None));
  println!("weighted_midpoint(1, 4, alpha=0.25) = {}", weighted_midpoint(1.0, 4.0, 0.25));
  println!("PI = {}", *PI);

  let p = Point::new(3.0, 4.0);
  println!("{}.length = {}", p, p.length());
  println!("{}.distance_to(0, 0) = {}", p, p.distance_to((0.0, 0.0)));
  println!("{}.distance_to({}) = {}", Point::ORIGIN, p, Point::ORIGIN.distance_to(p));

  // The same calls, by name.
  let module = basics();
  println!("\n{}", module);

  let weighted = module.call("weighted_midpoint", &[1.0.into(), 4.0.into()], &[("alpha", 0.25.into())])?;
  info!(1, "weighted_midpoint(1, 4, alpha=0.25) = {}", weighted);

  let mut q = module.call("Point", &[], &[("x", Value::Int(6)), ("y", Value::Int(8))])?;
  module.set_member(&mut q, "y", &Value::Float(-8.0))?;
  let length   = module.get_member(&q, "length")?;
  let distance = module.call_method(&q, "distance_to", &[Point::ORIGIN.into()], &[])?;
  info!(1, "{}.length = {}", q, length);
  info!(1, "{}.distance_to(origin) = {}", q, distance);

  if let Err(error) = module.call("sum", &[1.5.into(), Value::Int(2)], &[]) {
    info!(1, "{}", error);
  }

  Ok(())
}
