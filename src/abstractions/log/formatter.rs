use std::fmt::Debug;
use tracing::field::{Field, Visit};
use tracing_subscriber::{
  field::RecordFields,
  fmt::{
    format::Writer,
    FormatFields
  }
};

/// Formats event fields for human readers: the `threshold` field is bookkeeping and is never printed, a true
/// `critical` field becomes a `[CRITICAL]` prefix, and the message is printed bare.
pub(crate) struct CustomFieldFormatter;

impl<'writer> FormatFields<'writer> for CustomFieldFormatter {
  fn format_fields<R: RecordFields>(&self, writer: Writer<'writer>, fields: R) -> std::fmt::Result {
    let mut visitor = FieldFilterVisitor { writer, result: Ok(()) };
    fields.record(&mut visitor);
    visitor.result
  }
}

struct FieldFilterVisitor<'writer> {
  writer: Writer<'writer>,
  result: std::fmt::Result,
}

impl<'writer> FieldFilterVisitor<'writer> {
  fn write_field(&mut self, field: &Field, value: &dyn Debug) {
    if self.result.is_err() {
      return;
    }
    self.result = match field.name() {
      "threshold" | "critical" => Ok(()),
      "message"                => write!(self.writer, "{:?}", value),
      name                     => write!(self.writer, " {}={:?}", name, value),
    };
  }
}

impl<'writer> Visit for FieldFilterVisitor<'writer> {
  fn record_bool(&mut self, field: &Field, value: bool) {
    if field.name() == "critical" {
      if value && self.result.is_ok() {
        self.result = write!(self.writer, "[CRITICAL] ");
      }
    } else {
      self.write_field(field, &value);
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
    self.write_field(field, value);
  }
}

/// Collects the fields of every event it sees, rendered by `CustomFieldFormatter`.
#[cfg(test)]
#[derive(Clone, Default)]
pub(super) struct RenderedFields(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

#[cfg(test)]
impl RenderedFields {
  pub(super) fn lines(&self) -> Vec<String> {
    self.0.lock().unwrap().clone()
  }
}

#[cfg(test)]
impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for RenderedFields {
  fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
    let mut line = String::new();
    CustomFieldFormatter.format_fields(Writer::new(&mut line), event).unwrap();
    self.0.lock().unwrap().push(line);
  }
}
