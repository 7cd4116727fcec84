use std::fmt::Debug;
use tracing::{
  field::{Field, Visit},
  Event,
  Subscriber
};
use tracing_subscriber::{
  Layer,
  layer::Context,
  registry::LookupSpan
};

use super::get_global_logging_threshold;

/// A layer that drops every event whose `threshold` field exceeds the global logging threshold. Events without a
/// `threshold` field are treated as threshold 0 and always pass.
pub(crate) struct ThresholdFilterLayer;

impl<S> Layer<S> for ThresholdFilterLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
  fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
    let mut visitor = ThresholdVisitor { threshold: 0 };
    event.record(&mut visitor);
    visitor.threshold <= get_global_logging_threshold()
  }
}

/// Extracts the `threshold` field of an event. Out of range values saturate.
struct ThresholdVisitor {
  threshold: u8,
}

impl Visit for ThresholdVisitor {
  fn record_i64(&mut self, field: &Field, value: i64) {
    if field.name() == "threshold" {
      self.threshold = value.clamp(0, u8::MAX as i64) as u8;
    }
  }

  fn record_u64(&mut self, field: &Field, value: u64) {
    if field.name() == "threshold" {
      self.threshold = value.min(u8::MAX as u64) as u8;
    }
  }

  // A threshold that is not an integer at all is treated as maximally verbose.
  fn record_debug(&mut self, field: &Field, _value: &dyn Debug) {
    if field.name() == "threshold" {
      self.threshold = u8::MAX;
    }
  }
}


#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};
  use tracing::Level;
  use tracing_subscriber::{layer::SubscriberExt, Registry};

  use super::*;

  /// Records the threshold `ThresholdVisitor` extracts from every event that reaches it.
  #[derive(Clone, Default)]
  struct RecordedThresholds(Arc<Mutex<Vec<u8>>>);

  impl<S: Subscriber> Layer<S> for RecordedThresholds {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
      let mut visitor = ThresholdVisitor { threshold: 0 };
      event.record(&mut visitor);
      self.0.lock().unwrap().push(visitor.threshold);
    }
  }

  fn emit_out_of_range_thresholds() {
    tracing::event!(Level::INFO, threshold = 300, "above range");
    tracing::event!(Level::INFO, threshold = -1, "below range");
    tracing::event!(Level::INFO, threshold = u64::MAX, "far above range");
    tracing::event!(Level::INFO, threshold = "high", "not an integer");
    tracing::event!(Level::INFO, "no threshold");
  }

  #[test]
  fn out_of_range_thresholds_saturate() {
    let recorded = RecordedThresholds::default();
    tracing::subscriber::with_default(Registry::default().with(recorded.clone()), || {
      emit_out_of_range_thresholds();
      tracing::event!(Level::INFO, threshold = 4u8, "in range");
    });
    assert_eq!(*recorded.0.lock().unwrap(), [255, 0, 255, 255, 0, 4]);
  }

  #[test]
  fn saturated_thresholds_are_filtered() {
    // The global threshold is never raised to 255 by any test, so only the threshold 0 events pass.
    let recorded   = RecordedThresholds::default();
    let subscriber = Registry::default().with(ThresholdFilterLayer).with(recorded.clone());
    tracing::subscriber::with_default(subscriber, emit_out_of_range_thresholds);
    assert_eq!(*recorded.0.lock().unwrap(), [0, 0]);
  }
}
