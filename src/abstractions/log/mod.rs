/*!

# Overview

Leveled, threshold-filtered logging on top of `tracing`. The level describes what _kind_ of message is logged; the
numeric threshold describes how _verbose_ the logger has to be for the message to appear.

```
use basics::log::*;

fn main() {
    // Messages logged at a threshold greater than 1 are dropped.
    set_global_logging_threshold(1);

    critical!(3, "Not emitted");
    warning!(2, "Not emitted either");
    info!(1, "Emitted");
    debug!("Emitted, the threshold defaults to 0");
}
```

## Threshold

The global logging threshold is a `u8`, shared by all levels, and defaults to 3. A message logged at threshold `t`
is emitted if and only if `t` is at most the global threshold, so messages at threshold 0 are always emitted. Values
out of the `u8` range saturate.

```
use basics::log::{set_global_logging_threshold, get_global_logging_threshold};

set_global_logging_threshold(5);
assert_eq!(get_global_logging_threshold(), 5);
```

The library itself logs the dispatch of module-surface calls at thresholds 4 and 5, so it is silent at the
default threshold.

## Levels

Critical, Error, Warning, Info, Debug, Trace, through the macros `critical!`, `error!`, `warning!`, `info!`,
`debug!`, and `trace!`:

```ignore
level!(threshold, "format string", args...);
level!("format string", args...);   // threshold 0
```

## Initialization

The macros initialize the logger on first use. If the host application already installed a global `tracing`
subscriber, that subscriber is left in place and receives the events unfiltered.

*/

mod formatter;
mod threshold_filter;
mod macros;

use std::sync::{
    atomic::{AtomicU8, Ordering},
    LazyLock
  };

use tracing_subscriber::{
  fmt,
  layer::SubscriberExt,
  Registry
};

use threshold_filter::ThresholdFilterLayer;
use formatter::CustomFieldFormatter;
pub use macros::*;

// The macros expand to `$crate::log::tracing::event!`, so dependents need not depend on `tracing` themselves.
#[doc(hidden)]
pub use ::tracing;

/// Default verbosity.
pub const DEFAULT_LOGGING_THRESHOLD: u8 = 3;

/// Used for implicit initialization.
static INIT_LOGGER: LazyLock<()> = LazyLock::new(|| {
  let subscriber = Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(CustomFieldFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stdout),
      );

  // Fails only if someone else got there first, in which case their subscriber wins.
  let _ = tracing::subscriber::set_global_default(subscriber);
});

/// This does not need to be called directly. Initializes the logging system.
pub fn init_logger() {
  LazyLock::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(DEFAULT_LOGGING_THRESHOLD);

/// Sets the global threshold. May be called before or after the logger is initialized.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}


#[cfg(test)]
mod tests {
  use super::*;
  use formatter::RenderedFields;

  #[test]
  fn events_pass_at_or_below_the_global_threshold() {
    let point      = crate::Point::new(3.0, 4.0);
    let rendered   = RenderedFields::default();
    let subscriber = Registry::default().with(ThresholdFilterLayer).with(rendered.clone());

    tracing::subscriber::with_default(subscriber, || {
      set_global_logging_threshold(3);
      assert_eq!(get_global_logging_threshold(), 3);

      info!(2, "Length of {} is {}", point, point.length());
      debug!(3, "At the threshold: {}", point.x);
      error!(4, "Above the threshold: {}", point.y);
      warning!("Implicit threshold");

      set_global_logging_threshold(5);
      trace!(5, "After raising the threshold: {}", crate::answer());
      debug!(6, "Still above the threshold");

      set_global_logging_threshold(DEFAULT_LOGGING_THRESHOLD);
    });

    assert_eq!(
      rendered.lines(),
      [
        "Length of Point(3, 4) is 5",
        "At the threshold: 3",
        "Implicit threshold",
        "After raising the threshold: 42",
      ]
    );
  }
}
