//! Tracing-backed event observer.

use crate::common::{Event, EventKind};
use crate::soc::traits::Observer;

/// Forwards resolution events to the `tracing` subscriber.
///
/// Hits and misses are logged at `debug`; rejected addresses at `warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn observe(&mut self, event: Event) {
        match event.kind {
            EventKind::IllegalVirtualAddress | EventKind::IllegalPhysicalAddress => {
                tracing::warn!(kind = %event.kind, value = event.value, "address rejected");
            }
            kind if kind.is_translation() => {
                tracing::debug!(kind = %kind, paddr = event.value, "address resolved");
            }
            kind => {
                tracing::debug!(kind = %kind, byte = event.value, "data resolved");
            }
        }
    }
}
