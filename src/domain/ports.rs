use crate::domain::model::LifecycleEvent;

/// Destination of lifecycle events.
///
/// Emission happens inside `Drop`, so it cannot fail: a sink that hits an
/// error reports it through `tracing` and keeps going.
pub trait EventSink {
    fn emit(&self, event: LifecycleEvent);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn emit(&self, event: LifecycleEvent) {
        (**self).emit(event)
    }
}

/// Tee: every event goes to both sinks, left first.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn emit(&self, event: LifecycleEvent) {
        self.0.emit(event);
        self.1.emit(event);
    }
}
