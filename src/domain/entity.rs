use crate::domain::model::{EntityKind, LifecycleEvent};
use crate::domain::ports::EventSink;

/// Holds one integer and reports it when created and when dropped.
pub struct Base<'s> {
    value: i32,
    sink: &'s dyn EventSink,
}

impl<'s> Base<'s> {
    pub const DEFAULT_VALUE: i32 = 0;

    pub fn new(sink: &'s dyn EventSink, value: i32) -> Self {
        tracing::trace!(value, "constructing base entity");
        sink.emit(LifecycleEvent::construct(EntityKind::Base, value));
        Self { value, sink }
    }

    pub fn with_default(sink: &'s dyn EventSink) -> Self {
        Self::new(sink, Self::DEFAULT_VALUE)
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Drop for Base<'_> {
    fn drop(&mut self) {
        tracing::trace!(value = self.value, "destroying base entity");
        self.sink
            .emit(LifecycleEvent::destruct(EntityKind::Base, self.value));
    }
}

/// A base entity extended with an embedded base member and a value of its own.
///
/// The "inherited" part and the member are both plain [`Base`] values. The
/// constructor builds them in order (inherited, then member, then its own
/// report). Teardown is the exact reverse: `Drop` reports first, then the
/// fields drop in declaration order, which is why `member` is declared
/// before `inherited`.
///
/// The second constructor argument feeds both the member and the entity's
/// own value; the first only reaches the inherited part.
pub struct Derived<'s> {
    member: Base<'s>,
    inherited: Base<'s>,
    value: i32,
    sink: &'s dyn EventSink,
}

impl<'s> Derived<'s> {
    pub const DEFAULT_INHERITED: i32 = 1;
    pub const DEFAULT_MEMBER: i32 = 2;

    pub fn new(sink: &'s dyn EventSink, inherited: i32, member: i32) -> Self {
        tracing::trace!(inherited, member, "constructing derived entity");
        let inherited = Base::new(sink, inherited);
        let member = Base::new(sink, member);
        let value = member.value();
        sink.emit(LifecycleEvent::construct(EntityKind::Derived, value));

        Self {
            member,
            inherited,
            value,
            sink,
        }
    }

    pub fn with_defaults(sink: &'s dyn EventSink) -> Self {
        Self::new(sink, Self::DEFAULT_INHERITED, Self::DEFAULT_MEMBER)
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn inherited(&self) -> &Base<'s> {
        &self.inherited
    }

    pub fn member(&self) -> &Base<'s> {
        &self.member
    }
}

impl Drop for Derived<'_> {
    fn drop(&mut self) {
        tracing::trace!(value = self.value, "destroying derived entity");
        self.sink
            .emit(LifecycleEvent::destruct(EntityKind::Derived, self.value));
        // member, then inherited, drop after this returns
    }
}
