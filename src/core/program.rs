use crate::core::{Base, Derived, EntityKind, EventSink, LifecycleEvent};
use serde::{Deserialize, Serialize};

/// Values handed to the two entities the program creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramParams {
    pub inherited: i32,
    pub member: i32,
    pub base: i32,
}

impl Default for ProgramParams {
    fn default() -> Self {
        Self {
            inherited: Derived::DEFAULT_INHERITED,
            member: Derived::DEFAULT_MEMBER,
            base: Base::DEFAULT_VALUE,
        }
    }
}

/// Creates a derived entity, then a base entity, in one scope, and leaves it.
pub fn run(sink: &dyn EventSink, params: &ProgramParams) {
    tracing::info!("Entering scope");
    {
        let _derived = Derived::new(sink, params.inherited, params.member);
        let _base = Base::new(sink, params.base);
        tracing::debug!("Leaving scope");
    }
    tracing::info!("Scope exited");
}

pub fn run_default(sink: &dyn EventSink) {
    run(sink, &ProgramParams::default())
}

/// The exact event sequence [`run`] emits for `params`.
pub fn expected_transcript(params: &ProgramParams) -> Vec<LifecycleEvent> {
    use EntityKind::{Base as A, Derived as B};

    vec![
        LifecycleEvent::construct(A, params.inherited),
        LifecycleEvent::construct(A, params.member),
        LifecycleEvent::construct(B, params.member),
        LifecycleEvent::construct(A, params.base),
        LifecycleEvent::destruct(A, params.base),
        LifecycleEvent::destruct(B, params.member),
        LifecycleEvent::destruct(A, params.member),
        LifecycleEvent::destruct(A, params.inherited),
    ]
}
