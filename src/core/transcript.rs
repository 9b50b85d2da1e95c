use crate::adapters::sink::RecordingSink;
use crate::core::{EntityKind, LifecycleEvent, Phase};
use crate::utils::error::{LifecycleError, Result};

/// A recorded sequence of lifecycle events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    events: Vec<LifecycleEvent>,
}

impl Transcript {
    pub fn new(events: Vec<LifecycleEvent>) -> Self {
        Self { events }
    }

    /// Parses text-form output, one event per line. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let events = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.parse::<LifecycleEvent>())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { events })
    }

    pub fn events(&self) -> &[LifecycleEvent] {
        &self.events
    }

    /// Replays the transcript against a stack of live instances.
    ///
    /// Destruction must be strictly LIFO and report the value given at
    /// construction. A derived entity must be built right after its two
    /// base parts (the member carrying the derived value) and torn down
    /// right before them.
    pub fn verify(&self) -> Result<()> {
        let events = &self.events;
        let mut live: Vec<LifecycleEvent> = Vec::new();

        for (index, event) in events.iter().enumerate() {
            match (event.phase, event.kind) {
                (Phase::Construct, EntityKind::Base) => live.push(*event),
                (Phase::Construct, EntityKind::Derived) => {
                    let parts = index
                        .checked_sub(2)
                        .map(|start| &events[start..index])
                        .filter(|parts| {
                            parts.iter().all(|p| {
                                p.phase == Phase::Construct && p.kind == EntityKind::Base
                            })
                        })
                        .ok_or_else(|| LifecycleError::OutOfOrder {
                            index,
                            reason: format!("{} is not preceded by its two base parts", event),
                        })?;

                    if parts[1].value != event.value {
                        return Err(LifecycleError::OutOfOrder {
                            index,
                            reason: format!(
                                "derived value {} differs from its member value {}",
                                event.value, parts[1].value
                            ),
                        });
                    }
                    live.push(*event);
                }
                (Phase::Destruct, kind) => {
                    let open = live.pop().ok_or(LifecycleError::UnbalancedDestruct {
                        index,
                        event: *event,
                    })?;
                    if open.closing() != *event {
                        return Err(LifecycleError::MismatchedDestruct {
                            index,
                            expected: open.closing(),
                            found: *event,
                        });
                    }

                    if kind == EntityKind::Derived {
                        let parts_follow = events
                            .get(index + 1..index + 3)
                            .is_some_and(|parts| {
                                parts.iter().all(|p| {
                                    p.phase == Phase::Destruct && p.kind == EntityKind::Base
                                })
                            });
                        if !parts_follow {
                            return Err(LifecycleError::OutOfOrder {
                                index,
                                reason: format!(
                                    "{} is not followed by the teardown of its base parts",
                                    event
                                ),
                            });
                        }
                    }
                }
            }
        }

        if !live.is_empty() {
            return Err(LifecycleError::StillLive { count: live.len() });
        }
        Ok(())
    }

    /// Exact comparison, reporting the first position where the two differ.
    pub fn matches(&self, expected: &[LifecycleEvent]) -> Result<()> {
        let len = self.events.len().max(expected.len());
        for index in 0..len {
            let found = self.events.get(index);
            let wanted = expected.get(index);
            if found != wanted {
                let show = |e: Option<&LifecycleEvent>| {
                    e.map_or_else(|| "<end>".to_string(), ToString::to_string)
                };
                return Err(LifecycleError::TranscriptMismatch {
                    index,
                    expected: show(wanted),
                    found: show(found),
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<LifecycleEvent>> for Transcript {
    fn from(events: Vec<LifecycleEvent>) -> Self {
        Self::new(events)
    }
}

impl From<RecordingSink> for Transcript {
    fn from(sink: RecordingSink) -> Self {
        Self::new(sink.into_events())
    }
}
