use crate::utils::error::{LifecycleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Base,
    Derived,
}

impl EntityKind {
    /// Literal tag printed in the text form of an event.
    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Base => "A",
            EntityKind::Derived => "B",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "A" => Some(EntityKind::Base),
            "B" => Some(EntityKind::Derived),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Construct,
    Destruct,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Construct => "constructor",
            Phase::Destruct => "destructor",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "constructor" => Some(Phase::Construct),
            "destructor" => Some(Phase::Destruct),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    pub kind: EntityKind,
    pub phase: Phase,
    pub value: i32,
}

impl LifecycleEvent {
    pub fn new(kind: EntityKind, phase: Phase, value: i32) -> Self {
        Self { kind, phase, value }
    }

    pub fn construct(kind: EntityKind, value: i32) -> Self {
        Self::new(kind, Phase::Construct, value)
    }

    pub fn destruct(kind: EntityKind, value: i32) -> Self {
        Self::new(kind, Phase::Destruct, value)
    }

    /// The destruct event that closes this construct event.
    pub fn closing(self) -> Self {
        Self::destruct(self.kind, self.value)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.value, self.kind.tag(), self.phase.label())
    }
}

impl FromStr for LifecycleEvent {
    type Err = LifecycleError;

    fn from_str(line: &str) -> Result<Self> {
        let parse_error = |reason: &str| LifecycleError::ParseEvent {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = line.split_whitespace();
        let (Some(value), Some(tag), Some(label), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_error("expected `<value> <tag> <phase>`"));
        };

        let value = value
            .parse::<i32>()
            .map_err(|e| parse_error(&format!("invalid value: {}", e)))?;
        let kind = EntityKind::from_tag(tag)
            .ok_or_else(|| parse_error(&format!("unknown entity tag `{}`", tag)))?;
        let phase = Phase::from_label(label)
            .ok_or_else(|| parse_error(&format!("unknown phase `{}`", label)))?;

        Ok(Self::new(kind, phase, value))
    }
}
