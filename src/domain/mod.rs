// Domain layer: lifecycle events, the entities that emit them, and the sink port.

pub mod entity;
pub mod model;
pub mod ports;
