// Adapters layer: concrete event sinks (console output, in-memory recording).

pub mod sink;
