//! Domain layer: the entity schema, the money rounding rule, the report
//! types, and the snapshot port the engine depends on.

pub mod entity;
pub mod money;
pub mod ports;
pub mod report;
