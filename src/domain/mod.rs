// Domain layer: value types, the reference body table and the clock port.

pub mod bodies;
pub mod model;
pub mod ports;
