// Domain layer: model definitions and the artifact source port.

pub mod model;
pub mod ports;
