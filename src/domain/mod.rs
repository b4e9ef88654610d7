// Domain layer: webhook data views, loose-value semantics and ports.

pub mod model;
pub mod ports;
pub mod value;
