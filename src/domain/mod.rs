// Domain layer: the loaded template, the run report, and the ports the engine is written against.

pub mod model;
pub mod ports;
