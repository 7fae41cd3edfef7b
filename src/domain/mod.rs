// Domain layer: value model and the qualifier capability trait.

pub mod model;
pub mod ports;
