// Domain layer: section model and ports (storage, prompting).

pub mod model;
pub mod ports;
