// Domain layer: feature/prediction types and the artifact capability traits.

pub mod model;
pub mod ports;
