// Adapters layer: concrete scaler/model implementations and the JSON artifact
// format they are loaded from.

pub mod artifact;
pub mod linear;
pub mod network;
pub mod scaler;
