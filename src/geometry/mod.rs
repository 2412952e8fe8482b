pub mod scaling;

pub use scaling::{Bounds, Scaler};
