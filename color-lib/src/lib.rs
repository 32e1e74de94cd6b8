pub mod color;
pub mod gradient;
pub mod hash;

pub use gradient::{derive_gradient, Gradient, GradientError, GradientSource, HashGradient};
