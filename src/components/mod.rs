pub mod general;
pub use general::*;
