//! Browser implementations of the domain traits.

pub mod dom;
pub mod services;

pub use dom::*;
pub use services::*;
