//! Chart aggregate: layout engine, pointer interaction and tooltip placement.

pub mod interaction;
pub mod layout;
pub mod tooltip;
pub mod value_objects;

pub use interaction::*;
pub use layout::*;
pub use tooltip::*;
pub use value_objects::*;
