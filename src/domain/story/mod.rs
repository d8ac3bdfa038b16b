//! Story sections: anchor resolution, scroll navigation and the media strip.

pub mod marquee;
pub mod navigation;
pub mod resolver;

pub use marquee::*;
pub use navigation::*;
pub use resolver::*;
