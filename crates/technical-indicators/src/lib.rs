pub mod bundle;
pub mod indicators;


pub use bundle::*;
pub use indicators::*;
