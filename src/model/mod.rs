pub mod common;
pub mod member;
pub mod relations;
pub mod tree;

pub use common::*;
pub use member::*;
pub use relations::*;
pub use tree::*;
