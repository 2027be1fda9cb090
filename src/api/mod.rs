pub mod handlers;
pub mod member_handlers;
pub mod routes;
pub mod tree_handlers;

pub use handlers::*;
pub use member_handlers::*;
pub use routes::*;
pub use tree_handlers::*;
