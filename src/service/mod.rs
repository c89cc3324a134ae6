//! Entity services: one owner of CRUD semantics per entity, called by both
//! the REST handlers and the GraphQL resolvers.

mod category;
mod product;
mod user;
mod validation;

pub use category::CategoryService;
pub use product::ProductService;
pub use user::UserService;
pub(crate) use validation::{require_number, require_text};
