//! Domain entities - the core business objects.

mod page;
mod post;

pub use page::{PostPage, total_pages};
pub use post::{Post, PostInput};
