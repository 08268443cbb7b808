//! Encyclopedia pages and the structured-data items they link to.

mod entity_id;
mod page;

pub use entity_id::EntityId;
pub use page::{Page, PageProps, PageSearchResult};
