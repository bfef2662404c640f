pub mod dispatcher;
pub mod links;
pub mod text;

pub use dispatcher::Dispatcher;
pub use links::{resolve_or_empty, AnchorMap, LinkMapFile, LinkResolver, NoLinks};
