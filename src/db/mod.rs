mod repository;
mod schema;
mod seed;

pub(crate) use repository::parse_datetime;
pub use repository::Repository;
