pub mod health;
pub mod schema;
pub mod validate;

pub use health::health_check;
pub use schema::json_schema;
pub use validate::{validate_domain, validate_file, validate_url};
