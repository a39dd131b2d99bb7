pub mod output;
pub mod plugins;
pub mod resolve;
pub mod schema;
pub mod serve;
pub mod validate;

pub use plugins::run_plugins;
pub use resolve::run_resolve;
pub use schema::run_schema;
pub use serve::run_serve;
pub use validate::run_validate;
