pub mod seed;
pub mod store;

pub use seed::DatabaseSeeder;
pub use store::Database;
