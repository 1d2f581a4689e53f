pub mod ids;
pub mod intent;
pub mod models;
pub mod store;
