pub mod models;
pub mod validation;

pub use models::Config;
pub use validation::validate;
