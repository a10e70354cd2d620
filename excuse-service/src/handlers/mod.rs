pub mod generate;
pub mod health;

pub use generate::generate_excuse;
pub use health::health_check;
