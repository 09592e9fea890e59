pub mod health;
pub mod runtime_config;
