pub mod commands;
pub mod configuration;
pub mod dal;
pub mod domain;
pub mod errors;
pub mod services;
pub mod startup;
