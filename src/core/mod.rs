pub mod catalog;
pub mod quiz;
pub mod services;
pub mod session;
pub mod validation;
