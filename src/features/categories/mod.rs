//! Category advisor feature: the category vocabulary grows organically
//! from items the household has entered, with no fixed enumeration.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::CategoryAdvisor;
