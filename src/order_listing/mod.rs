//! Domain layer for order listing
pub mod domain;
pub mod services;
