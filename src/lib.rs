// Soonur core library
// Event catalog, countdown math, custom countdown store, and listing services

pub mod models;
pub mod services;
pub mod utils;
