pub mod edamam;
pub mod export;
pub mod menu;
pub mod models;
pub mod reconcile;
pub mod store;
pub mod weather;
