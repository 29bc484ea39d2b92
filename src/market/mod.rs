pub mod handler;
pub mod model;
pub mod registry;
pub mod routes;
pub mod service;
