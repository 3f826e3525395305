// Library for tests to access modules

pub mod config;
pub mod error;
pub mod gateway;
pub mod lifecycle;
pub mod models;
pub mod presenter;
pub mod routes;
pub mod surface;
pub mod version;
