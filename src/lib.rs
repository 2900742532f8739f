pub mod build_info;
pub mod config;
pub mod models;
pub mod openapi;
pub mod routes;

#[cfg(test)]
mod app_tests;
