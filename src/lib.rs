pub mod cart;
pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod payments;
pub mod pricing;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
