// src/presentation/http/mod.rs
pub mod controllers;
pub mod routes;
pub mod state;
