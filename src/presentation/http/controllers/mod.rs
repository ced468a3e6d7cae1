// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod auth;
pub mod comments;
pub mod contact;
pub mod posts;
pub mod site;
