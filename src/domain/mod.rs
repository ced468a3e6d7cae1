pub mod admin;
pub mod comment;
pub mod contact;
pub mod errors;
pub mod post;
pub mod settings;
