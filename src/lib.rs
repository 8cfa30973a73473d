pub mod chain;
pub mod error;
pub mod handler;
pub mod record;
pub mod request;
pub mod service;
pub mod utils;
