pub mod client;

pub use client::{ApiConfig, ClientConfig, DEFAULT_BASE_URL, load_client_config};
