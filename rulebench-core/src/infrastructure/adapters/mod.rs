pub mod http;

pub use http::HttpRuleRepository;
