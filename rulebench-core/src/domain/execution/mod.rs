pub mod contract;
pub mod payload;

pub use contract::{ExecutionRequest, ExecutionResponse, ExecutionResultItem};
pub use payload::{DEFAULT_PAYLOAD_TEXT, Payload};
