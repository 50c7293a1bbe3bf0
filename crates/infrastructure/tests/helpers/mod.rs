#![allow(dead_code)]

pub mod mock_transport;
pub mod queries;

pub use mock_transport::MockTransport;
pub use queries::{encoded_query, source_from};
