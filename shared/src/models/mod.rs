//! Data models shared between the server and its clients

pub mod job;
pub mod order;

pub use job::Job;
pub use order::{Order, OrderEntry, OrderState, OrderStats, OrderSubmission};
