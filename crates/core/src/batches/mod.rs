//! Batches module - the bulk stock-in/stock-out coordinator.

mod batches_errors;
mod batches_model;
mod batches_service;

#[cfg(test)]
mod batches_service_tests;

pub use batches_errors::BatchError;
pub use batches_model::{BatchDirection, BatchLine, BatchOutcome, NewStockBatch};
pub use batches_service::BatchService;
pub use batches_service::BatchServiceTrait;
