//! Stock module - per-location counters, movement history, and the stock
//! ledger service.

mod stock_errors;
mod stock_model;
mod stock_service;
mod stock_traits;


pub use stock_errors::StockError;
pub use stock_model::{LocationStock, MovementType, NewStockMovement, StockMovement};
pub use stock_service::StockService;
pub use stock_traits::{StockRepositoryTrait, StockServiceTrait};
