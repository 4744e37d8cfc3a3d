//! Cash module - per-wallet running balances.

mod cash_model;
mod cash_service;
mod cash_traits;


pub use cash_model::CashBalance;
pub use cash_service::CashService;
pub use cash_traits::{CashRepositoryTrait, CashServiceTrait};
