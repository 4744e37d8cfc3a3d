//! Transactions module - the financial ledger recorder.

mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod transactions_service_tests;

pub use transactions_errors::TransactionError;
pub use transactions_model::{
    FinancialTransaction, NewFinancialTransaction, TransactionDescription, TransactionDirection,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
