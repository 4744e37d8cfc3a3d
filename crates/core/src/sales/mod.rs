//! Sales module - the checkout coordinator.

mod sales_errors;
mod sales_model;
mod sales_service;


pub use sales_errors::SaleError;
pub use sales_model::{NewSale, PaymentMethod, SaleLine, SaleOutcome};
pub use sales_service::SaleService;
pub use sales_service::SaleServiceTrait;
