mod model;
mod repository;

pub use repository::TransactionRestRepository;
