pub mod error;
pub mod exchange_service;

pub use error::ServiceError;
pub use exchange_service::ExchangeService;
