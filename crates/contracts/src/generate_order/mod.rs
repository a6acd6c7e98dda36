//! Контракт генерации приказа (POST /generate)

pub mod request;
pub mod response;

pub use request::{OrderPunkt, OrderRequest};
pub use response::ErrorResponse;
