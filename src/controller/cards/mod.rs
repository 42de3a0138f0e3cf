pub mod data_service;
pub mod highlight;
pub mod http_handlers;

pub use data_service::*;
pub use highlight::*;
pub use http_handlers::*;
