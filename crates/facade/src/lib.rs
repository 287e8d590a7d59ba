// Shipping configuration domain service: origin address and package templates per store

pub mod error;
pub mod facade;
pub mod memory;
pub mod service;

pub use error::{Result, ShippingError};
pub use facade::ShippingFacade;
pub use memory::InMemoryShippingFacade;
pub use service::ShippingService;
