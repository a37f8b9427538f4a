pub mod artwork_service;
pub mod order_service;
