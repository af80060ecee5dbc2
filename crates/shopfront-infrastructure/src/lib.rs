//! Shopfront infrastructure: persistence, configuration, and the HTTP
//! order gateway.

pub mod cart_state_repository;
pub mod config;
pub mod dto;
pub mod order_gateway;
pub mod paths;
pub mod storage;

pub use cart_state_repository::FileCartStateRepository;
pub use config::ShopfrontConfig;
pub use order_gateway::HttpOrderGateway;
