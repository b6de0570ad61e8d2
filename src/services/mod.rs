pub mod http_client;
pub mod resource_service;
