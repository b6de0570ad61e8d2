pub mod admin_dto;
pub mod list_dto;
pub mod offer_dto;
