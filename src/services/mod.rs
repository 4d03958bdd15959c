pub mod action_service;
pub mod file_service;
pub mod listing_service;
