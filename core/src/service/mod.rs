pub mod dto;
pub mod stats_service;
