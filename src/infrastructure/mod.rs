// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_zone_repository;
pub mod memory_drawing_tool;
