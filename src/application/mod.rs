// Application layer - map controllers and collaborator traits
pub mod drawing_tool;
pub mod route_display;
pub mod zone_drawing;
pub mod zone_reconciliation;
pub mod zone_repository;
