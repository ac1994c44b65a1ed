// Presentation layer - the map surface a UI shell embeds
pub mod interaction;
pub mod map_component;
