// Global state management
// Stores provide shared state across the application

pub mod i18n;
pub mod nav_visibility;
