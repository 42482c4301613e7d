//! Command-line collaborators: the interactive menu and the seed command.

pub mod menu;
pub mod seed;

pub use menu::run_menu;
pub use seed::seed_samples;
