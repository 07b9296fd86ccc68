pub mod board;
pub mod queue_panel;
pub mod theme;
pub mod toolbar;
