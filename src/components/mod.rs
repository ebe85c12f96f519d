//! UI Components

mod board_lane;
mod boards_section;
mod link_overlay;
mod link_select;
mod project_card;
mod sprint_board_section;
mod task_card;

// Re-export all public items
pub use board_lane::*;
pub use boards_section::*;
pub use link_overlay::*;
pub use link_select::*;
pub use project_card::*;
pub use sprint_board_section::*;
pub use task_card::*;
