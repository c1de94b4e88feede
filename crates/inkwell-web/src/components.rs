mod app_header;
mod button;
mod diary_card;
mod dialog_frame;
mod empty_state;

pub use app_header::AppHeader;
pub use button::{
  Button,
  ButtonVariant
};
pub use diary_card::DiaryCard;
pub use dialog_frame::DialogFrame;
pub use empty_state::EmptyState;
