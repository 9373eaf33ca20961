//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod badges;
mod delete_confirm_button;
mod layout;
mod loading_skeleton;
mod stat_card;
mod tag_input;
mod toast_stack;

pub use badges::{PapelBadge, PriorityBadge, StatusBadge, TagList};
pub use delete_confirm_button::DeleteConfirmButton;
pub use layout::Layout;
pub use loading_skeleton::LoadingSkeleton;
pub use stat_card::StatCard;
pub use tag_input::TagInput;
pub use toast_stack::ToastStack;
