//! Card commands

mod add;
mod delete;
mod edit;
mod mv;

pub use add::AddCard;
pub use delete::DeleteCard;
pub use edit::{EditCard, ResponsibilitiesInput};
pub use mv::MoveCard;
