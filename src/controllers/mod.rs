mod actions;
mod filter;

pub use self::actions::Actions as ActionsController;
pub use self::filter::Filter as FilterController;
