pub mod category_select;
pub mod difficulty;
pub mod snapshot;
