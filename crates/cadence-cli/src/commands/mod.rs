pub mod add;
pub mod delete;
pub mod edit;
pub mod expand;
pub mod list;
