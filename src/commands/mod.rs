pub mod add;
pub mod config;
pub mod delete;
pub mod lang;
pub mod list;
