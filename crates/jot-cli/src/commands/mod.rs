pub mod add;
pub mod attachment;
pub mod common;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod show;
pub mod tags;
