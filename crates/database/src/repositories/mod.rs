pub mod groups;
pub mod origins;
pub mod packages;
pub mod stores;
