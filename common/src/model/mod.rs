pub mod action;
pub mod asset;
pub mod checklist;
pub mod lookup;
pub mod settings;
pub mod user;
