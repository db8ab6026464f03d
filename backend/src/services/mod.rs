pub mod settings;
pub mod terms;
