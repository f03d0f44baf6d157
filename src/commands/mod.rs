pub mod panel;
pub mod settings;
pub mod speech;
