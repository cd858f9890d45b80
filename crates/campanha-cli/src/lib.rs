//! CLI library components for the campaign base generator.

pub mod generate;
pub mod logging;
pub mod settings;
