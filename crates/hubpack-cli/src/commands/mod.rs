//! One module per hubpack goal

pub mod build;
pub mod package;
pub mod pipeline_json;
pub mod plugin_json;
pub mod show_config;
pub mod spec_json;
