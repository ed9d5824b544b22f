mod config;
mod confirm;
mod executor;
mod listing;
mod planner;
mod template;

pub use config::{
    app_paths, load_config, load_config_from, AppConfig, AppPaths, ConfigError, RunMode,
};
pub use confirm::{confirm, confirm_stdin};
pub use executor::{execute_plan, RenameFailure, RunResult};
pub use listing::{list_entries, DirectoryEntry};
pub use planner::{plan_batch, plan_single, RenamePlan, RenamePlanItem, RenameStats};
pub use template::{expand, validate_template, TemplateError, MARKER};
