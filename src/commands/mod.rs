pub mod base_commands;
pub mod burndown_cmd;
pub mod completions_cmd;
pub mod get_burndown_cmd;
pub mod get_issues_cmd;
pub mod plot_burndown_cmd;
pub mod report_format;
