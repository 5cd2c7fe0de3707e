pub mod bugzilla_api;
pub mod burndown;
pub mod burndown_csv;
pub mod burndown_plot;
pub mod burndown_run;
pub mod data_source;
pub mod issues_yaml;
