pub mod burndown;
pub mod issue;
pub mod snapshot;
