pub mod check;
mod context;
pub mod init;
pub mod rules;

pub use check::{run_check, run_check_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{format_rules_text, run_rules, run_rules_impl};
