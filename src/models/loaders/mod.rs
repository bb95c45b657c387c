pub mod json_loader;
pub mod toml_loader;

pub use json_loader::{load_all_chart_files, load_json_to_chart_document};
pub use toml_loader::{load_team_data, load_teams_file};
