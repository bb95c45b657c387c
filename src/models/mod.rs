pub mod assignment;
pub mod chart;
pub mod loaders;
pub mod team;

pub use assignment::{Assignment, LoadStats, Workload};
pub use chart::{Chart, ChartDocument, OcrData, WorkflowState};
pub use loaders::{load_all_chart_files, load_json_to_chart_document, load_team_data, load_teams_file};
pub use team::{member_names, Team, TeamMember, TeamsFile};
