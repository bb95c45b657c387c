/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 病历JSON文件存放目录
    pub charts_folder: String,
    /// 团队名册文件
    pub team_file: String,
    /// 接收分配的团队名称
    pub team_name: String,
    /// 输出报告文件
    pub output_report_file: String,
    /// 页码标记正则表达式
    pub page_marker_pattern: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            charts_folder: "charts".to_string(),
            team_file: "team.toml".to_string(),
            team_name: "TeamA".to_string(),
            output_report_file: "tmp/charts_output.txt".to_string(),
            page_marker_pattern: r"<!--\s*page\s+(\d+)\s*-->".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            charts_folder: std::env::var("CHARTS_FOLDER").unwrap_or(default.charts_folder),
            team_file: std::env::var("TEAM_FILE").unwrap_or(default.team_file),
            team_name: std::env::var("TEAM_NAME").unwrap_or(default.team_name),
            output_report_file: std::env::var("OUTPUT_REPORT_FILE").unwrap_or(default.output_report_file),
            page_marker_pattern: std::env::var("PAGE_MARKER_PATTERN").unwrap_or(default.page_marker_pattern),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
