use crate::error::{AppError, AppResult, FileError};
use crate::models::team::{TeamMember, TeamsFile};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载团队名册
pub async fn load_teams_file(teams_file_path: &str) -> AppResult<TeamsFile> {
    let path = Path::new(teams_file_path);

    if !path.exists() {
        return Err(AppError::File(FileError::NotFound {
            path: teams_file_path.to_string(),
        }));
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(teams_file_path, e))?;

    let teams: TeamsFile =
        toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(teams_file_path, e))?;

    Ok(teams)
}

/// 获取团队数据：返回（团队总数, 指定团队的成员列表）
///
/// 指定团队不存在时返回业务错误，由调用方决定是否降级处理
pub async fn load_team_data(
    teams_file_path: &str,
    team_name: &str,
) -> AppResult<(usize, Vec<TeamMember>)> {
    let teams_file = load_teams_file(teams_file_path).await?;
    let total_teams = teams_file.total_teams();

    let team = teams_file
        .find_team(team_name)
        .ok_or_else(|| AppError::team_not_found(team_name))?;

    Ok((total_teams, team.team_members.clone()))
}
