use serde::{Deserialize, Serialize};

/// 团队名册文件（包含全部团队）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamsFile {
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// 单个团队
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
}

/// 团队成员
///
/// name 为空的成员视为无效条目，提取名单时会被跳过
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub name: String,
}

impl TeamsFile {
    /// 团队总数
    pub fn total_teams(&self) -> usize {
        self.teams.len()
    }

    /// 按名称查找团队
    pub fn find_team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }
}

/// 提取有效的成员名单（保持名册顺序，跳过无名条目）
pub fn member_names(members: &[TeamMember]) -> Vec<String> {
    members
        .iter()
        .filter(|m| !m.name.is_empty())
        .map(|m| m.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_teams_file() {
        let content = r#"
            [[teams]]
            name = "TeamA"

            [[teams.team_members]]
            name = "张三"

            [[teams.team_members]]
            name = "李四"

            [[teams]]
            name = "TeamB"
        "#;
        let file: TeamsFile = toml::from_str(content).unwrap();
        assert_eq!(file.total_teams(), 2);

        let team = file.find_team("TeamA").unwrap();
        assert_eq!(member_names(&team.team_members), vec!["张三", "李四"]);

        let team_b = file.find_team("TeamB").unwrap();
        assert!(team_b.team_members.is_empty());
    }

    #[test]
    fn test_find_team_missing() {
        let file: TeamsFile = toml::from_str("").unwrap();
        assert!(file.find_team("TeamA").is_none());
    }

    #[test]
    fn test_member_names_skips_unnamed() {
        let members = vec![
            TeamMember {
                name: "王五".to_string(),
            },
            TeamMember {
                name: String::new(),
            },
        ];
        assert_eq!(member_names(&members), vec!["王五"]);
    }
}
