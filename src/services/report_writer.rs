//! 报告写入服务 - 业务能力层
//!
//! 只负责"写分配报告文件"能力，不关心流程
//!
//! 文件分两段：初始化时写入文档清单，分配完成后追加分配报告

use crate::error::{AppError, AppResult};
use crate::models::assignment::Assignment;
use crate::models::chart::Chart;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 渲染分配报告正文
///
/// 纯函数：相同的分配结果产生完全相同的文本
///
/// # 参数
/// - `assignment`: 分配结果（工作量按名册顺序排列）
///
/// # 返回
/// 报告文本；没有成员时省略平均与负载均衡行，改写一条说明
pub fn render_assignment_report(assignment: &Assignment) -> String {
    let stats = assignment.stats();

    let mut report = format!(
        "{}\n病历分配报告\n{}\n\n",
        "=".repeat(60),
        "=".repeat(60)
    );

    report.push_str(&format!(
        "总计: {} 份病历, {} 页, {} 名成员\n",
        stats.total_charts, stats.total_pages, stats.member_count
    ));

    // 没有成员时平均值无定义，直接说明后返回
    let average = match stats.average_pages() {
        Some(average) => average,
        None => {
            report.push_str("\n没有可分配的成员，未执行分配\n");
            return report;
        }
    };
    report.push_str(&format!("平均: {:.2} 页/人\n\n", average));

    report.push_str("使用贪心负载均衡算法分配\n\n");

    for workload in &assignment.workloads {
        report.push_str(&format!(
            "{}: {} 份病历, {} 页\n",
            workload.member,
            workload.chart_count(),
            workload.total_pages
        ));
        for (i, chart) in workload.charts.iter().enumerate() {
            report.push_str(&format!(
                "  {}. {} ({} 页)\n",
                i + 1,
                chart.filename,
                chart.pages
            ));
        }
        report.push_str(&format!("{}\n", "-".repeat(40)));
    }

    report.push_str(&format!(
        "\n负载均衡: 最小={}, 最大={}, 差值={}\n",
        stats.min_load,
        stats.max_load,
        stats.variance()
    ));
    report.push_str(&format!("均衡效率: {:.1}%\n", stats.efficiency()));

    report
}

/// 报告写入服务
///
/// 职责：
/// - 初始化报告文件并写入文档清单
/// - 将分配报告追加到文件末尾
/// - 不关心流程顺序
pub struct ReportWriter {
    report_file_path: String,
}

impl ReportWriter {
    /// 创建新的报告写入服务
    pub fn new() -> Self {
        Self {
            report_file_path: "tmp/charts_output.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            report_file_path: path.into(),
        }
    }

    /// 报告文件路径
    pub fn path(&self) -> &str {
        &self.report_file_path
    }

    /// 初始化报告文件（清空旧内容）并写入团队概况与文档清单
    ///
    /// # 参数
    /// - `team_name`: 团队名称
    /// - `total_teams`: 团队总数
    /// - `member_names`: 按名册顺序排列的成员名单
    /// - `charts`: 筛选后待分配的病历
    pub async fn init_report_file(
        &self,
        team_name: &str,
        total_teams: usize,
        member_names: &[String],
        charts: &[Chart],
    ) -> AppResult<()> {
        debug!(
            "初始化报告文件: {} | 成员 {} 名 | 病历 {} 份",
            self.report_file_path,
            member_names.len(),
            charts.len()
        );

        let mut content = format!(
            "{}\n病历分配日志 - {}\n{}\n\n",
            "=".repeat(60),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );

        content.push_str(&format!("团队总数: {}\n", total_teams));
        content.push_str(&format!("{} 成员数: {}\n", team_name, member_names.len()));
        content.push_str(&format!("成员: {}\n", format_member_list(member_names)));
        content.push_str(&format!("{}\n\n", "=".repeat(60)));

        for (i, chart) in charts.iter().enumerate() {
            content.push_str(&format_document_block(i + 1, chart));
        }

        content.push_str(&format!("\n筛选结果: {} 份文档\n", charts.len()));

        std::fs::write(&self.report_file_path, content)
            .map_err(|e| AppError::file_write_failed(&self.report_file_path, e))?;

        Ok(())
    }

    /// 将分配报告追加到文件末尾
    pub async fn write_report(&self, assignment: &Assignment) -> AppResult<()> {
        debug!(
            "追加分配报告: {} | 成员 {} 名",
            self.report_file_path,
            assignment.member_count()
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.report_file_path)
            .map_err(|e| AppError::file_write_failed(&self.report_file_path, e))?;

        let report = format!("\n{}", render_assignment_report(assignment));
        file.write_all(report.as_bytes())
            .map_err(|e| AppError::file_write_failed(&self.report_file_path, e))?;

        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

// ========== 格式化辅助函数 ==========

/// 成员名单以逗号拼接，为空时写"无"
fn format_member_list(member_names: &[String]) -> String {
    if member_names.is_empty() {
        "无".to_string()
    } else {
        member_names.join(", ")
    }
}

/// 单份文档的清单条目
fn format_document_block(index: usize, chart: &Chart) -> String {
    format!(
        "文档 {}:\nID: {}\n文件: {}\n页数: {}\n{}\n",
        index,
        chart.id,
        chart.filename,
        chart.pages,
        "-".repeat(50)
    )
}
