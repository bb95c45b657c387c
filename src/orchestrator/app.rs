//! 病历分配处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责病历分配的完整流程。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：准备输出目录、编译页码正则、创建报告写入服务
//! 2. **数据加载**：读取团队名册与病历文档
//! 3. **筛选统计**：按工作流状态筛选待池文档并统计页数
//! 4. **分配调度**：委托 chart_splitter 执行贪心负载均衡
//! 5. **结果输出**：写报告文件、打印最终统计
//!
//! ## 设计特点
//!
//! - **顶层编排**：不做具体业务判断
//! - **向下委托**：加载在 models，分配与写报告在 services

use crate::config::Config;
use crate::models::chart::{Chart, ChartDocument};
use crate::models::team::TeamMember;
use crate::models::{load_all_chart_files, load_team_data, member_names};
use crate::services::{split_charts, PageCounter, ReportWriter};
use crate::utils::logging::{
    log_assignment_result, log_charts_loaded, log_startup, print_final_stats, truncate_text,
};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    page_counter: PageCounter,
    report_writer: ReportWriter,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 报告文件所在目录需要先存在
        if let Some(parent) = Path::new(&config.output_report_file).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("无法创建输出目录: {}", parent.display()))?;
            }
        }

        let page_counter = PageCounter::new(&config.page_marker_pattern)?;
        let report_writer = ReportWriter::with_path(config.output_report_file.clone());

        log_startup(&config);

        Ok(Self {
            config,
            page_counter,
            report_writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 团队名册
        let (total_teams, team_members) = self.load_team_roster().await;
        let names = member_names(&team_members);

        // 病历文档
        let documents = self.load_chart_documents().await?;
        let (in_pool, charts) = self.select_charts(&documents);
        log_charts_loaded(in_pool, charts.len());

        // 文档清单总是写入，即使之后跳过分配
        self.report_writer
            .init_report_file(&self.config.team_name, total_teams, &names, &charts)
            .await
            .context("初始化报告文件失败")?;

        if names.is_empty() || charts.is_empty() {
            warn!("⚠️ 没有可分配的成员或病历，程序结束");
            return Ok(());
        }

        // 分配并写报告
        let assignment = split_charts(charts, &names);
        self.report_writer
            .write_report(&assignment)
            .await
            .context("写入分配报告失败")?;

        log_assignment_result(&assignment);
        print_final_stats(&assignment, self.report_writer.path());

        Ok(())
    }

    /// 读取团队名册，失败时按无成员处理
    async fn load_team_roster(&self) -> (usize, Vec<TeamMember>) {
        info!("\n📁 正在读取团队名册...");
        match load_team_data(&self.config.team_file, &self.config.team_name).await {
            Ok(team) => team,
            Err(e) => {
                warn!("⚠️ 读取团队数据失败: {}", e);
                (0, Vec::new())
            }
        }
    }

    /// 扫描并加载病历文档
    async fn load_chart_documents(&self) -> Result<Vec<ChartDocument>> {
        info!("\n📁 正在扫描病历文档...");
        Ok(load_all_chart_files(&self.config.charts_folder).await?)
    }

    /// 筛选待分配病历并统计页数
    ///
    /// 先按工作流状态筛选出待池文档，再剔除没有页码标记的文档
    ///
    /// # 返回
    /// (待池文档数, 进入分配的病历)
    fn select_charts(&self, documents: &[ChartDocument]) -> (usize, Vec<Chart>) {
        let mut in_pool = 0;
        let mut charts = Vec::new();

        for document in documents {
            if !document.is_unassigned_in_pool() {
                continue;
            }
            in_pool += 1;

            let pages = self.page_counter.count(document.markdown());
            if self.config.verbose_logging {
                if let Some(markdown) = document.markdown() {
                    debug!(
                        "📄 {} | {} 页 | 内容预览: {}",
                        document.display_filename(),
                        pages,
                        truncate_text(markdown, 80)
                    );
                }
            }
            if pages == 0 {
                continue;
            }

            charts.push(document.to_chart(pages));
        }

        (in_pool, charts)
    }
}
