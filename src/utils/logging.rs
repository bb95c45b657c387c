/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use crate::models::assignment::Assignment;
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 应用配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 病历分配模式");
    info!("📁 病历目录: {}", config.charts_folder);
    info!("👥 团队: {}", config.team_name);
    info!("📝 报告文件: {}", config.output_report_file);
    info!("{}", "=".repeat(60));
}

/// 记录病历加载与筛选信息
///
/// # 参数
/// - `loaded`: 加载的文档总数
/// - `with_pages`: 含有效页码的文档数
pub fn log_charts_loaded(loaded: usize, with_pages: usize) {
    info!("✓ 加载 {} 份文档", loaded);
    info!("📋 其中 {} 份含有效页码，进入分配\n", with_pages);
}

/// 记录分配结果概览
///
/// # 参数
/// - `assignment`: 分配结果
pub fn log_assignment_result(assignment: &Assignment) {
    info!("\n分配结果:");
    for workload in &assignment.workloads {
        info!(
            "{}: {} 份病历, {} 页",
            workload.member,
            workload.chart_count(),
            workload.total_pages
        );
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `assignment`: 分配结果
/// - `report_file_path`: 报告文件路径
pub fn print_final_stats(assignment: &Assignment, report_file_path: &str) {
    let stats = assignment.stats();

    info!("\n{}", "=".repeat(60));
    info!("📊 分配完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 病历: {} 份", stats.total_charts);
    info!("📄 页数: {} 页", stats.total_pages);
    info!("👥 成员: {} 名", stats.member_count);
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", report_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
