//! 病历分配服务 - 业务能力层
//!
//! 只负责"贪心负载均衡分配"能力，不关心流程
//!
//! 算法（LPT，最长处理时间优先）：
//! 1. 病历按页数降序排序（页数相同保持输入顺序）
//! 2. 依次把每份病历分给当前总页数最小的成员
//! 3. 总页数相同时取名册中靠前的成员，保证结果可复现

use crate::models::assignment::{Assignment, Workload};
use crate::models::chart::Chart;

/// 使用贪心负载均衡算法分配病历
///
/// # 参数
/// - `charts`: 待分配的病历（已完成页数统计）
/// - `member_names`: 按名册顺序排列的成员名单
///
/// # 返回
/// 每个成员的工作量；名册为空时返回空结果（视为"无事可做"，不是错误）
pub fn split_charts(charts: Vec<Chart>, member_names: &[String]) -> Assignment {
    if member_names.is_empty() {
        return Assignment::default();
    }

    // 页数降序；sort_by 是稳定排序，页数相同的病历保持输入顺序
    let mut charts_sorted = charts;
    charts_sorted.sort_by(|a, b| b.pages.cmp(&a.pages));

    let mut assignment = Assignment::with_members(member_names);

    for chart in charts_sorted {
        let index = least_loaded_index(&assignment.workloads);
        assignment.workloads[index].push(chart);
    }

    assignment
}

/// 找到当前总页数最小的成员下标
///
/// 线性扫描并保留第一个最小值，平局时即为名册中靠前的成员
fn least_loaded_index(workloads: &[Workload]) -> usize {
    let mut min_index = 0;
    for (index, workload) in workloads.iter().enumerate().skip(1) {
        if workload.total_pages < workloads[min_index].total_pages {
            min_index = index;
        }
    }
    min_index
}
