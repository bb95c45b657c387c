use crate::models::chart::Chart;

/// 单个成员的工作量（分配到的病历序列 + 页数累计）
///
/// charts 保持分配顺序，total_pages 始终等于各病历页数之和
#[derive(Debug, Clone, PartialEq)]
pub struct Workload {
    pub member: String,
    pub charts: Vec<Chart>,
    pub total_pages: usize,
}

impl Workload {
    pub fn new(member: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            charts: Vec::new(),
            total_pages: 0,
        }
    }

    /// 追加一份病历并累计页数
    pub fn push(&mut self, chart: Chart) {
        self.total_pages += chart.pages;
        self.charts.push(chart);
    }

    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }
}

/// 分配结果：按名册顺序排列的成员工作量
///
/// 刻意使用 Vec 而不是 HashMap，保证遍历顺序与名册一致、结果可复现
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    pub workloads: Vec<Workload>,
}

impl Assignment {
    /// 按名册顺序为每个成员初始化空工作量
    ///
    /// 重复的成员名只保留第一个（同名共用一个工作量桶，调用方应避免重名）
    pub fn with_members(members: &[String]) -> Self {
        let mut workloads: Vec<Workload> = Vec::with_capacity(members.len());
        for name in members {
            if !workloads.iter().any(|w| &w.member == name) {
                workloads.push(Workload::new(name.clone()));
            }
        }
        Self { workloads }
    }

    pub fn is_empty(&self) -> bool {
        self.workloads.is_empty()
    }

    pub fn member_count(&self) -> usize {
        self.workloads.len()
    }

    pub fn total_charts(&self) -> usize {
        self.workloads.iter().map(|w| w.chart_count()).sum()
    }

    pub fn total_pages(&self) -> usize {
        self.workloads.iter().map(|w| w.total_pages).sum()
    }

    /// 计算负载统计（报告的聚合视图）
    pub fn stats(&self) -> LoadStats {
        let loads: Vec<usize> = self.workloads.iter().map(|w| w.total_pages).collect();
        LoadStats {
            total_charts: self.total_charts(),
            total_pages: self.total_pages(),
            member_count: self.member_count(),
            min_load: loads.iter().copied().min().unwrap_or(0),
            max_load: loads.iter().copied().max().unwrap_or(0),
        }
    }
}

/// 负载统计
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadStats {
    pub total_charts: usize,
    pub total_pages: usize,
    pub member_count: usize,
    pub min_load: usize,
    pub max_load: usize,
}

impl LoadStats {
    /// 人均页数；没有成员时无定义
    pub fn average_pages(&self) -> Option<f64> {
        if self.member_count == 0 {
            None
        } else {
            Some(self.total_pages as f64 / self.member_count as f64)
        }
    }

    /// 负载差值（最大与最小之差）
    pub fn variance(&self) -> usize {
        self.max_load - self.min_load
    }

    /// 均衡效率：`(1 - 差值/最大负载) × 100`，完全无负载时视为 100%
    pub fn efficiency(&self) -> f64 {
        if self.max_load > 0 {
            (1.0 - self.variance() as f64 / self.max_load as f64) * 100.0
        } else {
            100.0
        }
    }
}
