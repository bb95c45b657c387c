//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责完整分配流程的调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `app` - 病历分配处理器
//! - 管理应用生命周期（初始化、运行）
//! - 加载团队名册与病历文档
//! - 筛选待分配病历并统计页数
//! - 委托 services 完成分配与报告输出
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (完整流程)
//!     ↓
//! services (能力层：page_counter / chart_splitter / report_writer)
//!     ↓
//! models (数据层：文档、名册、分配结果)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：只做调度和统计，不做具体业务判断
//! 2. **向下依赖**：编排层 → services → models

pub mod app;

// 重新导出主要类型
pub use app::App;
