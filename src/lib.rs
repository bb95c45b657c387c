//! # Chart Split Assign
//!
//! 一个用于病历分配负载均衡的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 数据结构与文件加载
//! - `ChartDocument` - 存储导出的病历文档
//! - `Chart` / `Assignment` - 分配用的病历条目与分配结果
//! - `loaders/` - JSON 病历与 TOML 名册加载
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程
//! - `PageCounter` - 页码统计能力
//! - `split_charts` - 贪心负载均衡分配能力
//! - `ReportWriter` - 写报告文件能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/app` - 完整流程调度，管理配置与输出
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Assignment, Chart, ChartDocument, LoadStats, Workload};
pub use orchestrator::App;
pub use services::{render_assignment_report, split_charts, PageCounter, ReportWriter};
