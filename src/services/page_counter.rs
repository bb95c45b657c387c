//! 页数统计服务 - 业务能力层
//!
//! 只负责"数页码"能力，不关心流程

use crate::error::{AppError, AppResult};
use regex::{Regex, RegexBuilder};

/// 页数统计服务
///
/// 职责：
/// - 按页码标记统计单份病历 OCR markdown 的页数
/// - 匹配不区分大小写，统计非重叠匹配次数
/// - 无副作用，markdown 缺失或为空时页数为 0
pub struct PageCounter {
    pattern: Regex,
}

impl PageCounter {
    /// 使用页码标记正则表达式创建统计服务
    ///
    /// # 参数
    /// - `pattern`: 页码标记正则，如 `<!--\s*page\s+(\d+)\s*-->`
    ///
    /// # 返回
    /// 正则无效时返回配置错误
    pub fn new(pattern: &str) -> AppResult<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| AppError::pattern_invalid(pattern, e))?;

        Ok(Self { pattern: regex })
    }

    /// 统计一份病历的页数
    ///
    /// # 参数
    /// - `markdown`: OCR 识别出的 markdown 内容（可能缺失）
    ///
    /// # 返回
    /// 页码标记的出现次数，内容缺失或为空时为 0
    pub fn count(&self, markdown: Option<&str>) -> usize {
        match markdown {
            Some(text) if !text.is_empty() => self.pattern.find_iter(text).count(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_PATTERN: &str = r"<!--\s*page\s+(\d+)\s*-->";

    fn create_counter() -> PageCounter {
        PageCounter::new(DEFAULT_PATTERN).unwrap()
    }

    #[test]
    fn test_count_page_markers() {
        let counter = create_counter();
        let markdown = "<!-- page 1 -->\n第一页内容\n<!-- page 2 -->\n第二页内容\n<!-- page 3 -->";
        assert_eq!(counter.count(Some(markdown)), 3);
    }

    #[test]
    fn test_count_is_case_insensitive() {
        let counter = create_counter();
        let markdown = "<!-- PAGE 1 -->\n<!-- Page 2 -->\n<!--page 3-->";
        assert_eq!(counter.count(Some(markdown)), 3);
    }

    #[test]
    fn test_count_missing_markdown_is_zero() {
        let counter = create_counter();
        assert_eq!(counter.count(None), 0);
        assert_eq!(counter.count(Some("")), 0);
    }

    #[test]
    fn test_count_without_markers_is_zero() {
        let counter = create_counter();
        assert_eq!(counter.count(Some("没有任何页码标记的内容")), 0);
    }

    #[test]
    fn test_count_is_non_overlapping() {
        let counter = PageCounter::new("aa").unwrap();
        // "aaaa" 中非重叠匹配只有 2 次
        assert_eq!(counter.count(Some("aaaa")), 2);
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let result = PageCounter::new("(unclosed");
        assert!(result.is_err());
    }
}
