use crate::error::{AppError, AppResult, FileError};
use crate::models::chart::ChartDocument;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 JSON 文件加载单份病历文档（MongoDB 导出格式）
pub async fn load_json_to_chart_document(json_file_path: &Path) -> AppResult<ChartDocument> {
    let path_display = json_file_path.display().to_string();

    let content = fs::read_to_string(json_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_display, e))?;

    let document: ChartDocument =
        serde_json::from_str(&content).map_err(|e| AppError::json_parse_failed(&path_display, e))?;

    // 缺少标识的文档在进入分配流程前拒绝
    if document.id.is_empty() {
        return Err(AppError::malformed_chart(&path_display, "文档 _id 为空"));
    }

    Ok(document)
}

/// 从文件夹中加载所有 JSON 病历文档
///
/// 解析失败的文件跳过并告警，不中断整体加载。
/// 文件按名称排序，保证重复运行时顺序一致。
pub async fn load_all_chart_files(folder_path: &str) -> AppResult<Vec<ChartDocument>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        return Err(AppError::File(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }));
    }

    let mut json_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            json_files.push(path);
        }
    }

    json_files.sort();

    let mut documents = Vec::new();
    for path in &json_files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_json_to_chart_document(path).await {
            Ok(document) => {
                documents.push(document);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(documents)
}
