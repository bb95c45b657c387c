use serde::{Deserialize, Serialize};

/// 病历文档（来自存储导出的原始 JSON）
///
/// 对应 MongoDB 导出格式：`_id` 可能是普通字符串，也可能是
/// 扩展 JSON 的 `{"$oid": "..."}` 形式，两种都接受。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDocument {
    #[serde(rename = "_id", deserialize_with = "deserialize_object_id")]
    pub id: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr: Option<OcrData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<WorkflowState>,
}

/// OCR 识别结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrData {
    #[serde(default)]
    pub markdown: Option<String>,
}

/// 工作流状态（决定病历是否处于待分配池中）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowState {
    #[serde(default)]
    pub action_owner: Option<String>,
    #[serde(default)]
    pub current_action: Option<String>,
    #[serde(default)]
    pub current_queue: Option<String>,
}

impl ChartDocument {
    /// 获取 OCR markdown 内容（不存在时返回 None）
    pub fn markdown(&self) -> Option<&str> {
        self.ocr.as_ref().and_then(|ocr| ocr.markdown.as_deref())
    }

    /// 获取用于展示的文件名，缺失时使用 "N/A"
    pub fn display_filename(&self) -> String {
        self.filename.clone().unwrap_or_else(|| "N/A".to_string())
    }

    /// 判断病历是否处于待分配池中
    ///
    /// 条件：工作流归属 system、当前动作 unassigned、当前队列 pool，
    /// 且 OCR markdown 存在且非空
    pub fn is_unassigned_in_pool(&self) -> bool {
        let workflow_ok = match &self.workflow {
            Some(w) => {
                w.action_owner.as_deref() == Some("system")
                    && w.current_action.as_deref() == Some("unassigned")
                    && w.current_queue.as_deref() == Some("pool")
            }
            None => false,
        };

        workflow_ok && self.markdown().is_some_and(|m| !m.is_empty())
    }

    /// 结合已统计的页数，转换为待分配的病历条目
    pub fn to_chart(&self, pages: usize) -> Chart {
        Chart {
            id: self.id.clone(),
            filename: self.display_filename(),
            pages,
        }
    }
}

/// 待分配的病历条目（已完成页数统计，之后不再变化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub id: String,
    pub filename: String,
    pub pages: usize,
}

impl Chart {
    pub fn new(id: impl Into<String>, filename: impl Into<String>, pages: usize) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            pages,
        }
    }
}

// Helper function to deserialize _id as either a plain string or {"$oid": "..."}
fn deserialize_object_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{MapAccess, Visitor};
    use std::fmt;

    struct ObjectIdVisitor;

    impl<'de> Visitor<'de> for ObjectIdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, integer, or {\"$oid\": \"...\"} object id")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut oid: Option<String> = None;
            while let Some(key) = map.next_key::<String>()? {
                let value = map.next_value::<String>()?;
                if key == "$oid" {
                    oid = Some(value);
                }
            }
            oid.ok_or_else(|| serde::de::Error::missing_field("$oid"))
        }
    }

    deserializer.deserialize_any(ObjectIdVisitor)
}
