//! 宽松的反序列化工具
//!
//! LeetCode 两个站点对同一字段的类型并不一致：
//! - ID 有时是字符串，有时是数字（如 `topicId`、`questionId`）
//! - 字符串字段可能返回 `null`

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn id_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 反序列化可选 ID：字符串或数字 -> `Some(String)`，`null`/缺失 -> `None`
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(id_from_value))
}

/// 反序列化必填 ID：字符串或数字
pub fn required_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_from_value(value).ok_or_else(|| Error::custom("expected a string or numeric id"))
}

/// 反序列化字符串，`null` 视为空字符串
pub fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 反序列化任意类型，`null` 视为 `Default`（计数为 0，列表为空）
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
