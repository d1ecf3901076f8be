//! CSV 记录加载模块

use crate::error::{AppError, AppResult};
use crate::models::record::{RawRecord, Record};
use anyhow::Context;
use std::path::Path;

/// CSV 必需列
const REQUIRED_COLUMNS: [&str; 2] = ["Name", "SRN"];

/// 从 CSV 文件加载记录列表
///
/// 表头校验在逐行读取之前完成，缺列时不会读取任何数据行。
/// 额外的列会被忽略。
///
/// # 参数
/// - `csv_path`: CSV 文件路径
///
/// # 返回
/// 返回按输入顺序排列的记录列表
pub fn load_csv_records(csv_path: &Path) -> AppResult<Vec<Record>> {
    if !csv_path.exists() {
        return Err(AppError::not_found(csv_path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("无法读取CSV文件: {}", csv_path.display()))?;

    // 校验表头必需列
    let headers = reader
        .headers()
        .with_context(|| format!("无法解析CSV表头: {}", csv_path.display()))?
        .clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::schema(missing));
    }

    // 逐行反序列化并规范化
    let mut records = Vec::new();
    for row in reader.deserialize::<RawRecord>() {
        let raw = row.with_context(|| format!("无法解析CSV数据行: {}", csv_path.display()))?;
        records.push(raw.normalize());
    }

    if records.is_empty() {
        return Err(AppError::empty_input(csv_path.display().to_string()));
    }

    Ok(records)
}
