//! 记录数据模型

use serde::Deserialize;

/// 状态列缺失时使用的占位值
pub const UNKNOWN_STATUS: &str = "Unknown";

/// CSV 原始行（字段名与表头一一对应）
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "SRN")]
    pub srn: String,
    /// Status 列可选，列不存在或单元格为空时为 None
    #[serde(rename = "Status")]
    pub status: Option<String>,
}

impl RawRecord {
    /// 规范化为内部记录
    ///
    /// 去除姓名和 SRN 的首尾空白，缺失的状态补为占位值。
    /// SRN 不做唯一性、非空或字符集校验，原样用作文件名。
    pub fn normalize(self) -> Record {
        Record {
            name: self.name.trim().to_string(),
            srn: self.srn.trim().to_string(),
            status: self.status.unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
        }
    }
}

/// 一条待生成二维码的记录
#[derive(Debug, Clone)]
pub struct Record {
    /// 姓名
    pub name: String,
    /// 学号，既是二维码内容也是输出文件名
    pub srn: String,
    /// 缴费状态
    pub status: String,
}
