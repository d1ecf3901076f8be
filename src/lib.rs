//! # Generate QR Codes
//!
//! 从 CSV 名单批量生成二维码图片的 Rust 应用程序
//!
//! ## 处理流程
//!
//! 1. 确保输出目录存在（已存在时复用）
//! 2. 从 CSV 文件加载记录（必需列 Name / SRN，可选列 Status）
//! 3. 按输入顺序逐条把 SRN 编码为二维码并保存为 PNG
//! 4. 每条记录输出一行进度日志，全部完成后输出统计横幅
//!
//! 处理过程完全同步、严格顺序执行；任何一条记录失败都会中止整个批次。
//!
//! ## 模块结构
//!
//! - `config` - 运行配置（输入文件、输出目录）
//! - `error` - 统一错误类型
//! - `logger` - 日志初始化
//! - `models` - 记录模型与 CSV 加载
//! - `services` - 二维码图片写入能力
//! - `app` - 顶层编排

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{load_csv_records, Record};
pub use services::QrImageWriter;
