//! 顶层编排模块
//!
//! ## 职责
//!
//! 1. **应用初始化**：输出启动横幅、准备输出目录
//! 2. **批量加载**：从 CSV 文件读取全部记录（`Vec<Record>`）
//! 3. **顺序处理**：按输入顺序逐条生成二维码，每条输出一行进度
//! 4. **结果汇报**：全部完成后输出统计横幅
//!
//! 处理严格顺序执行，单条记录的失败不在循环内捕获，
//! 直接向上传播并中止整个批次。

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{load_csv_records, Record};
use crate::services::QrImageWriter;
use std::path::Path;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    writer: QrImageWriter,
}

impl App {
    /// 初始化应用
    ///
    /// 输出目录在读取输入文件之前创建，输入文件缺失时目录依然存在。
    pub fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);

        let writer = QrImageWriter::new(&config.output_dir);
        writer.ensure_output_dir()?;

        Ok(Self { config, writer })
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> AppResult<()> {
        // 加载全部记录
        let records = load_csv_records(Path::new(&self.config.input_path))?;

        let total = records.len();
        log_records_loaded(total);

        // 逐条生成二维码
        for (index, record) in records.iter().enumerate() {
            let file_path = self.writer.write(&record.srn)?;
            log_record_generated(index + 1, total, record, &file_path);
        }

        // 输出最终统计
        print_completion(total, &self.config);

        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量二维码生成模式");
    info!("📄 输入文件: {}", config.input_path);
    info!("📁 输出目录: {}", config.output_dir);
    info!("{}", "=".repeat(60));
}

fn log_records_loaded(total: usize) {
    info!("✓ 在 CSV 文件中找到 {} 条记录", total);
}

fn log_record_generated(index: usize, total: usize, record: &Record, file_path: &Path) {
    info!(
        "[记录 {}/{}] ✓ 已生成二维码: {} (SRN: {}, 状态: {}) -> {}",
        index,
        total,
        record.name,
        record.srn,
        record.status,
        file_path.display()
    );
}

fn print_completion(total: usize, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!(
        "✅ 全部 {} 个二维码已生成并保存至 {} 目录",
        total, config.output_dir
    );
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}
