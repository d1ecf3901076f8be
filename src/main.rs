use generate_qr_codes::error::AppError;
use generate_qr_codes::{logger, App, Config};
use tracing::error;

fn main() {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    if let Err(e) = App::initialize(config).and_then(|app| app.run()) {
        report_error(&e);
    }
}

/// 将错误类型映射为单行控制台诊断
fn report_error(err: &AppError) {
    match err {
        AppError::NotFound { path } => error!("❌ 找不到输入文件: {}", path),
        AppError::EmptyInput { path } => error!("❌ 输入文件没有数据行: {}", path),
        AppError::Schema { missing } => {
            error!("❌ CSV 缺少必需列: {}", missing.join(", "))
        }
        AppError::Processing(source) => error!("❌ 处理失败: {}", source),
    }
}
