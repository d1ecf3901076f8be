//! 二维码图片写入服务 - 业务能力层
//!
//! 只负责"把一段文本编码为二维码并保存为 PNG"能力，不关心流程

use crate::error::AppResult;
use anyhow::Context;
use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// 每个模块渲染的像素边长
const MODULE_SIZE: u32 = 10;
/// 四周空白区宽度（模块数）
const QUIET_ZONE: u32 = 4;

/// 二维码图片写入服务
///
/// 职责：
/// - 把单条文本编码为二维码并写入输出目录
/// - 同名文件直接覆盖
/// - 不关心记录列表和处理顺序
pub struct QrImageWriter {
    output_dir: PathBuf,
}

impl QrImageWriter {
    /// 创建新的写入服务
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 确保输出目录存在，已存在时不报错
    pub fn ensure_output_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("无法创建输出目录: {}", self.output_dir.display()))?;
        Ok(())
    }

    /// 将文本编码为二维码并写入 `<输出目录>/<payload>.png`
    ///
    /// # 参数
    /// - `payload`: 要编码的文本，同时作为文件名
    ///
    /// # 返回
    /// 返回生成的图片路径
    pub fn write(&self, payload: &str) -> AppResult<PathBuf> {
        debug!("正在编码: {} (长度: {})", payload, payload.len());

        let image = render_qr_image(payload)?;
        let file_path = self.output_dir.join(format!("{}.png", payload));

        // 空 SRN 会产生 `.png` 这种无法从扩展名推断格式的文件名，显式指定 PNG
        image
            .save_with_format(&file_path, image::ImageFormat::Png)
            .with_context(|| format!("无法保存图片: {}", file_path.display()))?;

        Ok(file_path)
    }
}

/// 将文本渲染为黑白二维码图片
///
/// 纠错等级为 Low（约 7% 冗余），版本从 1 开始随内容自动放大；
/// 模块尺寸和空白区宽度固定。
fn render_qr_image(payload: &str) -> AppResult<GrayImage> {
    let code = QrCode::with_error_correction_level(payload, EcLevel::L)
        .with_context(|| format!("二维码编码失败: {}", payload))?;

    let module_count = code.width() as u32;
    let image_size = (module_count + QUIET_ZONE * 2) * MODULE_SIZE;
    let mut image = GrayImage::from_pixel(image_size, image_size, Luma([255]));

    for y in 0..module_count {
        for x in 0..module_count {
            if code[(x as usize, y as usize)] == Color::Dark {
                let px = (QUIET_ZONE + x) * MODULE_SIZE;
                let py = (QUIET_ZONE + y) * MODULE_SIZE;
                for dy in 0..MODULE_SIZE {
                    for dx in 0..MODULE_SIZE {
                        image.put_pixel(px + dx, py + dy, Luma([0]));
                    }
                }
            }
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_version1_dimensions() {
        // 短内容落在版本 1：21 模块，加上两侧各 4 模块空白共 29 模块
        let image = render_qr_image("PES1201800001").expect("应该成功渲染");

        assert_eq!(image.dimensions(), (290, 290));
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render_qr_image("PES1201800001").expect("应该成功渲染");
        let second = render_qr_image("PES1201800001").expect("应该成功渲染");

        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn test_render_quiet_zone_and_finder_pattern() {
        let image = render_qr_image("PES1201800001").expect("应该成功渲染");

        // 左上角位于空白区，应为白色
        assert_eq!(*image.get_pixel(0, 0), Luma([255u8]));
        // 空白区之后是定位图案左上角的黑色模块
        let offset = QUIET_ZONE * MODULE_SIZE;
        assert_eq!(*image.get_pixel(offset, offset), Luma([0u8]));
    }

    #[test]
    fn test_write_creates_png() {
        let dir = std::env::temp_dir().join(format!("qr_writer_test_{}", std::process::id()));
        let writer = QrImageWriter::new(&dir);
        writer.ensure_output_dir().expect("应该成功创建目录");

        let path = writer.write("PES1201800001").expect("应该成功写入");

        assert!(path.exists());
        assert!(path.to_string_lossy().ends_with("PES1201800001.png"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_ensure_output_dir_is_idempotent() {
        let dir = std::env::temp_dir().join(format!("qr_writer_dir_test_{}", std::process::id()));
        let writer = QrImageWriter::new(&dir);

        writer.ensure_output_dir().expect("第一次创建应该成功");
        writer.ensure_output_dir().expect("目录已存在时也应该成功");

        fs::remove_dir_all(&dir).ok();
    }
}
