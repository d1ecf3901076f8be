/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 输入 CSV 文件路径
    pub input_path: String,
    /// 二维码输出目录
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "paid_list_with_status.csv".to_string(),
            output_dir: "qr_codes".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_path: std::env::var("INPUT_CSV").unwrap_or(default.input_path),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
        }
    }
}
