use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 输入文件不存在
    NotFound {
        path: String,
    },
    /// 输入文件只有表头，没有数据行
    EmptyInput {
        path: String,
    },
    /// CSV 表头缺少必需列
    Schema {
        missing: Vec<String>,
    },
    /// 其他处理错误（用于包装第三方库错误）
    Processing(anyhow::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound { path } => write!(f, "文件不存在: {}", path),
            AppError::EmptyInput { path } => write!(f, "文件没有数据行: {}", path),
            AppError::Schema { missing } => {
                write!(f, "缺少必需列: {}", missing.join(", "))
            }
            AppError::Processing(source) => write!(f, "处理错误: {}", source),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Processing(source) => Some(source.as_ref()),
            _ => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Processing(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Processing(err.into())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Processing(err.into())
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::Processing(err.into())
    }
}

impl From<qrcode::types::QrError> for AppError {
    fn from(err: qrcode::types::QrError) -> Self {
        AppError::Processing(err.into())
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件不存在错误
    pub fn not_found(path: impl Into<String>) -> Self {
        AppError::NotFound { path: path.into() }
    }

    /// 创建空输入错误
    pub fn empty_input(path: impl Into<String>) -> Self {
        AppError::EmptyInput { path: path.into() }
    }

    /// 创建缺少必需列错误
    pub fn schema(missing: Vec<String>) -> Self {
        AppError::Schema { missing }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
