// ==========================================
// 成本利润测算 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 注意: 测算引擎本身不产生错误,错误只出现在文件 I/O 边界
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据质量错误 =====
    // 解析器对坏行只做静默跳过;唯一上抛给调用方的质量问题是
    // 「整张表没有解析出任何有效产品」
    #[error("产品表中没有解析到有效记录，请检查表格格式")]
    EmptyFeed,

    // ===== 历史数据存取错误 =====
    #[error("历史数据目录不可用: {0}")]
    HistoryDirUnavailable(String),

    #[error("历史数据元信息损坏: {0}")]
    HistoryMetaCorrupted(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::HistoryMetaCorrupted(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
