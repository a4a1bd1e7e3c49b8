// ==========================================
// 成本利润测算 - 导入层
// ==========================================
// 职责: 外部表格数据进入内存产品列表的唯一入口
// 支持: 产品 CSV 文本 / 报表文件(Excel, CSV) / 历史原文重载
// ==========================================

// 模块声明
pub mod error;
pub mod feed_parser;
pub mod file_parser;
pub mod history_store;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use feed_parser::{import_feed_text, parse_product_feed};
pub use file_parser::SheetFileParser;
pub use history_store::{FeedHistoryMeta, FeedHistoryStore};
