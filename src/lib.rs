// ==========================================
// 跨境电商新品成本利润测算 - 核心库
// ==========================================
// 系统定位: 决策支持引擎 (测算与评级,人工最终决策)
// 数据流向: 维度表 + 产品表 → 尾程引擎 → 利润引擎 → 产品建议
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 渠道/头程维度表
pub mod config;

// 导入层 - 外部表格数据
pub mod importer;

// 引擎层 - 计算规则
pub mod engine;

// AI 选品边界 - 仅契约,不含实现
pub mod research;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{LastMileRule, ReturnLossModel, SuggestLevel};

// 领域实体
pub use domain::{
    CalcInput, CalcResult, ChannelConfig, HeadFreightConfig, ProductRecord, Suggestion,
};

// 配置
pub use config::ChannelTable;

// 引擎
pub use engine::{suggest, LastMileEngine, LastMileQuote, ProfitEngine};

// 导入
pub use importer::{
    import_feed_text, parse_product_feed, FeedHistoryStore, ImportError, ImportResult,
};
