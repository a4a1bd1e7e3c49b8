// ==========================================
// 成本利润测算 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型与值对象
// 红线: 不含解析逻辑,不含引擎逻辑
// ==========================================

pub mod calc;
pub mod channel;
pub mod product;
pub mod suggestion;
pub mod types;

// 重导出核心类型
pub use calc::{CalcInput, CalcResult};
pub use channel::{ChannelConfig, HeadFreightConfig};
pub use product::ProductRecord;
pub use suggestion::Suggestion;
pub use types::{LastMileRule, ReturnLossModel, SuggestLevel};
