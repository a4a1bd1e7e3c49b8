// ==========================================
// 成本利润测算 - 引擎层
// ==========================================
// 职责: 实现全部计算规则
// 红线: 引擎层纯同步、无 I/O、无共享可变状态;
//       坏输入一律降级为零值结果,不上抛错误
// ==========================================

pub mod head_freight;
pub mod last_mile;
pub mod profit;
pub mod suggestion;

// 重导出核心引擎
pub use head_freight::{head_freight_cost, units_per_40hq};
pub use last_mile::{LastMileEngine, LastMileQuote};
pub use profit::ProfitEngine;
pub use suggestion::suggest;
