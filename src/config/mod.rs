// ==========================================
// 成本利润测算 - 配置层
// ==========================================
// 职责: 渠道/头程维度表的构造与查找
// ==========================================

pub mod channel_table;

pub use channel_table::ChannelTable;
