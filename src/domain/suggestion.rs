// ==========================================
// 成本利润测算 - 产品建议模型
// ==========================================
// 由测算结果的 X(年资金效率) / Y(单次 ROI) 两项派生
// ==========================================

use crate::domain::types::SuggestLevel;
use serde::{Deserialize, Serialize};

// ==========================================
// Suggestion - 产品建议(自动评级)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub level: SuggestLevel, // 评级 A/B/C/D
    pub label: String,       // 短标签,如 "A-强烈推荐"
    pub desc: String,        // 建议说明
}
