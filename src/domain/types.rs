// ==========================================
// 成本利润测算 - 领域类型定义
// ==========================================
// 红线: 尾程规则在配置装载时解析一次,不在计算时反复匹配字符串
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 尾程运费规则 (Last Mile Rule)
// ==========================================
// 由渠道配置的规则名解析而来:
// - "AMZ_US_FBA" → UsFbaDetailed (精确多档费率表)
// - 含 "EU"      → EuSimplified  (体积重简化规则)
// - 含 "JP"      → JpSimplified  (三边和简化规则)
// - 其他         → Unknown       (零费用占位)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LastMileRule {
    UsFbaDetailed, // 美国 FBA 精确档位
    EuSimplified,  // 欧洲简化体积重
    JpSimplified,  // 日本简化三边和
    Unknown,       // 未识别规则
}

impl LastMileRule {
    /// 从规则名解析（渠道表构造时调用一次）
    pub fn from_rule_name(name: &str) -> Self {
        if name == "AMZ_US_FBA" {
            LastMileRule::UsFbaDetailed
        } else if name.contains("EU") {
            LastMileRule::EuSimplified
        } else if name.contains("JP") {
            LastMileRule::JpSimplified
        } else {
            LastMileRule::Unknown
        }
    }
}

impl fmt::Display for LastMileRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastMileRule::UsFbaDetailed => write!(f, "US_FBA_DETAILED"),
            LastMileRule::EuSimplified => write!(f, "EU_SIMPLIFIED"),
            LastMileRule::JpSimplified => write!(f, "JP_SIMPLIFIED"),
            LastMileRule::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ==========================================
// 产品建议等级 (Suggest Level)
// ==========================================
// 顺序: D < C < B < A (用于单调性判断)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SuggestLevel {
    D, // 不建议
    C, // 小单试水
    B, // 正常可做
    A, // 强烈推荐
}

impl fmt::Display for SuggestLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestLevel::A => write!(f, "A"),
            SuggestLevel::B => write!(f, "B"),
            SuggestLevel::C => write!(f, "C"),
            SuggestLevel::D => write!(f, "D"),
        }
    }
}

// ==========================================
// 退货损耗口径 (Return Loss Model)
// ==========================================
// 两个历史版本口径不一致,显式做成配置项:
// - Full:            退货损耗 = 售价 × 退货率 (当前主口径)
// - PartialRecovery: 退货损耗 = 售价 × 退货率 × 0.8 (部分回收旧口径)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnLossModel {
    Full,
    PartialRecovery,
}

impl Default for ReturnLossModel {
    fn default() -> Self {
        ReturnLossModel::Full
    }
}

impl ReturnLossModel {
    /// 按口径计算退货损耗
    pub fn loss(&self, sale_price: f64, return_rate: f64) -> f64 {
        match self {
            ReturnLossModel::Full => sale_price * return_rate,
            ReturnLossModel::PartialRecovery => sale_price * return_rate * 0.8,
        }
    }
}

impl fmt::Display for ReturnLossModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnLossModel::Full => write!(f, "FULL"),
            ReturnLossModel::PartialRecovery => write!(f, "PARTIAL_RECOVERY"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_resolution() {
        assert_eq!(
            LastMileRule::from_rule_name("AMZ_US_FBA"),
            LastMileRule::UsFbaDetailed
        );
        assert_eq!(
            LastMileRule::from_rule_name("AMZ_EU_FBA"),
            LastMileRule::EuSimplified
        );
        assert_eq!(
            LastMileRule::from_rule_name("AMZ_JP_FBA"),
            LastMileRule::JpSimplified
        );
        assert_eq!(LastMileRule::from_rule_name("WHATEVER"), LastMileRule::Unknown);
    }

    #[test]
    fn test_suggest_level_ordering() {
        assert!(SuggestLevel::D < SuggestLevel::C);
        assert!(SuggestLevel::C < SuggestLevel::B);
        assert!(SuggestLevel::B < SuggestLevel::A);
    }

    #[test]
    fn test_return_loss_models() {
        assert_eq!(ReturnLossModel::Full.loss(40.0, 0.05), 2.0);
        assert!((ReturnLossModel::PartialRecovery.loss(40.0, 0.05) - 1.6).abs() < 1e-12);
        assert_eq!(ReturnLossModel::default(), ReturnLossModel::Full);
    }
}
