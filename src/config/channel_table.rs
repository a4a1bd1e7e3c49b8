// ==========================================
// 成本利润测算 - 渠道维度表
// ==========================================
// 职责: 内置渠道费率 + 头程运价两张维度表
// 红线: 进程启动时构造一次,只读注入引擎,绝不全局可变
// ==========================================

use crate::domain::channel::{ChannelConfig, HeadFreightConfig};
use crate::domain::types::LastMileRule;
use std::collections::HashMap;

// ==========================================
// ChannelTable - 不可变渠道查找表
// ==========================================
#[derive(Debug, Clone)]
pub struct ChannelTable {
    channels: HashMap<String, ChannelConfig>,
    head_freight: HashMap<String, HeadFreightConfig>,
}

/// 构造一条渠道配置,规则名在此处一次性解析为枚举
#[allow(clippy::too_many_arguments)]
fn channel(
    biz_code: &str,
    country: &str,
    platform: &str,
    category: &str,
    referral_fee_rate: f64,
    storage_other_rate: f64,
    default_return_rate: f64,
    default_affiliate_rate: f64,
    last_mile_rule_name: &str,
    manual_last_mile: bool,
) -> ChannelConfig {
    ChannelConfig {
        biz_code: biz_code.to_string(),
        country: country.to_string(),
        platform: platform.to_string(),
        category: category.to_string(),
        currency: "USD".to_string(),
        referral_fee_rate,
        storage_other_rate,
        default_return_rate,
        default_affiliate_rate,
        last_mile_rule_name: last_mile_rule_name.to_string(),
        last_mile_rule: LastMileRule::from_rule_name(last_mile_rule_name),
        manual_last_mile,
    }
}

fn freight(biz_code: &str, rate_per_cbm: f64) -> HeadFreightConfig {
    HeadFreightConfig {
        biz_code: biz_code.to_string(),
        rate_per_cbm,
        unit: "CBM".to_string(),
    }
}

impl ChannelTable {
    /// 内置维度表(与运营口径一致的固定常量)
    ///
    /// TK-US 复用 AMZ-US 的尺寸档位逻辑,但尾程金额允许人工填写覆盖
    pub fn builtin() -> Self {
        let channels = vec![
            channel(
                "AMZ-US", "US", "Amazon", "Sports & Outdoors",
                0.15, 0.01, 0.03, 0.0, "AMZ_US_FBA", false,
            ),
            channel(
                "AMZ-JP", "JP", "Amazon", "Sports & Outdoors",
                0.10, 0.01, 0.03, 0.0, "AMZ_JP_FBA", false,
            ),
            channel(
                "AMZ-EU", "EU", "Amazon", "Sports & Outdoors",
                0.15, 0.01, 0.03, 0.0, "AMZ_EU_FBA", false,
            ),
            channel(
                "TK-US", "US", "TikTok", "Sports / Fitness",
                0.06, 0.025, 0.05, 0.1, "AMZ_US_FBA", true,
            ),
            channel(
                "TK-EU", "EU", "TikTok", "Sports / Fitness",
                0.09, 0.025, 0.05, 0.1, "AMZ_EU_FBA", false,
            ),
        ];

        let head_freight = vec![
            freight("AMZ-US", 230.0),
            freight("TK-US", 135.0),
            freight("AMZ-EU", 180.0),
            freight("TK-EU", 180.0),
            freight("AMZ-JP", 80.0),
        ];

        Self::from_parts(channels, head_freight)
    }

    /// 从显式记录构造(测试或外部配置装载时使用)
    pub fn from_parts(
        channels: Vec<ChannelConfig>,
        head_freight: Vec<HeadFreightConfig>,
    ) -> Self {
        ChannelTable {
            channels: channels
                .into_iter()
                .map(|c| (c.biz_code.clone(), c))
                .collect(),
            head_freight: head_freight
                .into_iter()
                .map(|f| (f.biz_code.clone(), f))
                .collect(),
        }
    }

    /// 按业务代码查渠道配置
    pub fn channel(&self, biz_code: &str) -> Option<&ChannelConfig> {
        self.channels.get(biz_code)
    }

    /// 按业务代码查头程运价(缺失 = 头程为零)
    pub fn head_freight(&self, biz_code: &str) -> Option<&HeadFreightConfig> {
        self.head_freight.get(biz_code)
    }

    /// 全部渠道(展示用,顺序不保证)
    pub fn channels(&self) -> impl Iterator<Item = &ChannelConfig> {
        self.channels.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_keys() {
        let table = ChannelTable::builtin();
        for code in ["AMZ-US", "AMZ-JP", "AMZ-EU", "TK-US", "TK-EU"] {
            assert!(table.channel(code).is_some(), "missing channel {}", code);
            assert!(table.head_freight(code).is_some(), "missing freight {}", code);
        }
        assert!(table.channel("EBAY-US").is_none());
    }

    #[test]
    fn test_builtin_rule_resolution() {
        let table = ChannelTable::builtin();
        assert_eq!(
            table.channel("AMZ-US").unwrap().last_mile_rule,
            LastMileRule::UsFbaDetailed
        );
        assert_eq!(
            table.channel("TK-EU").unwrap().last_mile_rule,
            LastMileRule::EuSimplified
        );
        assert_eq!(
            table.channel("AMZ-JP").unwrap().last_mile_rule,
            LastMileRule::JpSimplified
        );
    }

    #[test]
    fn test_manual_last_mile_only_tk_us() {
        let table = ChannelTable::builtin();
        for c in table.channels() {
            assert_eq!(c.manual_last_mile, c.biz_code == "TK-US");
        }
    }

    #[test]
    fn test_builtin_rates() {
        let table = ChannelTable::builtin();
        let us = table.channel("AMZ-US").unwrap();
        assert_eq!(us.referral_fee_rate, 0.15);
        assert_eq!(us.default_return_rate, 0.03);
        assert_eq!(table.head_freight("AMZ-US").unwrap().rate_per_cbm, 230.0);
        assert_eq!(table.head_freight("AMZ-JP").unwrap().rate_per_cbm, 80.0);
    }
}
