// ==========================================
// 成本利润测算 - 渠道领域模型
// ==========================================
// 渠道 = 国家 × 平台 组合,以业务代码 (biz_code) 唯一标识
// 用途: 配置层构造时写入,引擎层只读
// ==========================================

use crate::domain::types::LastMileRule;
use serde::{Deserialize, Serialize};

// ==========================================
// ChannelConfig - 渠道维度配置
// ==========================================
// 红线: 构造后不可变,费率不做汇率实时换算(固定常量口径)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    // ===== 主键 =====
    pub biz_code: String, // 业务代码,如 "AMZ-US"

    // ===== 渠道维度 =====
    pub country: String,  // 国家/地区
    pub platform: String, // 平台 (Amazon / TikTok)
    pub category: String, // 产品品类
    pub currency: String, // 结算币种

    // ===== 费率 =====
    pub referral_fee_rate: f64,   // 平台佣金率
    pub storage_other_rate: f64,  // 仓储及杂费率
    pub default_return_rate: f64, // 默认退货率
    pub default_affiliate_rate: f64, // 默认联盟佣金率

    // ===== 尾程规则 =====
    pub last_mile_rule_name: String, // 规则名(原始字符串,用于展示)
    pub last_mile_rule: LastMileRule, // 构造时解析好的规则
    pub manual_last_mile: bool,      // 是否允许人工填写尾程费(仅 TK-US)
}

// ==========================================
// HeadFreightConfig - 头程运价配置
// ==========================================
// 一个渠道最多一条记录,缺失视为头程为零
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadFreightConfig {
    pub biz_code: String,  // 业务代码
    pub rate_per_cbm: f64, // 每立方米运价(USD)
    pub unit: String,      // 计价单位,目前固定 "CBM"
}
