// ==========================================
// 成本利润测算 - 测算输入/结果模型
// ==========================================
// 红线: CalcResult 是纯派生值对象,构造后不可变;
//       渠道/SKU 不可解析或售价非正时返回全零结果,永不抛错
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// CalcInput - 单次测算输入
// ==========================================
// UI 每次参数变化都会构造一份新的输入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcInput {
    pub biz_code: String, // 业务代码(渠道)
    pub sku: String,      // 待测算 SKU
    pub sale_price: f64,  // 目标售价(USD)
    pub ad_rate: f64,     // 广告占比(售价的比例, 0-1)
    pub cash_cycle_days: i32, // 现金周期(天); <=0 时引擎回退默认 90

    // ===== 可选覆盖项 =====
    pub override_return_rate: Option<f64>, // 覆盖默认退货率(比例)
    pub manual_last_mile: Option<f64>,     // 人工尾程费(仅支持该能力的渠道生效)
}

// ==========================================
// CalcResult - 单件成本利润测算结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcResult {
    // ===== 成本分项 (USD) =====
    pub head_freight: f64,  // 头程运费
    pub last_mile: f64,     // 尾程运费
    pub referral_fee: f64,  // 平台佣金
    pub storage_other: f64, // 仓储及杂费
    pub ad_cost: f64,       // 广告费
    pub return_loss: f64,   // 退货损耗
    pub purchase_cost: f64, // 采购成本

    // ===== 汇总 =====
    pub total_cost: f64, // 总成本
    pub net_profit: f64, // 单件净利润
    pub margin: f64,     // 净利润率

    // ===== 资金口径 =====
    pub roi: f64,                // 单次周转 ROI = 净利 / (采购+头程)
    pub capital_efficiency: f64, // 年资金效率 = ROI × (365/现金周期)

    // ===== 派生明细 =====
    pub volume_cbm: f64,          // 单件体积(CBM)
    pub charge_weight: f64,       // 尾程计费重(kg)
    pub size_tier: String,        // 尾程档位标签
    pub currency_used: String,    // 结算币种
    pub applied_return_rate: f64, // 实际采用的退货率
}

impl CalcResult {
    /// 全零结果: 渠道/SKU 未命中或售价非正时的统一返回值
    pub fn zero() -> Self {
        CalcResult {
            head_freight: 0.0,
            last_mile: 0.0,
            referral_fee: 0.0,
            storage_other: 0.0,
            ad_cost: 0.0,
            return_loss: 0.0,
            purchase_cost: 0.0,
            total_cost: 0.0,
            net_profit: 0.0,
            margin: 0.0,
            roi: 0.0,
            capital_efficiency: 0.0,
            volume_cbm: 0.0,
            charge_weight: 0.0,
            size_tier: "-".to_string(),
            currency_used: "USD".to_string(),
            applied_return_rate: 0.0,
        }
    }
}
