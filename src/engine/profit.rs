// ==========================================
// 成本利润测算 - 利润测算引擎
// ==========================================
// 职责: 渠道配置 + 产品记录 + 用户参数 → 完整成本拆解与资金效率
// 红线: 纯函数,同输入必同输出;渠道/SKU 未命中或售价非正
//       一律返回全零结果,绝不半算半抛
// ==========================================

use crate::config::ChannelTable;
use crate::domain::calc::{CalcInput, CalcResult};
use crate::domain::product::ProductRecord;
use crate::domain::types::ReturnLossModel;
use crate::engine::head_freight::head_freight_cost;
use crate::engine::last_mile::{LastMileEngine, LastMileQuote};
use tracing::instrument;

/// 现金周期非法(<=0)时的兜底天数,防止除零
const DEFAULT_CASH_CYCLE_DAYS: i32 = 90;

/// 人工填写尾程费时的档位标签
const MANUAL_TIER_LABEL: &str = "人工填写";

// ==========================================
// ProfitEngine - 利润测算引擎
// ==========================================
pub struct ProfitEngine {
    table: ChannelTable,
    last_mile: LastMileEngine,
    return_loss_model: ReturnLossModel,
}

impl ProfitEngine {
    /// 用注入的渠道表构造引擎,退货损耗取主口径(全额)
    pub fn new(table: ChannelTable) -> Self {
        ProfitEngine {
            table,
            last_mile: LastMileEngine::new(),
            return_loss_model: ReturnLossModel::default(),
        }
    }

    /// 内置渠道表的便捷构造
    pub fn with_builtin_table() -> Self {
        Self::new(ChannelTable::builtin())
    }

    /// 切换退货损耗口径(两个历史版本并存,显式选择)
    pub fn with_return_loss_model(mut self, model: ReturnLossModel) -> Self {
        self.return_loss_model = model;
        self
    }

    pub fn channel_table(&self) -> &ChannelTable {
        &self.table
    }

    /// 单次利润测算
    ///
    /// 产品列表由调用方持有(最近一次导入的整表),按 SKU 查找首个匹配
    #[instrument(skip(self, products), fields(biz_code = %input.biz_code, sku = %input.sku))]
    pub fn calculate(&self, input: &CalcInput, products: &[ProductRecord]) -> CalcResult {
        let channel = self.table.channel(&input.biz_code);
        let product = products.iter().find(|p| p.sku == input.sku);

        // 渠道/SKU 未命中或售价非正: 交互编辑期的常态,不是异常
        let (channel, product) = match (channel, product) {
            (Some(c), Some(p)) if input.sale_price > 0.0 => (c, p),
            _ => return CalcResult::zero(),
        };

        let sale_price = input.sale_price;
        let volume_cbm = product.volume_cbm();
        let purchase_cost = product.purchase_price;

        // 头程: 无运价配置视为 0
        let head_freight = match self.table.head_freight(&input.biz_code) {
            Some(cfg) => head_freight_cost(volume_cbm, cfg.rate_per_cbm),
            None => 0.0,
        };

        // 尾程: 支持人工填写的渠道优先用人工值,其余按规则计算
        let last_mile_quote = match input.manual_last_mile {
            Some(manual) if channel.manual_last_mile && manual.is_finite() => LastMileQuote {
                cost_usd: manual,
                tier: MANUAL_TIER_LABEL.to_string(),
                charge_weight_kg: product.weight_kg,
            },
            _ => self.last_mile.quote(
                channel.last_mile_rule,
                product.length_cm,
                product.width_cm,
                product.height_cm,
                product.weight_kg,
            ),
        };

        let referral_fee = sale_price * channel.referral_fee_rate;
        let storage_other = sale_price * channel.storage_other_rate;
        let ad_cost = sale_price * input.ad_rate;

        let applied_return_rate = input
            .override_return_rate
            .unwrap_or(channel.default_return_rate);
        let return_loss = self.return_loss_model.loss(sale_price, applied_return_rate);

        let total_cost = purchase_cost
            + head_freight
            + last_mile_quote.cost_usd
            + referral_fee
            + storage_other
            + ad_cost
            + return_loss;

        let net_profit = sale_price - total_cost;
        let margin = if sale_price > 0.0 {
            net_profit / sale_price
        } else {
            0.0
        };

        // 资金口径: 占用资金 = 采购 + 头程
        let base_capital = purchase_cost + head_freight;
        let roi = if base_capital > 0.0 {
            net_profit / base_capital
        } else {
            0.0
        };
        let cycle_days = if input.cash_cycle_days > 0 {
            input.cash_cycle_days
        } else {
            DEFAULT_CASH_CYCLE_DAYS
        };
        let cycles_per_year = 365.0 / f64::from(cycle_days);
        let capital_efficiency = roi * cycles_per_year;

        CalcResult {
            head_freight,
            last_mile: last_mile_quote.cost_usd,
            referral_fee,
            storage_other,
            ad_cost,
            return_loss,
            purchase_cost,
            total_cost,
            net_profit,
            margin,
            roi,
            capital_efficiency,
            volume_cbm,
            charge_weight: last_mile_quote.charge_weight_kg,
            size_tier: last_mile_quote.tier,
            currency_used: channel.currency.clone(),
            applied_return_rate,
        }
    }
}
