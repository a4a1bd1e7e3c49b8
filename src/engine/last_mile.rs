// ==========================================
// 成本利润测算 - 尾程运费引擎
// ==========================================
// 职责: 按渠道尾程规则计算单件派送费(统一折算 USD)
// 规则族: 美国 FBA 精确档位 / 欧洲体积重简化 / 日本三边和简化
// 红线: 费率表数字是照抄的报价单,不得重新推导;引擎永不报错
// ==========================================

use crate::domain::types::LastMileRule;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ===== 单位换算 =====
const LB_PER_KG: f64 = 2.20462;
const OZ_PER_KG: f64 = 35.274;

// ===== 固定汇率(常量口径,不做行情拉取) =====
const RATE_EUR_TO_USD: f64 = 1.16;
const RATE_JPY_TO_USD: f64 = 0.0064;

// ==========================================
// LastMileQuote - 尾程报价
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastMileQuote {
    pub cost_usd: f64,         // 折算 USD 的派送费
    pub tier: String,          // 档位标签(展示用)
    pub charge_weight_kg: f64, // 计费重(kg)
}

// ==========================================
// 美国 FBA 尺寸档位
// ==========================================
// 判定顺序即声明顺序,命中即停
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UsSizeTier {
    SmallStandard,   // 小号标准尺寸
    LargeStandard,   // 大号标准尺寸
    LargeBulky,      // 大号大件
    Oversize0To50,   // 超大件：0至50磅
    Oversize50To70,  // 超大件：50至70磅
    Oversize70To150, // 超大件：70至150磅
    OversizeAbove150, // 超大件：150磅以上
    SpecialBulky,    // 特殊大件(档位兜底,见下)
}

impl UsSizeTier {
    fn label(&self) -> &'static str {
        match self {
            UsSizeTier::SmallStandard => "小号标准尺寸",
            UsSizeTier::LargeStandard => "大号标准尺寸",
            UsSizeTier::LargeBulky => "大号大件",
            UsSizeTier::Oversize0To50 => "超大件：0至50磅",
            UsSizeTier::Oversize50To70 => "超大件：50至70磅",
            UsSizeTier::Oversize70To150 => "超大件：70至150磅",
            UsSizeTier::OversizeAbove150 => "超大件：150磅以上",
            UsSizeTier::SpecialBulky => "特殊大件",
        }
    }
}

// ==========================================
// LastMileEngine - 尾程运费引擎
// ==========================================
pub struct LastMileEngine;

impl LastMileEngine {
    pub fn new() -> Self {
        Self
    }

    /// 按规则计算尾程报价
    ///
    /// 未识别规则返回零费用占位(档位 "-"),计费重保持实重不变
    #[instrument(skip(self, rule), fields(rule = %rule))]
    pub fn quote(
        &self,
        rule: LastMileRule,
        length_cm: f64,
        width_cm: f64,
        height_cm: f64,
        weight_kg: f64,
    ) -> LastMileQuote {
        match rule {
            LastMileRule::UsFbaDetailed => {
                self.quote_us_fba(length_cm, width_cm, height_cm, weight_kg)
            }
            LastMileRule::EuSimplified => {
                self.quote_eu(length_cm, width_cm, height_cm, weight_kg)
            }
            LastMileRule::JpSimplified => {
                self.quote_jp(length_cm, width_cm, height_cm, weight_kg)
            }
            LastMileRule::Unknown => LastMileQuote {
                cost_usd: 0.0,
                tier: "-".to_string(),
                charge_weight_kg: weight_kg,
            },
        }
    }

    // ==========================================
    // 美国 FBA 精确档位
    // ==========================================

    /// 尺寸档位判定(阈值为 cm/kg,费率表按英制查询)
    ///
    /// 围长 girth = 最长边 + 2×次长边 + 2×最短边
    ///
    /// 「特殊大件」: 三边都在大号大件限内但重量 > 22.68kg 时落入,
    /// 报价单没有给这一档的费率,按 0 计费(已知口径缺口,勿自行补价)
    fn classify_us(&self, length_cm: f64, width_cm: f64, height_cm: f64, weight_kg: f64) -> UsSizeTier {
        let mut dims = [length_cm, width_cm, height_cm];
        dims.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let [min_side, median_side, max_side] = dims;
        let girth = max_side + 2.0 * median_side + 2.0 * min_side;

        if max_side <= 38.1 && median_side <= 30.48 && min_side <= 1.905 && weight_kg <= 0.4536 {
            UsSizeTier::SmallStandard
        } else if max_side <= 45.72 && median_side <= 35.56 && min_side <= 20.32 && weight_kg <= 9.072
        {
            UsSizeTier::LargeStandard
        } else if max_side <= 149.86 && girth <= 330.2 && weight_kg <= 22.68 {
            UsSizeTier::LargeBulky
        } else if max_side > 149.86 || girth > 330.2 {
            if weight_kg > 68.04 {
                UsSizeTier::OversizeAbove150
            } else if weight_kg >= 31.75 {
                UsSizeTier::Oversize70To150
            } else if weight_kg > 22.68 {
                UsSizeTier::Oversize50To70
            } else {
                UsSizeTier::Oversize0To50
            }
        } else {
            UsSizeTier::SpecialBulky
        }
    }

    fn quote_us_fba(&self, length_cm: f64, width_cm: f64, height_cm: f64, weight_kg: f64) -> LastMileQuote {
        let tier = self.classify_us(length_cm, width_cm, height_cm, weight_kg);

        // 美国 FBA 按实重计费,不取体积重
        let charge_weight_kg = weight_kg;
        let lb = charge_weight_kg * LB_PER_KG;
        let oz = charge_weight_kg * OZ_PER_KG;

        let cost_usd = match tier {
            UsSizeTier::SmallStandard => {
                // 2oz 一档,14oz 以上封顶
                if oz <= 2.0 {
                    3.06
                } else if oz <= 4.0 {
                    3.15
                } else if oz <= 6.0 {
                    3.24
                } else if oz <= 8.0 {
                    3.33
                } else if oz <= 10.0 {
                    3.43
                } else if oz <= 12.0 {
                    3.53
                } else if oz <= 14.0 {
                    3.60
                } else {
                    3.65
                }
            }
            UsSizeTier::LargeStandard => {
                // 0.25lb 一档到 3lb;超出部分按 0.25lb 向上取整加价
                if lb <= 0.25 {
                    3.68
                } else if lb <= 0.5 {
                    3.90
                } else if lb <= 0.75 {
                    4.15
                } else if lb <= 1.0 {
                    4.55
                } else if lb <= 1.25 {
                    4.99
                } else if lb <= 1.5 {
                    5.37
                } else if lb <= 1.75 {
                    5.52
                } else if lb <= 2.0 {
                    5.77
                } else if lb <= 2.25 {
                    5.87
                } else if lb <= 2.5 {
                    6.05
                } else if lb <= 2.75 {
                    6.21
                } else if lb <= 3.0 {
                    6.62
                } else {
                    let extra_blocks = ((lb - 3.0) * 4.0).ceil().max(0.0);
                    6.92 + extra_blocks * 0.08
                }
            }
            UsSizeTier::LargeBulky => 9.61 + (lb - 1.0).max(0.0) * 0.38,
            UsSizeTier::Oversize0To50 => 26.33 + (lb - 1.0).max(0.0) * 0.38,
            UsSizeTier::Oversize50To70 => 40.12 + (lb - 51.0).max(0.0) * 0.75,
            UsSizeTier::Oversize70To150 => 54.81 + (lb - 71.0).max(0.0) * 0.75,
            UsSizeTier::OversizeAbove150 => 194.95 + (lb - 151.0).max(0.0) * 0.19,
            UsSizeTier::SpecialBulky => 0.0,
        };

        LastMileQuote {
            cost_usd,
            tier: tier.label().to_string(),
            charge_weight_kg,
        }
    }

    // ==========================================
    // 欧洲简化规则(体积重口径)
    // ==========================================

    fn quote_eu(&self, length_cm: f64, width_cm: f64, height_cm: f64, weight_kg: f64) -> LastMileQuote {
        let vol_weight = length_cm * width_cm * height_cm / 5000.0;
        let charge_weight_kg = weight_kg.max(vol_weight);

        // 大件判定看实际长度和实重,不看计费重
        let oversize = length_cm > 120.0 || weight_kg > 12.0;

        let cost_eur = if oversize {
            9.0 + (charge_weight_kg - 1.0) * 0.8
        } else {
            5.5 + (charge_weight_kg - 1.0) * 0.6
        };

        LastMileQuote {
            cost_usd: cost_eur * RATE_EUR_TO_USD,
            tier: if oversize { "大件" } else { "标准包裹" }.to_string(),
            charge_weight_kg,
        }
    }

    // ==========================================
    // 日本简化规则(三边和口径)
    // ==========================================

    fn quote_jp(&self, length_cm: f64, width_cm: f64, height_cm: f64, weight_kg: f64) -> LastMileQuote {
        let size_sum = length_cm + width_cm + height_cm;

        let (tier, cost_jpy) = if size_sum <= 60.0 && weight_kg <= 2.0 {
            ("60尺寸", 500.0)
        } else if size_sum <= 100.0 && weight_kg <= 10.0 {
            ("100尺寸", 900.0)
        } else if size_sum <= 140.0 && weight_kg <= 20.0 {
            ("140尺寸", 1450.0)
        } else {
            ("160尺寸以上", 1800.0 + (weight_kg - 25.0).max(0.0) * 100.0)
        };

        LastMileQuote {
            cost_usd: cost_jpy * RATE_JPY_TO_USD,
            tier: tier.to_string(),
            charge_weight_kg: weight_kg,
        }
    }
}

impl Default for LastMileEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> LastMileEngine {
        LastMileEngine::new()
    }

    const EPS: f64 = 1e-9;

    #[test]
    fn test_us_small_standard_first_step() {
        // 0.05kg ≈ 1.76oz → 首档 3.06
        let q = engine().quote(LastMileRule::UsFbaDetailed, 30.0, 20.0, 1.5, 0.05);
        assert_eq!(q.tier, "小号标准尺寸");
        assert!((q.cost_usd - 3.06).abs() < EPS);
        assert_eq!(q.charge_weight_kg, 0.05);
    }

    #[test]
    fn test_us_large_standard_step_and_overflow() {
        // 2kg = 4.40924lb > 3lb → 6.92 + ceil(1.40924×4)×0.08 = 6.92 + 6×0.08
        let q = engine().quote(LastMileRule::UsFbaDetailed, 30.0, 20.0, 10.0, 2.0);
        assert_eq!(q.tier, "大号标准尺寸");
        assert!((q.cost_usd - 7.40).abs() < EPS);

        // 0.4kg ≈ 0.88lb → ≤1lb 档 4.55
        let q = engine().quote(LastMileRule::UsFbaDetailed, 30.0, 20.0, 10.0, 0.4);
        assert!((q.cost_usd - 4.55).abs() < EPS);
    }

    #[test]
    fn test_us_large_bulky() {
        // 100cm 最长边,12kg: 超出大号标准,在大号大件限内
        let q = engine().quote(LastMileRule::UsFbaDetailed, 100.0, 40.0, 30.0, 12.0);
        assert_eq!(q.tier, "大号大件");
        let lb = 12.0 * 2.20462;
        assert!((q.cost_usd - (9.61 + (lb - 1.0) * 0.38)).abs() < EPS);
    }

    #[test]
    fn test_us_oversize_bands_by_weight() {
        // 最长边 160cm 触发超大件,按重量分band
        let cases = [
            (10.0, "超大件：0至50磅"),
            (25.0, "超大件：50至70磅"),
            (40.0, "超大件：70至150磅"),
            (70.0, "超大件：150磅以上"),
        ];
        for (kg, expect_tier) in cases {
            let q = engine().quote(LastMileRule::UsFbaDetailed, 160.0, 40.0, 30.0, kg);
            assert_eq!(q.tier, expect_tier, "weight {}", kg);
        }
    }

    #[test]
    fn test_us_oversize_band_fees() {
        let q = engine().quote(LastMileRule::UsFbaDetailed, 160.0, 40.0, 30.0, 10.0);
        let lb = 10.0 * 2.20462;
        assert!((q.cost_usd - (26.33 + (lb - 1.0) * 0.38)).abs() < EPS);

        let q = engine().quote(LastMileRule::UsFbaDetailed, 160.0, 40.0, 30.0, 70.0);
        let lb = 70.0 * 2.20462;
        assert!((q.cost_usd - (194.95 + (lb - 151.0) * 0.19)).abs() < EPS);
    }

    #[test]
    fn test_us_special_bulky_zero_cost_gap() {
        // 三边都在大号大件限内但 30kg 超重: 落入「特殊大件」,报价单无此档,按 0 计
        let q = engine().quote(LastMileRule::UsFbaDetailed, 100.0, 40.0, 30.0, 30.0);
        assert_eq!(q.tier, "特殊大件");
        assert_eq!(q.cost_usd, 0.0);
        assert_eq!(q.charge_weight_kg, 30.0);
    }

    #[test]
    fn test_us_classification_first_match_wins() {
        // 同一组输入只会命中一个档位: 遍历一批边界组合,档位标签唯一且非空
        let dims = [1.0, 20.32, 38.1, 45.72, 120.0, 149.86, 150.0, 200.0];
        let weights = [0.1, 0.4536, 9.072, 22.68, 22.69, 31.75, 68.04, 70.0];
        for &d in &dims {
            for &w in &weights {
                let q = engine().quote(LastMileRule::UsFbaDetailed, d, d / 2.0, d / 3.0, w);
                assert!(!q.tier.is_empty());
            }
        }
    }

    #[test]
    fn test_eu_standard_uses_volumetric_weight() {
        // 100×30×20 → 体积重 12kg > 实重 5kg;长≤120 且实重≤12 → 标准包裹
        let q = engine().quote(LastMileRule::EuSimplified, 100.0, 30.0, 20.0, 5.0);
        assert_eq!(q.tier, "标准包裹");
        assert!((q.charge_weight_kg - 12.0).abs() < EPS);
        assert!((q.cost_usd - (5.5 + 11.0 * 0.6) * 1.16).abs() < EPS);
    }

    #[test]
    fn test_eu_oversize_by_length_or_weight() {
        let q = engine().quote(LastMileRule::EuSimplified, 130.0, 10.0, 10.0, 1.0);
        assert_eq!(q.tier, "大件");

        let q = engine().quote(LastMileRule::EuSimplified, 50.0, 30.0, 20.0, 13.0);
        assert_eq!(q.tier, "大件");
        assert!((q.cost_usd - (9.0 + 12.0 * 0.8) * 1.16).abs() < EPS);
    }

    #[test]
    fn test_jp_size_bands() {
        let q = engine().quote(LastMileRule::JpSimplified, 20.0, 20.0, 15.0, 1.5);
        assert_eq!(q.tier, "60尺寸");
        assert!((q.cost_usd - 500.0 * 0.0064).abs() < EPS);

        let q = engine().quote(LastMileRule::JpSimplified, 40.0, 30.0, 25.0, 8.0);
        assert_eq!(q.tier, "100尺寸");

        let q = engine().quote(LastMileRule::JpSimplified, 50.0, 45.0, 40.0, 18.0);
        assert_eq!(q.tier, "140尺寸");
    }

    #[test]
    fn test_jp_top_band_weight_surcharge() {
        // 三边和 180, 30kg → 1800 + 5×100 = 2300 JPY
        let q = engine().quote(LastMileRule::JpSimplified, 80.0, 60.0, 40.0, 30.0);
        assert_eq!(q.tier, "160尺寸以上");
        assert!((q.cost_usd - 2300.0 * 0.0064).abs() < EPS);
    }

    #[test]
    fn test_unknown_rule_zero_placeholder() {
        let q = engine().quote(LastMileRule::Unknown, 30.0, 20.0, 10.0, 2.0);
        assert_eq!(q.cost_usd, 0.0);
        assert_eq!(q.tier, "-");
        assert_eq!(q.charge_weight_kg, 2.0);
    }
}
