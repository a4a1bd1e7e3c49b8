// ==========================================
// 成本利润测算 - 产品建议引擎
// ==========================================
// 职责: 由测算结果的 X(年资金效率) / Y(单次 ROI) 映射 A/B/C/D 评级
// 决策表自上而下,命中即停
// ==========================================

use crate::domain::calc::CalcResult;
use crate::domain::suggestion::Suggestion;
use crate::domain::types::SuggestLevel;

/// 产品建议评级
///
/// | 条件 (X=年资金效率, Y=单次ROI) | 评级 |
/// |---|---|
/// | X ≥ 1.5 且 Y ≥ 0.40 | A |
/// | X ≥ 1.0 且 Y ≥ 0.25 | B |
/// | X ≥ 0.5 且 Y ≥ 0.10 | C |
/// | 其他 | D |
pub fn suggest(result: &CalcResult) -> Suggestion {
    let x = result.capital_efficiency;
    let y = result.roi;

    if x >= 1.5 && y >= 0.4 {
        Suggestion {
            level: SuggestLevel::A,
            label: "A-强烈推荐".to_string(),
            desc: "年资金效率 ≥ 1.5 且 单次 ROI ≥ 40%，适合作为重点推新品，大胆做体量。"
                .to_string(),
        }
    } else if x >= 1.0 && y >= 0.25 {
        Suggestion {
            level: SuggestLevel::B,
            label: "B-正常可做".to_string(),
            desc: "年资金效率 ≥ 1 且 单次 ROI ≥ 25%，可作为常规款稳定铺货，控制库存节奏。"
                .to_string(),
        }
    } else if x >= 0.5 && y >= 0.1 {
        Suggestion {
            level: SuggestLevel::C,
            label: "C-小单试水".to_string(),
            desc: "年资金效率 ≥ 0.5 且 单次 ROI ≥ 10%，适合小批量测试，重点观察评价与广告表现。"
                .to_string(),
        }
    } else {
        Suggestion {
            level: SuggestLevel::D,
            label: "D-不建议".to_string(),
            desc: "年资金效率和 ROI 偏低，建议谨慎，除非有强运营打法或品牌战略需求。"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(x: f64, y: f64) -> CalcResult {
        let mut r = CalcResult::zero();
        r.capital_efficiency = x;
        r.roi = y;
        r
    }

    #[test]
    fn test_decision_table() {
        assert_eq!(suggest(&result_with(1.5, 0.40)).level, SuggestLevel::A);
        assert_eq!(suggest(&result_with(1.2, 0.30)).level, SuggestLevel::B);
        assert_eq!(suggest(&result_with(0.6, 0.12)).level, SuggestLevel::C);
        assert_eq!(suggest(&result_with(0.1, 0.05)).level, SuggestLevel::D);
    }

    #[test]
    fn test_both_axes_required() {
        // 单轴达标不够: X 高 Y 低落到下一档能同时满足的行
        assert_eq!(suggest(&result_with(5.0, 0.05)).level, SuggestLevel::D);
        assert_eq!(suggest(&result_with(0.4, 0.9)).level, SuggestLevel::D);
        assert_eq!(suggest(&result_with(5.0, 0.30)).level, SuggestLevel::B);
    }

    #[test]
    fn test_monotonic_in_both_axes() {
        // X/Y 同时增大,评级不降
        let grid = [0.0, 0.1, 0.25, 0.4, 0.5, 1.0, 1.5, 2.0];
        let mut prev = SuggestLevel::D;
        for (i, &v) in grid.iter().enumerate() {
            let level = suggest(&result_with(v * 2.0, v)).level;
            assert!(level >= prev, "grade dropped at step {}", i);
            prev = level;
        }
    }

    #[test]
    fn test_labels_fixed() {
        assert_eq!(suggest(&result_with(2.0, 0.5)).label, "A-强烈推荐");
        assert_eq!(suggest(&result_with(0.0, 0.0)).label, "D-不建议");
    }
}
