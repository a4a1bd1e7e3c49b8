// ==========================================
// 成本利润测算 - AI 选品报告边界契约
// ==========================================
// 职责: 只定义与 AI 选品子系统交换的数据形状与多报表合并规则
// 红线: 本 crate 不调用该子系统,不做 HTTP/模型相关逻辑
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// UploadedSheet - 上传给子系统的单张报表
// ==========================================
// Excel / CSV 统一转成 CSV 文本后传递
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedSheet {
    pub name: String,    // 文件名(合并主键)
    pub content: String, // CSV 文本
}

// ==========================================
// ReportRequest - 报告请求
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "csvList")]
    pub csv_list: Vec<UploadedSheet>,
    pub note: String, // 自由文本场景说明
}

// ==========================================
// 报告返回结构
// ==========================================

/// 机会/竞争评分摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub opportunity_score: f64,
    pub competition_score: f64,
    pub profit_potential: String, // 低 / 中 / 高
    pub risk_level: String,       // 低 / 中 / 高
}

/// 候选条目类型(ASIN 或关键词)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateKind {
    #[serde(rename = "ASIN")]
    Asin,
    Keyword,
}

/// 排序后的候选产品/关键词,数值字段可缺失
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCandidate {
    pub rank: u32,
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: CandidateKind,
    pub price: Option<f64>,
    pub monthly_sales: Option<f64>,
    pub revenue: Option<f64>,
    pub reviews: Option<f64>,
    pub rating: Option<f64>,
    pub level: String, // A/B/C/D(子系统口径,不复用本地评级枚举)
    pub tag: String,
    pub action: String,
}

/// 完整报告: 摘要 + 决策 + 候选列表 + 小节文本 + 全文
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResult {
    pub summary: ReportSummary,
    pub decision_label: String,
    pub decision_reason: String,
    pub candidates: Vec<ReportCandidate>,
    pub modules: BTreeMap<String, String>, // 小节编号 → 叙述文本
    pub full_report_markdown: String,
}

// ==========================================
// 多报表合并
// ==========================================

/// 以文件名为主键合并两批上传报表
///
/// 同名文件用新内容覆盖旧内容(last write wins),
/// 其余追加到尾部,保持首次出现的顺序
pub fn merge_uploaded_sheets(
    existing: Vec<UploadedSheet>,
    incoming: Vec<UploadedSheet>,
) -> Vec<UploadedSheet> {
    let mut merged = existing;
    for sheet in incoming {
        match merged.iter_mut().find(|s| s.name == sheet.name) {
            Some(slot) => *slot = sheet,
            None => merged.push(sheet),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(name: &str, content: &str) -> UploadedSheet {
        UploadedSheet {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_merge_last_write_wins() {
        let merged = merge_uploaded_sheets(
            vec![sheet("a.csv", "old"), sheet("b.csv", "b")],
            vec![sheet("a.csv", "new"), sheet("c.csv", "c")],
        );
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0], sheet("a.csv", "new")); // 覆盖且保位
        assert_eq!(merged[1], sheet("b.csv", "b"));
        assert_eq!(merged[2], sheet("c.csv", "c"));
    }

    #[test]
    fn test_report_result_roundtrip_keys() {
        let json = serde_json::json!({
            "summary": {
                "opportunityScore": 72.0,
                "competitionScore": 55.0,
                "profitPotential": "中",
                "riskLevel": "低"
            },
            "decisionLabel": "可以做",
            "decisionReason": "蓝海品类",
            "candidates": [{
                "rank": 1,
                "id": "B0TEST",
                "title": "跳绳",
                "type": "ASIN",
                "price": 19.99,
                "monthlySales": null,
                "revenue": null,
                "reviews": 120.0,
                "rating": 4.5,
                "level": "B",
                "tag": "稳",
                "action": "小批量试"
            }],
            "modules": { "1.1": "Listing 概览……" },
            "fullReportMarkdown": "# 报告"
        });
        let report: ReportResult = serde_json::from_value(json).unwrap();
        assert_eq!(report.candidates[0].kind, CandidateKind::Asin);
        assert_eq!(report.modules.get("1.1").unwrap(), "Listing 概览……");
        assert!(report.candidates[0].monthly_sales.is_none());
    }
}
