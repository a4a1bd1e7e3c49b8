// ==========================================
// 成本利润测算 - AI 选品边界层
// ==========================================
// 职责: 与外部 AI 选品子系统的「提交请求/接收报告」契约
// ==========================================

pub mod report;

pub use report::{
    merge_uploaded_sheets, CandidateKind, ReportCandidate, ReportRequest, ReportResult,
    ReportSummary, UploadedSheet,
};
