// ==========================================
// 成本利润测算 - 报表文件解析器
// ==========================================
// 职责: 把本地 Excel (.xlsx/.xls) / CSV 文件统一转成 CSV 文本报表,
//       供 AI 选品边界层打包上送
// 约定: Excel 只取第一个工作表
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::research::report::UploadedSheet;
use calamine::{open_workbook_auto, Reader};
use std::fs;
use std::path::Path;

// ==========================================
// SheetFileParser - 按扩展名自动选择解析方式
// ==========================================
pub struct SheetFileParser;

impl SheetFileParser {
    /// 解析单个报表文件为 CSV 文本报表
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<UploadedSheet> {
        let path = file_path.as_ref();

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let content = match ext.as_str() {
            "csv" | "txt" => self.read_text(path)?,
            "xlsx" | "xls" => self.excel_to_csv_text(path)?,
            _ => return Err(ImportError::UnsupportedFormat(ext)),
        };

        Ok(UploadedSheet { name, content })
    }

    /// CSV / TXT: 原文透传,只去掉 BOM
    fn read_text(&self, path: &Path) -> ImportResult<String> {
        let text = fs::read_to_string(path)?;
        Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
    }

    /// Excel: 第一个工作表逐行转 CSV 文本
    fn excel_to_csv_text(&self, path: &Path) -> ImportResult<String> {
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        let first = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook
            .worksheet_range(&first)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in range.rows() {
            let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            writer
                .write_record(&cells)
                .map_err(|e| ImportError::CsvParseError(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ImportError::CsvParseError(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ImportError::CsvParseError(e.to_string()))
    }
}
