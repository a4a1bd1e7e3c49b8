// ==========================================
// 成本利润测算 - 新品成本核算表解析器
// ==========================================
// 输入: 「新品成本核算」CSV 原始文本(可能带 BOM,单元格带 $ 符号)
// 职责: 坏行静默跳过,任何输入都产出合法的产品列表,绝不 panic
// 列约定(1 起):
//   1 = SKU  4/5/6 = 长/宽/高(cm)
//   7 = 产品重量  8 = 体积重  9 = 单个包装重量(kg)
//   采购价 = 从最后一列往前第一个带 $ 的单元格
// ==========================================

use crate::domain::product::ProductRecord;
use crate::importer::error::{ImportError, ImportResult};
use csv::{ReaderBuilder, Trim};
use tracing::{debug, instrument};

/// 汇总行标记(源表格最后一行)
const TOTAL_ROW_MARKER: &str = "合计";

/// 清洗单元格后解析数值: 只保留数字、小数点和负号
///
/// 清不出内容或解析失败都视为「非数值」
fn clean_numeric(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// 数值兜底: 非数值按 0 处理,负值归零(尺寸/重量/价格不允许为负)
fn to_number(cell: &str) -> f64 {
    clean_numeric(cell).unwrap_or(0.0).max(0.0)
}

/// 采购价: 从最后一列往前找第一个带 $ 的单元格,取 $ 后面的数值
fn extract_purchase_price(cols: &[&str]) -> f64 {
    for cell in cols.iter().rev() {
        if cell.contains('$') {
            let after = cell.rsplit('$').next().unwrap_or("");
            if clean_numeric(after).is_some() {
                return to_number(after);
            }
        }
    }
    0.0
}

/// 解析产品表原始文本为有序产品列表
///
/// 解析规则:
/// - 去掉 UTF-8 BOM,兼容任意换行符,空行跳过
/// - 列数不足 9、长/宽/高非数值、SKU 为空或为汇总行 → 整行跳过
/// - 重量取数顺序: 第 9 列 → 第 8 列 → 第 7 列 → 0
/// - 重复 SKU 原样保留,顺序与输入一致
///
/// 对任何输入(包括空文本/乱码)都返回列表,永不报错
#[instrument(skip(raw_text), fields(bytes = raw_text.len()))]
pub fn parse_product_feed(raw_text: &str) -> Vec<ProductRecord> {
    let text = raw_text.strip_prefix('\u{feff}').unwrap_or(raw_text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // 允许行长度不一致
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut products = Vec::new();

    for record in reader.records() {
        // 坏行(引号不闭合等)直接跳过,不中断整表解析
        let record = match record {
            Ok(r) => r,
            Err(_) => continue,
        };

        let cols: Vec<&str> = record.iter().collect();
        if cols.len() < 9 {
            continue;
        }

        // 长宽高列必须是数值
        if clean_numeric(cols[3]).is_none()
            || clean_numeric(cols[4]).is_none()
            || clean_numeric(cols[5]).is_none()
        {
            continue;
        }

        let sku = cols[0];
        if sku.is_empty() || sku == TOTAL_ROW_MARKER {
            continue;
        }

        // 优先用「单个包装重量」,再退回体积重、产品重量
        let weight_kg = if clean_numeric(cols[8]).is_some() {
            to_number(cols[8])
        } else if clean_numeric(cols[7]).is_some() {
            to_number(cols[7])
        } else if clean_numeric(cols[6]).is_some() {
            to_number(cols[6])
        } else {
            0.0
        };

        products.push(ProductRecord {
            sku: sku.to_string(),
            name: sku.to_string(),
            purchase_price: extract_purchase_price(&cols),
            length_cm: to_number(cols[3]),
            width_cm: to_number(cols[4]),
            height_cm: to_number(cols[5]),
            weight_kg,
        });
    }

    debug!(count = products.len(), "产品表解析完成");
    products
}

/// 解析并把「零条有效记录」作为显式失败上抛
///
/// 供应用层导入动作使用;纯解析请直接用 [`parse_product_feed`]
pub fn import_feed_text(raw_text: &str) -> ImportResult<Vec<ProductRecord>> {
    let products = parse_product_feed(raw_text);
    if products.is_empty() {
        return Err(ImportError::EmptyFeed);
    }
    Ok(products)
}
