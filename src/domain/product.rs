// ==========================================
// 成本利润测算 - 产品领域模型
// ==========================================
// 来源: 「新品成本核算」CSV 导入
// 生命周期: 仅驻内存;新导入整表覆盖,不做增量合并
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ProductRecord - 新品记录
// ==========================================
// 解析层保证: 采购价/尺寸/重量永不为负,不会携带 NaN
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub sku: String,         // SKU(表格第 1 列)
    pub name: String,        // 品名(导入源未单列时与 SKU 相同)
    pub purchase_price: f64, // 采购价(结算币种,含税)

    // ===== 包装尺寸 =====
    pub length_cm: f64, // 包装长(cm)
    pub width_cm: f64,  // 包装宽(cm)
    pub height_cm: f64, // 包装高(cm)
    pub weight_kg: f64, // 包装毛重(kg)
}

impl ProductRecord {
    /// 单件体积(立方米): 长×宽×高(cm) / 1,000,000
    pub fn volume_cbm(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm / 1_000_000.0
    }
}
