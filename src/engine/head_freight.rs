// ==========================================
// 成本利润测算 - 头程运费计算
// ==========================================
// 口径: 头程 = ROUNDUP(体积 × 运价 × 1.05, 1位小数)
// 5% 上浮和向上取整是财务口径,不是显示修饰
// ==========================================

/// 头程运价上浮系数
const HEAD_FREIGHT_BUFFER: f64 = 1.05;

/// 40HQ 集装箱可用容积(CBM)
const CONTAINER_40HQ_CBM: f64 = 68.0;

/// 单件头程运费(USD)
///
/// 结果总是 0.1 的整数倍,且不小于 体积×运价×1.05
pub fn head_freight_cost(volume_cbm: f64, rate_per_cbm: f64) -> f64 {
    let raw = volume_cbm * rate_per_cbm * HEAD_FREIGHT_BUFFER;
    (raw * 10.0).ceil() / 10.0
}

/// 40HQ 装柜数量估算: ceil(68 / 单件体积),体积为 0 时返回 0
pub fn units_per_40hq(volume_cbm: f64) -> u64 {
    if volume_cbm > 0.0 {
        (CONTAINER_40HQ_CBM / volume_cbm).ceil() as u64
    } else {
        0
    }
}
