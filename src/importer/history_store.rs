// ==========================================
// 成本利润测算 - 导入历史存储
// ==========================================
// 职责: 把最近一次导入的产品表按「原始文本」落盘,供下次启动直接重载
// 红线: 只存原文,不结构化持久化;新导入整体覆盖(replace-on-write)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

const FEED_FILE: &str = "feed_history.csv";
const META_FILE: &str = "feed_history.meta.json";

// ==========================================
// FeedHistoryMeta - 历史数据元信息
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedHistoryMeta {
    pub batch_id: Uuid,                // 导入批次号
    pub imported_at: DateTime<Utc>,    // 导入时间
    pub record_count: usize,           // 当时解析出的有效记录数
}

// ==========================================
// FeedHistoryStore - 原文历史存储
// ==========================================
pub struct FeedHistoryStore {
    dir: PathBuf,
}

impl FeedHistoryStore {
    /// 默认位置: 系统应用数据目录下的 profit-calc 子目录
    pub fn new() -> ImportResult<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| ImportError::HistoryDirUnavailable("无系统数据目录".to_string()))?;
        Ok(Self::with_dir(base.join("profit-calc")))
    }

    /// 指定存储目录(测试用)
    pub fn with_dir(dir: PathBuf) -> Self {
        FeedHistoryStore { dir }
    }

    /// 覆盖保存原始文本,并写入批次元信息
    pub fn save(&self, raw_text: &str, record_count: usize) -> ImportResult<FeedHistoryMeta> {
        fs::create_dir_all(&self.dir)?;

        let meta = FeedHistoryMeta {
            batch_id: Uuid::new_v4(),
            imported_at: Utc::now(),
            record_count,
        };

        fs::write(self.dir.join(FEED_FILE), raw_text)?;
        fs::write(self.dir.join(META_FILE), serde_json::to_vec_pretty(&meta)?)?;

        info!(
            batch_id = %meta.batch_id,
            record_count,
            "导入历史已保存"
        );
        Ok(meta)
    }

    /// 读取最近一次保存的原始文本;从未保存过则为 None
    pub fn load(&self) -> ImportResult<Option<String>> {
        let path = self.dir.join(FEED_FILE);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// 读取历史元信息;缺失则为 None,损坏上抛 HistoryMetaCorrupted
    pub fn load_meta(&self) -> ImportResult<Option<FeedHistoryMeta>> {
        let path = self.dir.join(META_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path)?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let store = FeedHistoryStore::with_dir(tmp.path().join("history"));

        assert_eq!(store.load().unwrap(), None);

        let meta = store.save("SKU-A,x,x,30,20,10,1,2,2,$8.5\n", 1).unwrap();
        assert_eq!(meta.record_count, 1);

        let text = store.load().unwrap().unwrap();
        assert!(text.starts_with("SKU-A"));

        let loaded_meta = store.load_meta().unwrap().unwrap();
        assert_eq!(loaded_meta.batch_id, meta.batch_id);
    }

    #[test]
    fn test_save_overwrites_previous() {
        let tmp = TempDir::new().unwrap();
        let store = FeedHistoryStore::with_dir(tmp.path().to_path_buf());

        store.save("first", 3).unwrap();
        store.save("second", 5).unwrap();

        assert_eq!(store.load().unwrap().unwrap(), "second");
        assert_eq!(store.load_meta().unwrap().unwrap().record_count, 5);
    }

    #[test]
    fn test_corrupted_meta_is_reported() {
        let tmp = TempDir::new().unwrap();
        let store = FeedHistoryStore::with_dir(tmp.path().to_path_buf());
        store.save("text", 1).unwrap();
        fs::write(tmp.path().join(META_FILE), b"not json").unwrap();

        assert!(matches!(
            store.load_meta(),
            Err(ImportError::HistoryMetaCorrupted(_))
        ));
    }
}
