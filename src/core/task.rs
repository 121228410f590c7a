use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::title::display_title_from_url;

/// 下载任务状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Running,
    Paused,
    Completed,
    Failed(String),
    Cancelled,
}

/// 任务状态快照
///
/// 由外部下载库在每次状态变化时提供，对本库只读。
/// 速度、起止时间等均为原始值，格式化由展示层完成。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub status: TaskStatus,
    /// 已下载字节数
    pub downloaded: u64,
    /// 总字节数，未知时为 0
    pub total: u64,
    /// 下载速度 B/s
    pub speed: u64,
    pub started_at: Option<DateTime<Local>>,
    pub finished_at: Option<DateTime<Local>>,
}

impl TaskSnapshot {
    /// 从 URL 创建一个初始快照，标题取 URL 中的文件名
    pub fn new(url: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: display_title_from_url(url),
            url: url.to_string(),
            status: TaskStatus::Pending,
            downloaded: 0,
            total: 0,
            speed: 0,
            started_at: None,
            finished_at: None,
        }
    }

    /// 进度比例（0.0～1.0），总大小未知时为 0
    pub fn fraction(&self) -> f32 {
        if self.total > 0 {
            (self.downloaded as f64 / self.total as f64) as f32
        } else {
            0.0
        }
    }
}
