//! 投影：把任务状态快照变成可渲染的视图模型
//!
//! 纯函数，无副作用，对任何快照都有定义。状态颜色与控制图标只由
//! 状态决定，字节文字只由两个计数器决定。未识别的状态不改动状态
//! 相关字段（沿用上一次或默认的渲染结果）。

use chrono::{DateTime, Local};

use crate::core::task::{TaskSnapshot, TaskStatus};
use crate::core::view_model::{ControlIcon, StatusColor, TaskViewModel};
use crate::utils::format::{format_eta, format_size, format_speed};

/// 各字段的固定前缀标签
const SPEED_LABEL: &str = "速度: ";
const ETA_LABEL: &str = "剩余时间: ";
const START_LABEL: &str = "开始: ";
const END_LABEL: &str = "结束: ";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 从默认视图模型投影一次快照
pub fn project(snapshot: &TaskSnapshot) -> TaskViewModel {
    project_into(&TaskViewModel::default(), snapshot)
}

/// 在上一次视图模型的基础上投影一次快照
///
/// `prev` 提供未识别状态下保持不变的那些字段。
pub fn project_into(prev: &TaskViewModel, snapshot: &TaskSnapshot) -> TaskViewModel {
    let mut view = prev.clone();

    view.title = snapshot.title.clone();
    view.bytes_text = format!(
        "{}/{}",
        format_size(snapshot.downloaded),
        format_size(snapshot.total)
    );
    view.speed_text = format!("{}{}", SPEED_LABEL, format_speed(snapshot.speed));
    view.time_remaining_text = format!(
        "{}{}",
        ETA_LABEL,
        format_eta(snapshot.downloaded, snapshot.total, snapshot.speed)
    );
    view.start_date_text = format!("{}{}", START_LABEL, format_date(&snapshot.started_at));
    view.end_date_text = format!("{}{}", END_LABEL, format_date(&snapshot.finished_at));
    view.progress = snapshot.fraction();

    // 默认图标是暂停，只有 Paused 改成播放、Running 显式设回暂停，
    // 其余状态不碰图标。Completed/Failed/Pending 在视觉上保留暂停
    // 图标是沿用已有产品行为，不在这里修正。
    match &snapshot.status {
        TaskStatus::Paused => {
            view.status_text = "paused".to_string();
            view.status_color = StatusColor::Black;
            view.control_icon = ControlIcon::Play;
        }
        TaskStatus::Running => {
            view.status_text = "downloading".to_string();
            view.status_color = StatusColor::Blue;
            view.control_icon = ControlIcon::Pause;
        }
        TaskStatus::Completed => {
            view.status_text = "succeeded".to_string();
            view.status_color = StatusColor::Green;
        }
        TaskStatus::Failed(_) => {
            view.status_text = "failed".to_string();
            view.status_color = StatusColor::Red;
        }
        TaskStatus::Pending => {
            view.status_text = "waiting".to_string();
            view.status_color = StatusColor::Orange;
        }
        // 未识别/已移除：状态相关字段保持原样
        TaskStatus::Cancelled => {}
    }

    view
}

fn format_date(at: &Option<DateTime<Local>>) -> String {
    match at {
        Some(t) => t.format(DATE_FORMAT).to_string(),
        None => "-".to_string(),
    }
}
