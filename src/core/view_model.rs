use serde::{Deserialize, Serialize};

/// 状态文字颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusColor {
    Black,
    Blue,
    Green,
    Red,
    Orange,
}

/// 控制按钮图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlIcon {
    Play,
    Pause,
    None,
}

/// 任务卡片视图模型
///
/// 每次投影产生一个全新的值，不原地修改、不缓存、不持久化。
/// 宿主控件层只消费这里的字段，不回写。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskViewModel {
    pub title: String,
    /// "已下载/总量"，两边使用同一种人类可读格式
    pub bytes_text: String,
    pub speed_text: String,
    pub time_remaining_text: String,
    pub start_date_text: String,
    pub end_date_text: String,
    pub status_text: String,
    pub status_color: StatusColor,
    pub control_icon: ControlIcon,
    /// 进度条比例（0.0～1.0）
    pub progress: f32,
}

impl Default for TaskViewModel {
    fn default() -> Self {
        Self {
            title: String::new(),
            bytes_text: String::new(),
            speed_text: String::new(),
            time_remaining_text: String::new(),
            start_date_text: String::new(),
            end_date_text: String::new(),
            status_text: String::new(),
            status_color: StatusColor::Black,
            // 默认图标是暂停，只有 Paused 状态会改成播放
            control_icon: ControlIcon::Pause,
            progress: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_model() {
        let view = TaskViewModel::default();
        assert_eq!(view.control_icon, ControlIcon::Pause);
        assert_eq!(view.status_color, StatusColor::Black);
        assert!(view.status_text.is_empty());
        assert_eq!(view.progress, 0.0);
    }

    #[test]
    fn test_view_model_json_shape() {
        // 宿主控件层按字段名消费视图模型
        let view = TaskViewModel::default();
        let json = serde_json::to_value(&view).expect("序列化失败");
        assert!(json.get("bytes_text").is_some());
        assert!(json.get("status_text").is_some());
        assert!(json.get("status_color").is_some());
        assert!(json.get("control_icon").is_some());
    }
}
