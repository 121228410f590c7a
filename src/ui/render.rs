use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use crossterm::style::{Color, Stylize};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::DisplayConfig;
use crate::core::view_model::{ControlIcon, StatusColor, TaskViewModel};
use crate::utils::title::truncate_title;

/// 进度条内部刻度；视图模型只有比例，这里放大成整数位置
const BAR_SCALE: u64 = 10_000;

/// 视图模型的落地槽口
///
/// 终端渲染器是默认实现；宿主也可以接上自己的控件层
/// （GUI、Web 等），卡片不关心落到哪里。
#[async_trait]
pub trait CardSink: Send + Sync {
    /// 应用一张卡片的最新视图模型
    async fn apply(&self, task_id: Uuid, view: &TaskViewModel);
    /// 卡片退场，撤掉对应控件
    async fn retire(&self, task_id: Uuid);
}

/// 终端渲染器：每张卡片一条 indicatif 进度条
pub struct CardRenderer {
    multi: MultiProgress,
    bars: Arc<Mutex<HashMap<Uuid, ProgressBar>>>,
    config: DisplayConfig,
}

impl CardRenderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    /// 不往终端画的渲染器，测试用
    pub fn hidden(config: DisplayConfig) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            bars: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    fn bar_style(&self) -> ProgressStyle {
        let template = format!("{{bar:{}}} {{percent:>3}}% {{msg}}", self.config.bar_width);
        ProgressStyle::with_template(&template).unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    /// 应用视图模型到对应的进度条，必要时新建
    pub async fn apply_view(&self, task_id: Uuid, view: &TaskViewModel) {
        let mut bars = self.bars.lock().await;
        let bar = bars.entry(task_id).or_insert_with(|| {
            let bar = ProgressBar::new(BAR_SCALE);
            bar.set_style(self.bar_style());
            self.multi.add(bar)
        });
        bar.set_position((view.progress * BAR_SCALE as f32) as u64);
        bar.set_message(self.compose_line(view));
    }

    /// 撤掉一张卡片的进度条
    pub async fn retire_view(&self, task_id: Uuid) {
        if let Some(bar) = self.bars.lock().await.remove(&task_id) {
            bar.finish_and_clear();
            self.multi.remove(&bar);
        }
    }

    /// 有几条在画
    pub async fn active_count(&self) -> usize {
        self.bars.lock().await.len()
    }

    /// 一行卡片文字：图标、标题、状态，外加可选的速度/剩余/起止时间
    fn compose_line(&self, view: &TaskViewModel) -> String {
        let title = truncate_title(&view.title, self.config.max_title_width);
        let status = if self.config.enable_color {
            format!("{}", view.status_text.as_str().with(term_color(view.status_color)))
        } else {
            view.status_text.clone()
        };

        let mut line = format!(
            "{} {} [{}] {}",
            icon_glyph(view.control_icon),
            title,
            status,
            view.bytes_text
        );
        if self.config.show_speed {
            line.push_str(&format!(" | {}", view.speed_text));
        }
        if self.config.show_eta {
            line.push_str(&format!(" | {}", view.time_remaining_text));
        }
        if self.config.show_dates {
            line.push_str(&format!(" | {} | {}", view.start_date_text, view.end_date_text));
        }
        line
    }
}

#[async_trait]
impl CardSink for CardRenderer {
    async fn apply(&self, task_id: Uuid, view: &TaskViewModel) {
        self.apply_view(task_id, view).await;
    }

    async fn retire(&self, task_id: Uuid) {
        self.retire_view(task_id).await;
    }
}

/// 状态颜色到终端颜色；终端没有标准橙色，用 DarkYellow 近似
pub fn term_color(color: StatusColor) -> Color {
    match color {
        StatusColor::Black => Color::Black,
        StatusColor::Blue => Color::Blue,
        StatusColor::Green => Color::Green,
        StatusColor::Red => Color::Red,
        StatusColor::Orange => Color::DarkYellow,
    }
}

/// 控制图标的终端字形
pub fn icon_glyph(icon: ControlIcon) -> &'static str {
    match icon {
        ControlIcon::Play => "▶",
        ControlIcon::Pause => "⏸",
        ControlIcon::None => " ",
    }
}
