use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::ViewError;

/// 展示配置
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    /// 进度刷新间隔（毫秒），宿主的刷新循环按这个节奏查询视图
    pub refresh_interval_ms: u64,
    /// 是否用彩色输出状态文字
    pub enable_color: bool,
    /// 是否显示下载速度
    pub show_speed: bool,
    /// 是否显示剩余时间
    pub show_eta: bool,
    /// 是否显示起止时间
    pub show_dates: bool,
    /// 进度条宽度（字符数）
    pub bar_width: usize,
    /// 标题最大显示宽度（字符数），0 表示不截断
    pub max_title_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 100,
            enable_color: true,
            show_speed: true,
            show_eta: true,
            show_dates: false,
            bar_width: 40,
            max_title_width: 32,
        }
    }
}

impl DisplayConfig {
    /// 加载配置文件；文件不存在或格式错误时落回默认值并写回
    pub fn load(path: &str) -> Result<Self, ViewError> {
        if Path::new(path).exists() {
            let content = fs::read_to_string(path)?;
            match toml::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    eprintln!("配置文件格式错误: {}，将使用默认配置", e);
                    let config = DisplayConfig::default();
                    config.save_with_tutorial(path)?;
                    Ok(config)
                }
            }
        } else {
            let config = DisplayConfig::default();
            config.save_with_tutorial(path)?;
            Ok(config)
        }
    }

    /// 保存带注释说明的配置文件（唯一写入方法）
    pub fn save_with_tutorial(&self, path: &str) -> Result<(), ViewError> {
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent)?;
        }
        let tutorial_content = DisplayConfig::generate_tutorial_content();
        let config_content = toml::to_string_pretty(self)?;
        let full_content = format!("{}\n\n{}", tutorial_content, config_content);
        fs::write(path, full_content)?;
        Ok(())
    }

    /// 生成配置文件说明头（静态方法）
    fn generate_tutorial_content() -> String {
        r#"# DownView 展示配置
# ====================
#
# 这是一个 TOML 格式的配置文件，控制下载任务卡片在终端里的显示方式。
# 修改后保存即可，本库不会回写你的改动（除非文件损坏）。

# ==================== 刷新 ====================

# 进度刷新间隔（毫秒）
# 宿主的刷新循环按这个节奏查询并重画卡片
refresh_interval_ms = 100

# ==================== 外观 ====================

# 是否用彩色输出状态文字（paused/downloading/succeeded/failed/waiting）
enable_color = true

# 是否显示下载速度
show_speed = true

# 是否显示剩余时间估算
show_eta = true

# 是否显示开始/结束时间
show_dates = false

# 进度条宽度（字符数），建议 20-80
bar_width = 40

# 标题最大显示宽度（字符数），超出部分省略号收尾；0 表示不截断
max_title_width = 32
"#
        .to_string()
    }

    /// 校验配置合法性
    pub fn validate(&self) -> Result<(), ViewError> {
        if self.refresh_interval_ms == 0 {
            return Err(ViewError::Unknown("刷新间隔必须大于0".to_string()));
        }

        if self.bar_width == 0 {
            return Err(ViewError::Unknown("进度条宽度必须大于0".to_string()));
        }

        if self.bar_width > 200 {
            return Err(ViewError::Unknown("进度条宽度过大".to_string()));
        }

        Ok(())
    }

    /// 获取配置摘要信息
    pub fn get_summary(&self) -> String {
        format!(
            "展示配置:\n\
            - 刷新间隔: {} 毫秒\n\
            - 彩色输出: {}\n\
            - 显示速度: {}\n\
            - 显示剩余时间: {}\n\
            - 显示起止时间: {}\n\
            - 进度条宽度: {}\n\
            - 标题宽度: {}",
            self.refresh_interval_ms,
            if self.enable_color { "启用" } else { "禁用" },
            if self.show_speed { "启用" } else { "禁用" },
            if self.show_eta { "启用" } else { "禁用" },
            if self.show_dates { "启用" } else { "禁用" },
            self.bar_width,
            if self.max_title_width == 0 {
                "不截断".to_string()
            } else {
                self.max_title_width.to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = DisplayConfig::default();
        assert_eq!(config.refresh_interval_ms, 100);
        assert!(config.enable_color);
        assert_eq!(config.bar_width, 40);
        assert_eq!(config.max_title_width, 32);
    }

    #[test]
    fn test_config_validation() {
        let mut config = DisplayConfig::default();
        assert!(config.validate().is_ok());

        config.refresh_interval_ms = 0;
        assert!(config.validate().is_err());

        config = DisplayConfig::default();
        config.bar_width = 0;
        assert!(config.validate().is_err());

        config = DisplayConfig::default();
        config.bar_width = 500;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_load() {
        let config = DisplayConfig::default();
        let path = "./test_display_config.toml";

        config.save_with_tutorial(path).expect("保存配置失败");
        let loaded = DisplayConfig::load(path).expect("加载配置失败");

        assert_eq!(loaded.refresh_interval_ms, config.refresh_interval_ms);
        assert_eq!(loaded.bar_width, config.bar_width);

        // 清理测试文件
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_config_save_with_tutorial() {
        let config = DisplayConfig::default();
        let path = "./test_display_config_tutorial.toml";
        config.save_with_tutorial(path).expect("保存配置失败");
        let content = fs::read_to_string(path).expect("读取配置文件失败");
        assert!(content.contains("DownView 展示配置"));
        assert!(content.contains("refresh_interval_ms"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_config_summary() {
        let config = DisplayConfig::default();
        let summary = config.get_summary();

        assert!(summary.contains("展示配置"));
        assert!(summary.contains("刷新间隔"));
        assert!(summary.contains("进度条宽度"));
    }

    #[test]
    fn test_config_load_broken_file_falls_back() {
        let path = "./test_display_config_broken.toml";
        fs::write(path, "refresh_interval_ms = \"oops\"").expect("写入测试文件失败");
        let loaded = DisplayConfig::load(path).expect("加载应当落回默认值");
        assert_eq!(loaded.refresh_interval_ms, 100);
        let _ = fs::remove_file(path);
    }
}
