use std::sync::OnceLock;

use regex::Regex;
use url::Url;

/// 文件名里不适合展示的字符
fn illegal_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[\\/:*?"<>|\x00-\x1F]"#).expect("非法字符正则"))
}

pub fn is_valid_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("ftp://")
}

/// 从 URL 提取展示标题（路径最后一段），提取不到时用固定占位
pub fn display_title_from_url(url_str: &str) -> String {
    if let Ok(url) = Url::parse(url_str) {
        if let Some(name) = url.path_segments().and_then(|segments| segments.last()) {
            if !name.is_empty() {
                return sanitize_title(name);
            }
        }
    }
    "未命名任务".to_string()
}

/// 替换掉不适合展示的字符
pub fn sanitize_title(name: &str) -> String {
    illegal_chars().replace_all(name, "_").into_owned()
}

/// 按字符数截断标题，超出部分用省略号收尾
pub fn truncate_title(title: &str, max_width: usize) -> String {
    if max_width == 0 || title.chars().count() <= max_width {
        return title.to_string();
    }
    let kept: String = title.chars().take(max_width.saturating_sub(1)).collect();
    format!("{}…", kept)
}
