/// 将字节数转为人类可读字符串
///
/// 1KB 以下直接按字节显示（"512B"），以上保留一位小数（"1.0MB"）。
pub fn format_size(size: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = size as f64;
    let mut unit_index = 0;

    while value >= 1024.0 && unit_index < UNITS.len() - 1 {
        value /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{}B", size)
    } else {
        format!("{:.1}{}", value, UNITS[unit_index])
    }
}

/// 下载速度显示
pub fn format_speed(speed: u64) -> String {
    if speed > 1024 * 1024 {
        format!("{:.2} MB/s", speed as f64 / (1024.0 * 1024.0))
    } else if speed > 1024 {
        format!("{:.2} KB/s", speed as f64 / 1024.0)
    } else {
        format!("{} B/s", speed)
    }
}

/// 按当前速度估算剩余时间；速度为 0 或已经下完时返回"未知"
pub fn format_eta(downloaded: u64, total: u64, speed: u64) -> String {
    if speed > 0 && total > downloaded {
        let seconds = (total - downloaded) / speed;
        if seconds > 3600 {
            format!("{}h{}m", seconds / 3600, (seconds % 3600) / 60)
        } else if seconds > 60 {
            format!("{}m{}s", seconds / 60, seconds % 60)
        } else {
            format!("{}s", seconds)
        }
    } else {
        "未知".to_string()
    }
}
