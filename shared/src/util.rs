/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a random 128-bit identifier (UUID v4) for orders and jobs
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
