use shared::models::{ClockTime, LatePolicy};

const DEFAULT_HTTP_PORT: u16 = 3000;
const DEFAULT_AGENT_TOKEN: &str = "mySecret123";
const DEFAULT_GRACE_MINUTES: u32 = 5;
const DEFAULT_ROSTER_PATH: &str = "roster.json";

fn default_start_time() -> ClockTime {
    ClockTime::new(9, 0).unwrap_or(ClockTime::MIDNIGHT)
}

/// 服务器配置 - 考勤节点的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | AGENT_TOKEN | mySecret123 | 终端共享密钥（务必修改） |
/// | START_TIME | 09:00 | 上班时间 (HH:MM) |
/// | GRACE_MINUTES | 5 | 宽限分钟数 |
/// | ROSTER_PATH | roster.json | 花名册文件路径 |
/// | LOG_DIR | (未设置) | 设置后同时写入按日滚动的日志文件 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// START_TIME=08:30 GRACE_MINUTES=10 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 终端上报用的共享密钥
    pub agent_token: String,
    /// 上班时间
    pub start_time: ClockTime,
    /// 宽限分钟数（严格大于才算迟到）
    pub grace_minutes: u32,
    /// 花名册文件路径
    pub roster_path: String,
    /// 日志目录（可选）
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值；无法解析的值记录警告后回退默认
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
            agent_token: std::env::var("AGENT_TOKEN")
                .unwrap_or_else(|_| DEFAULT_AGENT_TOKEN.into()),
            start_time: std::env::var("START_TIME")
                .ok()
                .and_then(|raw| match raw.parse() {
                    Ok(time) => Some(time),
                    Err(_) => {
                        tracing::warn!(value = %raw, "START_TIME is not HH:MM, using 09:00");
                        None
                    }
                })
                .unwrap_or_else(default_start_time),
            grace_minutes: std::env::var("GRACE_MINUTES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_GRACE_MINUTES),
            roster_path: std::env::var("ROSTER_PATH")
                .unwrap_or_else(|_| DEFAULT_ROSTER_PATH.into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 迟到判定策略
    pub fn late_policy(&self) -> LatePolicy {
        LatePolicy::new(self.start_time, self.grace_minutes)
    }

    /// 是否仍在使用内置默认密钥
    pub fn is_default_token(&self) -> bool {
        self.agent_token == DEFAULT_AGENT_TOKEN
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            agent_token: DEFAULT_AGENT_TOKEN.into(),
            start_time: default_start_time(),
            grace_minutes: DEFAULT_GRACE_MINUTES,
            roster_path: DEFAULT_ROSTER_PATH.into(),
            log_dir: None,
            environment: "development".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.start_time, ClockTime::new(9, 0).unwrap());
        assert_eq!(config.grace_minutes, 5);
        assert!(config.is_default_token());
    }

    #[test]
    fn test_late_policy_from_config() {
        let config = Config {
            start_time: ClockTime::new(8, 30).unwrap(),
            grace_minutes: 10,
            ..Config::default()
        };

        let policy = config.late_policy();
        assert!(!policy.is_late(ClockTime::new(8, 40).unwrap()));
        assert!(policy.is_late(ClockTime::new(8, 41).unwrap()));
    }

    #[test]
    fn test_custom_token_is_not_default() {
        let config = Config {
            agent_token: "super-secret".into(),
            ..Config::default()
        };
        assert!(!config.is_default_token());
    }
}
