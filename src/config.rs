//! 程序配置
//!
//! 默认值可被环境变量或 TOML 配置文件覆盖

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 程序配置
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 考试类型：cat1 / cat2 / endsem
    pub exam_type: String,
    /// 题库文本文件路径（CAT 卷一份，期末卷两份）
    pub bank_files: Vec<String>,
    /// 生成的试卷版本数（1-5）
    pub num_versions: usize,
    /// 同时生成的版本数上限
    pub max_concurrent_versions: usize,
    /// 输出目录
    pub output_dir: String,
    /// 运行日志文件
    pub output_log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- 卷面透传字段 ---
    /// 专业/分院
    pub branch: String,
    /// 试卷代码
    pub qcode: String,
    /// 考试月份年份
    pub month_year: String,
    /// 允许携带的工具说明（仅期末卷用）
    pub materials_allowed: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exam_type: "cat1".to_string(),
            bank_files: vec!["question_bank.txt".to_string()],
            num_versions: 1,
            max_concurrent_versions: 5,
            output_dir: "output_papers".to_string(),
            output_log_file: "output.txt".to_string(),
            verbose_logging: false,
            branch: "IT".to_string(),
            qcode: "2311ITC301T".to_string(),
            month_year: "December 2025".to_string(),
            materials_allowed: "Calc, Log Book are allowed".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置，缺失项用默认值
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            exam_type: std::env::var("EXAM_TYPE").unwrap_or(default.exam_type),
            bank_files: std::env::var("BANK_FILES")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(default.bank_files),
            num_versions: std::env::var("NUM_VERSIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.num_versions),
            max_concurrent_versions: std::env::var("MAX_CONCURRENT_VERSIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_concurrent_versions),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            branch: std::env::var("BRANCH").unwrap_or(default.branch),
            qcode: std::env::var("QCODE").unwrap_or(default.qcode),
            month_year: std::env::var("MONTH_YEAR").unwrap_or(default.month_year),
            materials_allowed: std::env::var("MATERIALS_ALLOWED")
                .unwrap_or(default.materials_allowed),
        }
    }

    /// 从 TOML 文件加载配置
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))?;
        Ok(config)
    }
}
