//! 批量组卷编排 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：校验考试类型、建立运行日志
//! 2. **题库加载**：读取抽取好的题库文本（期末卷合并两份）
//! 3. **一次解析**：试卷头、题目序列、CO 列表各解析一遍
//! 4. **并发控制**：Semaphore 限制同时生成的版本数
//! 5. **版本隔离**：每个版本持有题库的独立副本，单版本配额失败
//!    只记录错误，不影响兄弟版本
//! 6. **全局统计**：汇总成功/失败版本数

use crate::config::Config;
use crate::models::{ExamType, PaperHeader, Question};
use crate::orchestrator::loader;
use crate::parser::{HeaderParser, OutcomeParser, QuestionParser};
use crate::render::{render_json, render_plain_text, RenderContext};
use crate::selection;
use crate::utils::logging;
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

/// 单次运行的最大版本数（与卷面惯例一致）
const MAX_VERSIONS: usize = 5;

/// 应用主结构
pub struct App {
    config: Config,
    exam_type: ExamType,
}

/// 运行统计
#[derive(Debug, Default)]
pub struct RunStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let exam_type = ExamType::from_str(&config.exam_type)
            .with_context(|| format!("无法识别的考试类型: {}", config.exam_type))?;

        logging::init_log_file(&config.output_log_file)?;
        log_startup(&config, exam_type);

        Ok(Self { config, exam_type })
    }

    /// 运行主流程：加载 → 解析 → 并发生成各版本
    pub async fn run(&self) -> Result<RunStats> {
        let texts = loader::load_bank_texts(&self.config.bank_files).await?;

        let required = self.exam_type.required_banks();
        if texts.len() != required {
            bail!(
                "考试类型 {} 需要 {} 份题库, 实际提供 {} 份",
                self.exam_type,
                required,
                texts.len()
            );
        }

        let (header, questions, outcomes) = self.parse_banks(&texts);
        if questions.is_empty() {
            warn!("⚠️ 题库中没有解析出任何题目");
        }
        info!(
            "✓ 共解析出 {} 道题目, {} 条 Course Outcome",
            questions.len(),
            outcomes.len()
        );
        if self.config.verbose_logging {
            for q in &questions {
                debug!("  {}", logging::truncate_text(&q.to_string(), 80));
            }
        }

        tokio::fs::create_dir_all(&self.config.output_dir)
            .await
            .with_context(|| format!("无法创建输出目录: {}", self.config.output_dir))?;

        let stats = self
            .generate_all_versions(&header, &questions, &outcomes)
            .await?;

        print_final_stats(&stats, &self.config);
        Ok(stats)
    }

    /// 解析全部题库文本
    ///
    /// 试卷头取第一份文档；期末卷合并两份题目池并改写考试类型；
    /// CO 列表优先取第一份，为空再看第二份
    fn parse_banks(&self, texts: &[String]) -> (PaperHeader, Vec<Question>, Vec<String>) {
        let header_parser = HeaderParser::new();
        let question_parser = QuestionParser::new();
        let outcome_parser = OutcomeParser::new();

        let mut header = header_parser.parse(&texts[0]);
        let mut questions = Vec::new();
        for text in texts {
            questions.extend(question_parser.parse(text));
        }
        let mut outcomes = outcome_parser.parse(&texts[0]);

        if self.exam_type == ExamType::EndSem {
            header.exam_type = Some(ExamType::EndSem.title().to_string());
            if outcomes.is_empty() {
                if let Some(second) = texts.get(1) {
                    outcomes = outcome_parser.parse(second);
                }
            }
        }

        (header, questions, outcomes)
    }

    /// 并发生成全部版本
    async fn generate_all_versions(
        &self,
        header: &PaperHeader,
        questions: &[Question],
        outcomes: &[String],
    ) -> Result<RunStats> {
        let num_versions = self.config.num_versions.clamp(1, MAX_VERSIONS);
        if num_versions != self.config.num_versions {
            warn!(
                "⚠️ 版本数 {} 超出范围, 已调整为 {}",
                self.config.num_versions, num_versions
            );
        }

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_versions.max(1)));
        let mut handles = Vec::new();

        for version in 1..=num_versions {
            let permit = semaphore.clone().acquire_owned().await?;
            // 选题只读题库，但各版本仍持有独立副本，互不纠缠
            let questions = questions.to_vec();
            let header = header.clone();
            let outcomes = outcomes.to_vec();
            let config = self.config.clone();
            let exam_type = self.exam_type;

            let handle = tokio::spawn(async move {
                let _permit = permit;
                generate_version(version, exam_type, &questions, &header, &outcomes, &config).await
            });
            handles.push((version, handle));
        }

        let mut stats = RunStats {
            total: num_versions,
            ..Default::default()
        };

        for (version, handle) in handles {
            match handle.await {
                Ok(Ok(path)) => {
                    info!("✅ 版本 {} 已生成: {}", version, path);
                    stats.success += 1;
                }
                Ok(Err(e)) => {
                    error!("❌ 版本 {} 生成失败: {}", version, e);
                    stats.failed += 1;
                }
                Err(e) => {
                    error!("❌ 版本 {} 任务执行失败: {}", version, e);
                    stats.failed += 1;
                }
            }
        }

        Ok(stats)
    }
}

/// 生成单个版本：选题 → 渲染 → 写出文本稿和 JSON 工件
///
/// 返回文本稿路径
async fn generate_version(
    version: usize,
    exam_type: ExamType,
    questions: &[Question],
    header: &PaperHeader,
    outcomes: &[String],
    config: &Config,
) -> Result<String> {
    info!("\n[版本 {}] {}", version, "─".repeat(30));
    info!("[版本 {}] 开始选题...", version);

    let selected = selection::generate_paper(questions, exam_type, &mut rand::thread_rng())?;

    info!(
        "[版本 {}] ✓ 选题完成: PART A {} 题, PART B {} 组, PART C {} 题",
        version,
        selected.part_a.len(),
        selected.part_b.len(),
        selected.part_c.len()
    );

    let ctx = RenderContext {
        branch: config.branch.clone(),
        qcode: config.qcode.clone(),
        month_year: config.month_year.clone(),
        materials_allowed: (exam_type == ExamType::EndSem)
            .then(|| config.materials_allowed.clone()),
    };
    let text = render_plain_text(header, &selected, outcomes, &ctx, exam_type);
    let json = render_json(&selected)?;

    let base = format!("{}_V{}", exam_type.name().to_uppercase(), version);
    let txt_path = Path::new(&config.output_dir).join(format!("{base}.txt"));
    let json_path = Path::new(&config.output_dir).join(format!("{base}.json"));

    tokio::fs::write(&txt_path, text)
        .await
        .with_context(|| format!("无法写入文件: {}", txt_path.display()))?;
    tokio::fs::write(&json_path, json)
        .await
        .with_context(|| format!("无法写入文件: {}", json_path.display()))?;

    Ok(txt_path.display().to_string())
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config, exam_type: ExamType) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 组卷模式: {}", exam_type);
    info!("📄 题库文件: {}", config.bank_files.join(", "));
    info!("📊 版本数: {}", config.num_versions);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &RunStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部版本处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n输出目录: {}", config.output_dir);
}
