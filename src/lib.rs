//! # Question Paper Gen
//!
//! 从学术题库文档抽取结构化题目并按院方规则自动组卷的工具
//! （CAT-1 / CAT-2 / 期末三种卷型）
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目实体、试卷头、组卷结果结构
//!
//! ### ② 解析层（Parser）
//! - `parser/` - 把题库纯文本还原成结构化数据
//! - `HeaderParser` - 试卷头字段提取
//! - `QuestionParser` - 题目切分状态机
//! - `OutcomeParser` - Course Outcome 列表提取
//!
//! ### ③ 选题层（Selection）
//! - `selection/` - 三种卷型的配额规则引擎，随机源显式传入
//!
//! ### ④ 渲染边界（Render）
//! - `render/` - 纯文本稿 + JSON 工件；版面排版归外部渲染器
//!
//! ### ⑤ 编排层（Orchestration）
//! - `orchestrator/` - 题库加载、批量多版本并发生成、版本间失败隔离

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod render;
pub mod selection;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::SelectionError;
pub use models::{ExamType, OrPair, PaperHeader, Part, Question, SelectedPaper};
pub use orchestrator::{App, RunStats};
pub use parser::{HeaderParser, OutcomeParser, QuestionParser};
pub use selection::{
    generate_cat1_paper, generate_cat2_paper, generate_endsem_paper, generate_paper,
};
