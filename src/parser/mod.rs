//! 文档解析层
//!
//! 把已抽取好的题库纯文本转换为试卷头、题目序列和 CO 列表。
//! 对格式问题一律降级为丢弃，不向上抛错

pub mod header;
pub mod outcomes;
pub mod questions;

pub use header::HeaderParser;
pub use outcomes::OutcomeParser;
pub use questions::QuestionParser;
