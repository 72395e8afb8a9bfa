//! 题库文本加载
//!
//! 题库文档的文本抽取由外部步骤完成，这里只负责把抽好的
//! UTF-8 纯文本读进内存

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// 读取单个题库文本文件
pub async fn load_bank_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取题库文件: {}", path.display()))?;
    info!(
        "✓ 已加载题库: {} ({} 行)",
        path.display(),
        text.lines().count()
    );
    Ok(text)
}

/// 按配置顺序读取全部题库文本
pub async fn load_bank_texts(paths: &[String]) -> Result<Vec<String>> {
    let mut texts = Vec::with_capacity(paths.len());
    for path in paths {
        texts.push(load_bank_text(path).await?);
    }
    Ok(texts)
}
