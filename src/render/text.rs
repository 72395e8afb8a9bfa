//! 纯文本试卷稿
//!
//! 按院方卷面惯例排布内容：分区标题带分值方案，PART B 从第 6 题编号，
//! PART C 固定编号（CAT 卷 10、期末卷 16），OR 选做用 "(OR)" 分隔，
//! 每题行尾标注 CO / Bloom 标签

use crate::models::{ExamType, PaperHeader, Question, SelectedPaper};

/// 渲染上下文：由调用方透传的卷面字符串，核心不做任何加工
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// 专业/分院（如 "IT"）
    pub branch: String,
    /// 试卷代码（如 "2311ITC301T"）
    pub qcode: String,
    /// 考试月份年份（如 "December 2025"）
    pub month_year: String,
    /// 允许携带的工具说明（仅期末卷）
    pub materials_allowed: Option<String>,
}

/// 组卷结构的 JSON 导出，供外部渲染器消费
pub fn render_json(paper: &SelectedPaper) -> serde_json::Result<String> {
    serde_json::to_string_pretty(paper)
}

/// 渲染纯文本试卷稿
pub fn render_plain_text(
    header: &PaperHeader,
    paper: &SelectedPaper,
    outcomes: &[String],
    ctx: &RenderContext,
    exam_type: ExamType,
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(72);

    // 卷头
    out.push_str(&rule);
    out.push('\n');
    out.push_str(
        header
            .exam_type
            .as_deref()
            .unwrap_or_else(|| exam_type.title()),
    );
    out.push('\n');
    out.push_str(&format!("{} – {}\n", ctx.qcode, ctx.branch));
    if let Some(name) = header.subject_name.as_deref() {
        out.push_str(name);
        out.push('\n');
    }
    if let Some(regulation) = header.regulation.as_deref() {
        out.push_str(regulation);
        out.push('\n');
    }
    if let Some(semester) = header.semester.as_deref() {
        out.push_str(semester);
        out.push('\n');
    }
    out.push_str(&ctx.month_year);
    out.push('\n');
    if let Some(materials) = ctx.materials_allowed.as_deref() {
        out.push_str(materials);
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');

    // Course Outcomes
    if !outcomes.is_empty() {
        out.push_str("COURSE OUTCOMES\n");
        for co in outcomes {
            out.push_str(co);
            out.push('\n');
        }
        out.push('\n');
    }

    let endsem = exam_type == ExamType::EndSem;

    // PART A
    let part_a_scheme = if endsem { "10 x 2 = 20" } else { "5 x 2 = 10" };
    push_part_heading(&mut out, 'A', part_a_scheme);
    for (idx, q) in paper.part_a.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, annotated(q)));
    }
    out.push('\n');

    // PART B：从第 6 题起编号，每组一对 OR
    let part_b_scheme = if endsem { "5 x 13 = 65" } else { "2 x 13 = 26" };
    push_part_heading(&mut out, 'B', part_b_scheme);
    for (idx, pair) in paper.part_b.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 6, annotated(&pair.main)));
        out.push_str("        (OR)\n");
        out.push_str(&format!("   {}\n", annotated(&pair.alternative)));
    }
    out.push('\n');

    // PART C：固定编号，主选 (a)、备选 (b)
    let part_c_scheme = if endsem { "1 x 15 = 15" } else { "1 x 14 = 14" };
    push_part_heading(&mut out, 'C', part_c_scheme);
    let c_number = if endsem { 16 } else { 10 };
    for (i, q) in paper.part_c.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!("{}. (a) {}\n", c_number, annotated(q)));
        } else {
            out.push_str("        (OR)\n");
            out.push_str(&format!("    (b) {}\n", annotated(q)));
        }
    }

    out
}

/// 分区标题 + 作答说明
fn push_part_heading(out: &mut String, part: char, scheme: &str) {
    out.push_str(&format!("PART {part} – ({scheme} marks)\n"));
    out.push_str("Answer ALL Questions\n\n");
}

/// 题干尾部附上 CO / Bloom 标注
fn annotated(q: &Question) -> String {
    format!("{}  [{} {}]", q.text, q.co, q.bloom)
}
