//! 选题引擎
//!
//! 输入题库切片和考试类型，输出满足该卷型配额规则的组卷结构。
//! 随机源由调用方显式传入（测试注入固定种子，生产传 `thread_rng`）；
//! 引擎只读题库，选中的题克隆进输出，原始集合不被修改。
//!
//! 配额无法满足时整个调用失败，错误信息带上具体缺口；
//! 不存在部分成功

pub mod cat;
pub mod endsem;

use crate::error::SelectionError;
use crate::models::{ExamType, Part, Question, SelectedPaper};
use rand::Rng;
use std::collections::HashMap;

pub use cat::{generate_cat1_paper, generate_cat2_paper};
pub use endsem::generate_endsem_paper;

/// 两级分组：unit -> part -> 候选题引用列表
pub(crate) type UnitPools<'a> = HashMap<u8, HashMap<Part, Vec<&'a Question>>>;

/// 按 unit / part 分组题库
///
/// 列表内保持题目在题库中的出现顺序
pub(crate) fn group_by_unit_part(questions: &[Question]) -> UnitPools<'_> {
    let mut pools: UnitPools<'_> = HashMap::new();
    for q in questions {
        pools
            .entry(q.unit)
            .or_default()
            .entry(q.part)
            .or_default()
            .push(q);
    }
    pools
}

/// 取某 unit 某 part 的候选池，缺失视为空池
pub(crate) fn unit_part_pool<'a, 'b>(
    pools: &'b UnitPools<'a>,
    unit: u8,
    part: Part,
) -> &'b [&'a Question] {
    pools
        .get(&unit)
        .and_then(|parts| parts.get(&part))
        .map(|v| v.as_slice())
        .unwrap_or(&[])
}

/// 按考试类型分派组卷
pub fn generate_paper<R: Rng + ?Sized>(
    questions: &[Question],
    exam_type: ExamType,
    rng: &mut R,
) -> Result<SelectedPaper, SelectionError> {
    match exam_type {
        ExamType::Cat1 => generate_cat1_paper(questions, rng),
        ExamType::Cat2 => generate_cat2_paper(questions, rng),
        ExamType::EndSem => generate_endsem_paper(questions, rng),
    }
}
