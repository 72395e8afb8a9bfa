//! CAT-1 / CAT-2 组卷规则
//!
//! 两种 CAT 卷结构相同：PART A 五道 2 分题（2+2+1 配额）、
//! PART B 两组 OR 选做、PART C 一道综合题（可带 OR 备选）。
//! 区别只在取题的 Unit 范围：CAT-1 用 1-3，CAT-2 用 4,5,3

use crate::error::SelectionError;
use crate::models::{OrPair, Part, Question, SelectedPaper};
use crate::selection::{group_by_unit_part, unit_part_pool, UnitPools};
use rand::seq::SliceRandom;
use rand::Rng;

/// 生成 CAT-1 试卷
///
/// PART A：Unit 1 出 2 题、Unit 2 出 2 题、Unit 3 出 1 题；
/// PART B：Unit 1-3 洗牌后前两个各出一组 OR 对；
/// PART C：剩下那个 Unit 供题（C 池为空则回退到它的 B 池）
pub fn generate_cat1_paper<R: Rng + ?Sized>(
    questions: &[Question],
    rng: &mut R,
) -> Result<SelectedPaper, SelectionError> {
    let pools = group_by_unit_part(questions);
    let mut paper = SelectedPaper::default();

    draw_part_a(&pools, &[(1, 2), (2, 2), (3, 1)], &mut paper, rng)?;

    let mut units = [1u8, 2, 3];
    units.shuffle(rng);

    for &unit in &units[..2] {
        let candidates = unit_part_pool(&pools, unit, Part::B);
        if candidates.len() < 2 {
            return Err(SelectionError::NotEnoughInUnit {
                unit,
                part: Part::B.as_str().to_string(),
                required: 2,
                available: candidates.len(),
            });
        }
        paper.part_b.push(draw_or_pair(candidates, rng));
    }

    paper.part_c = draw_part_c(&pools, units[2], rng)?;

    Ok(paper)
}

/// 生成 CAT-2 试卷
///
/// PART A：Unit 4 出 2 题、Unit 5 出 2 题、Unit 3 出 1 题；
/// PART B/C 在 {3,4,5} 里取：有 B 题的 Unit 洗牌后前两个供 PART B，
/// 单元内不足 2 题时回退到三个 Unit 的 B 池并集（按同题去重）；
/// 剩余 Unit（没有就复用 B 的 Unit）供 PART C
pub fn generate_cat2_paper<R: Rng + ?Sized>(
    questions: &[Question],
    rng: &mut R,
) -> Result<SelectedPaper, SelectionError> {
    let pools = group_by_unit_part(questions);
    let mut paper = SelectedPaper::default();

    draw_part_a(&pools, &[(4, 2), (5, 2), (3, 1)], &mut paper, rng)?;

    let mut available_units: Vec<u8> = [3u8, 4, 5]
        .into_iter()
        .filter(|&u| !unit_part_pool(&pools, u, Part::B).is_empty())
        .collect();
    if available_units.len() < 2 {
        return Err(SelectionError::NotEnoughUnits {
            required: 2,
            available: available_units.len(),
        });
    }
    available_units.shuffle(rng);

    let b_units: Vec<u8> = available_units[..2].to_vec();
    let remaining_units: Vec<u8> = available_units[2..].to_vec();
    let c_pool = if remaining_units.is_empty() {
        &b_units
    } else {
        &remaining_units
    };
    let Some(&c_unit) = c_pool.choose(rng) else {
        return Err(SelectionError::NotEnoughUnits {
            required: 1,
            available: 0,
        });
    };

    for &unit in &b_units {
        let mut candidates: Vec<&Question> = unit_part_pool(&pools, unit, Part::B).to_vec();
        if candidates.len() < 2 {
            candidates = combined_part_b_pool(&pools);
        }
        if candidates.len() < 2 {
            return Err(SelectionError::NotEnoughInPool {
                part: Part::B.as_str().to_string(),
                required: 2,
                available: candidates.len(),
            });
        }
        paper.part_b.push(draw_or_pair(&candidates, rng));
    }

    paper.part_c = draw_part_c(&pools, c_unit, rng)?;

    Ok(paper)
}

/// 按 (unit, count) 配额抽取 PART A
fn draw_part_a<R: Rng + ?Sized>(
    pools: &UnitPools<'_>,
    quotas: &[(u8, usize)],
    paper: &mut SelectedPaper,
    rng: &mut R,
) -> Result<(), SelectionError> {
    for &(unit, count) in quotas {
        let candidates = unit_part_pool(pools, unit, Part::A);
        if candidates.len() < count {
            return Err(SelectionError::NotEnoughInUnit {
                unit,
                part: Part::A.as_str().to_string(),
                required: count,
                available: candidates.len(),
            });
        }
        paper
            .part_a
            .extend(candidates.choose_multiple(rng, count).map(|&q| q.clone()));
    }
    Ok(())
}

/// 从候选池不放回抽两题组成 OR 对（调用方保证池内至少 2 题）
fn draw_or_pair<R: Rng + ?Sized>(candidates: &[&Question], rng: &mut R) -> OrPair {
    let picked: Vec<&Question> = candidates.choose_multiple(rng, 2).copied().collect();
    OrPair::new(picked[0].clone(), picked[1].clone())
}

/// Unit 3-5 的 PART B 池并集，按"同一道题"去重
fn combined_part_b_pool<'a>(pools: &UnitPools<'a>) -> Vec<&'a Question> {
    let mut union: Vec<&Question> = Vec::new();
    for u in [3u8, 4, 5] {
        for &q in unit_part_pool(pools, u, Part::B) {
            if !union.iter().any(|f| f.same_question(q)) {
                union.push(q);
            }
        }
    }
    union
}

/// 从指定 Unit 抽 PART C
///
/// 先看 C 池，为空回退到同 Unit 的 B 池（与 PART B 已用题之间
/// 不做跨分区排重，沿用既有规则）。主选之外若还有其他候选，
/// 再抽一道作 OR 备选
fn draw_part_c<R: Rng + ?Sized>(
    pools: &UnitPools<'_>,
    c_unit: u8,
    rng: &mut R,
) -> Result<Vec<Question>, SelectionError> {
    let mut candidates = unit_part_pool(pools, c_unit, Part::C);
    if candidates.is_empty() {
        candidates = unit_part_pool(pools, c_unit, Part::B);
    }

    let Some(&main) = candidates.choose(rng) else {
        return Err(SelectionError::NotEnoughInUnit {
            unit: c_unit,
            part: Part::C.as_str().to_string(),
            required: 1,
            available: 0,
        });
    };

    let mut selected = vec![main.clone()];
    let remaining: Vec<&Question> = candidates
        .iter()
        .copied()
        .filter(|&q| !std::ptr::eq(q, main))
        .collect();
    if let Some(&alternative) = remaining.choose(rng) {
        selected.push(alternative.clone());
    }

    Ok(selected)
}
