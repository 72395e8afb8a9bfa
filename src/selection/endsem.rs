//! 期末（End-Semester）组卷规则
//!
//! 覆盖全部 5 个 Unit：PART A 恰好 10 道 2 分题，
//! PART B 每 Unit 一组 OR 对（共 5 组），PART C 两道未被占用的大题

use crate::error::SelectionError;
use crate::models::{OrPair, Part, Question, SelectedPaper};
use crate::selection::{group_by_unit_part, unit_part_pool};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

const UNITS: [u8; 5] = [1, 2, 3, 4, 5];

/// 生成期末试卷
///
/// PART A：先每 Unit 至多抽 2 题，不足 10 再从全池未选题补满，
/// 最后整体打乱（输出不保留按 Unit 的分组顺序）；全池不足 10 题则失败。
///
/// PART B：每 Unit 的 B∪C 合并池至少要有 2 题（否则报出该 Unit），
/// 池内洗牌后前两题组成该 Unit 的 OR 对。
///
/// PART C：在全局大题池（固定扫描顺序）里取前两道
/// 未被 PART B 占用的题，按"同一道题"判定占用；不足 2 道则失败
pub fn generate_endsem_paper<R: Rng + ?Sized>(
    questions: &[Question],
    rng: &mut R,
) -> Result<SelectedPaper, SelectionError> {
    let pools = group_by_unit_part(questions);
    let mut paper = SelectedPaper::default();

    // === PART A ===
    let all_a: Vec<&Question> = UNITS
        .iter()
        .flat_map(|&u| unit_part_pool(&pools, u, Part::A).iter().copied())
        .collect();
    if all_a.len() < 10 {
        return Err(SelectionError::NotEnoughInPool {
            part: Part::A.as_str().to_string(),
            required: 10,
            available: all_a.len(),
        });
    }

    let mut part_a: Vec<&Question> = Vec::new();
    for &u in &UNITS {
        let candidates = unit_part_pool(&pools, u, Part::A);
        let take = candidates.len().min(2);
        part_a.extend(candidates.choose_multiple(rng, take).copied());
    }

    // 不足 10 题时从全池未选题补齐
    if part_a.len() < 10 {
        let remaining: Vec<&Question> = all_a
            .iter()
            .copied()
            .filter(|&q| !part_a.iter().any(|&s| std::ptr::eq(s, q)))
            .collect();
        let needed = 10 - part_a.len();
        part_a.extend(
            remaining
                .choose_multiple(rng, needed.min(remaining.len()))
                .copied(),
        );
    }

    part_a.shuffle(rng);
    paper.part_a = part_a.into_iter().cloned().collect();

    // === PART B 与 PART C 共用的大题池 ===
    let mut unit_long: HashMap<u8, Vec<&Question>> = HashMap::new();
    let mut all_long: Vec<&Question> = Vec::new();
    for &u in &UNITS {
        let mut combined: Vec<&Question> = unit_part_pool(&pools, u, Part::B).to_vec();
        combined.extend_from_slice(unit_part_pool(&pools, u, Part::C));
        if combined.len() < 2 {
            return Err(SelectionError::NotEnoughInUnit {
                unit: u,
                part: "B+C".to_string(),
                required: 2,
                available: combined.len(),
            });
        }
        combined.shuffle(rng);
        all_long.extend(combined.iter().copied());
        unit_long.insert(u, combined);
    }
    all_long.shuffle(rng);

    // === PART B：每 Unit 取洗牌后的前两题 ===
    let mut used: Vec<&Question> = Vec::new();
    for &u in &UNITS {
        let Some(pool) = unit_long.get(&u) else {
            continue;
        };
        let (main, alternative) = (pool[0], pool[1]);
        used.push(main);
        used.push(alternative);
        paper
            .part_b
            .push(OrPair::new(main.clone(), alternative.clone()));
    }

    // === PART C：全局池里前两道未被占用的题 ===
    let available: Vec<&Question> = all_long
        .iter()
        .copied()
        .filter(|q| !used.iter().any(|u| u.same_question(q)))
        .collect();
    if available.len() < 2 {
        return Err(SelectionError::NotEnoughInPool {
            part: Part::C.as_str().to_string(),
            required: 2,
            available: available.len(),
        });
    }
    paper.part_c.push(available[0].clone());
    paper.part_c.push(available[1].clone());

    Ok(paper)
}
