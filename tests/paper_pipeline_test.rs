//! 端到端流程测试：题库文本 → 解析 → 选题 → 渲染/落盘

use question_paper_gen::render::{render_plain_text, RenderContext};
use question_paper_gen::{
    generate_cat1_paper, generate_endsem_paper, App, Config, ExamType, HeaderParser,
    OutcomeParser, Part, QuestionParser, SelectionError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 造一份 CAT-1 题库文本（Unit 1-3，每单元 A×4 / B×3 / C×2）
fn cat1_bank_text() -> String {
    let mut text = String::from(
        "CONTINUOUS ASSESSMENT TEST – I\n\
         Regulations R2021\n\
         Department of Information Technology\n\
         II Year – III Semester\n\
         2311ITC301T – Data Structures\n\
         CO1: Understand linear data structures\n\
         CO2: Apply non-linear data structures\n\
         CO3: Analyse algorithm complexity\n",
    );
    for (unit, roman) in [(1, "I"), (2, "II"), (3, "III")] {
        text.push_str(&format!("Unit – {roman}\n"));
        text.push_str("PART – A\n");
        text.push_str("Q.NO QUESTIONS CO'S BLOOM LEVEL\n");
        for i in 1..=4 {
            text.push_str(&format!("{i}. Short answer {i} for unit {unit}. CO{unit} K1\n"));
        }
        text.push_str("PART – B\n");
        for i in 1..=3 {
            text.push_str(&format!(
                "{i}. Long answer {i} for unit {unit}, spanning\nmultiple lines in the source. CO{unit} K3\n"
            ));
        }
        text.push_str("PART – C\n");
        for i in 1..=2 {
            text.push_str(&format!("{i}. Case study {i} for unit {unit}. CO{unit} K4\n"));
        }
    }
    text
}

/// 第二份题库（Unit 3-5），与第一份合并后覆盖全部 5 个单元
fn cat2_bank_text() -> String {
    let mut text = String::from("CONTINUOUS ASSESSMENT TEST – II\n2311ITC301T – Data Structures\n");
    for (unit, roman) in [(3, "III"), (4, "IV"), (5, "V")] {
        text.push_str(&format!("Unit – {roman}\n"));
        text.push_str("PART – A\n");
        for i in 1..=4 {
            text.push_str(&format!(
                "{i}. Second bank short answer {i} for unit {unit}. CO{unit} K2\n"
            ));
        }
        text.push_str("PART – B\n");
        for i in 1..=3 {
            text.push_str(&format!(
                "{i}. Second bank long answer {i} for unit {unit}. CO{unit} K3\n"
            ));
        }
        text.push_str("PART – C\n");
        for i in 1..=2 {
            text.push_str(&format!(
                "{i}. Second bank case study {i} for unit {unit}. CO{unit} K5\n"
            ));
        }
    }
    text
}

#[test]
fn test_cat1_full_pipeline() {
    let text = cat1_bank_text();

    let header = HeaderParser::new().parse(&text);
    assert_eq!(
        header.exam_type.as_deref(),
        Some("CONTINUOUS ASSESSMENT TEST – I")
    );
    assert_eq!(header.subject_code.as_deref(), Some("2311ITC301T"));
    assert_eq!(header.regulation.as_deref(), Some("Regulations R2021"));

    let outcomes = OutcomeParser::new().parse(&text);
    assert_eq!(outcomes.len(), 3);

    let questions = QuestionParser::new().parse(&text);
    // 每单元 4 + 3 + 2 = 9 道，共 27 道
    assert_eq!(questions.len(), 27);
    for q in &questions {
        assert!((1..=5).contains(&q.unit));
        assert!(!q.text.is_empty());
        assert!(q.co.starts_with("CO"));
        assert!(q.bloom.starts_with('K'));
    }
    // 多行题干合并为一行
    assert!(questions
        .iter()
        .any(|q| q.text.contains("spanning multiple lines")));

    let mut rng = StdRng::seed_from_u64(42);
    let paper = generate_cat1_paper(&questions, &mut rng).unwrap();
    assert_eq!(paper.part_a.len(), 5);
    assert_eq!(paper.part_b.len(), 2);
    assert!(matches!(paper.part_c.len(), 1 | 2));

    let ctx = RenderContext {
        branch: "IT".to_string(),
        qcode: "2311ITC301T".to_string(),
        month_year: "December 2025".to_string(),
        materials_allowed: None,
    };
    let rendered = render_plain_text(&header, &paper, &outcomes, &ctx, ExamType::Cat1);
    assert!(rendered.contains("PART A – (5 x 2 = 10 marks)"));
    assert!(rendered.contains("6. (a) "));
    assert!(rendered.contains("(OR)"));
    assert!(rendered.contains("COURSE OUTCOMES"));
}

#[test]
fn test_endsem_merged_banks() {
    let parser = QuestionParser::new();
    let mut questions = parser.parse(&cat1_bank_text());
    questions.extend(parser.parse(&cat2_bank_text()));

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let paper = generate_endsem_paper(&questions, &mut rng).unwrap();

        assert_eq!(paper.part_a.len(), 10);
        assert_eq!(paper.part_b.len(), 5);
        assert_eq!(paper.part_c.len(), 2);
        for pair in &paper.part_b {
            assert!(pair.main.text.starts_with("(a) "));
            assert!(pair.alternative.text.starts_with("(b) "));
        }
    }
}

#[test]
fn test_quota_error_reaches_caller_with_details() {
    let text = "Unit – I\nPART – A\n1. Only one short answer. CO1 K1\n";
    let questions = QuestionParser::new().parse(text);
    assert_eq!(questions.len(), 1);

    let mut rng = StdRng::seed_from_u64(0);
    let err = generate_cat1_paper(&questions, &mut rng).unwrap_err();
    assert!(matches!(err, SelectionError::NotEnoughInUnit { .. }));
    let msg = err.to_string();
    assert!(msg.contains("Unit 1"));
    assert!(msg.contains('2'));
}

#[test]
fn test_parser_prefers_dropping_over_guessing() {
    let text = "Unit – I\nPART – A\n1. Tagged question. CO1 K1\n2. Untagged question.\n";
    let questions = QuestionParser::new().parse(text);
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].part, Part::A);
    assert_eq!(questions[0].text, "Tagged question.");
}

#[tokio::test]
async fn test_app_generates_version_files() {
    let workdir = std::env::temp_dir().join(format!(
        "question_paper_gen_test_{}",
        std::process::id()
    ));
    tokio::fs::create_dir_all(&workdir).await.unwrap();

    let bank_path = workdir.join("cat1_bank.txt");
    tokio::fs::write(&bank_path, cat1_bank_text()).await.unwrap();

    let output_dir = workdir.join("papers");
    let config = Config {
        exam_type: "cat1".to_string(),
        bank_files: vec![bank_path.display().to_string()],
        num_versions: 2,
        output_dir: output_dir.display().to_string(),
        output_log_file: workdir.join("output.txt").display().to_string(),
        ..Config::default()
    };

    let stats = App::initialize(config).unwrap().run().await.unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.success, 2);
    assert_eq!(stats.failed, 0);

    for version in 1..=2 {
        assert!(output_dir.join(format!("CAT1_V{version}.txt")).exists());
        assert!(output_dir.join(format!("CAT1_V{version}.json")).exists());
    }

    tokio::fs::remove_dir_all(&workdir).await.ok();
}

#[tokio::test]
async fn test_app_rejects_wrong_bank_count() {
    let workdir = std::env::temp_dir().join(format!(
        "question_paper_gen_bankcount_{}",
        std::process::id()
    ));
    tokio::fs::create_dir_all(&workdir).await.unwrap();
    let bank_path = workdir.join("bank.txt");
    tokio::fs::write(&bank_path, cat1_bank_text()).await.unwrap();

    // 期末卷需要两份题库
    let config = Config {
        exam_type: "endsem".to_string(),
        bank_files: vec![bank_path.display().to_string()],
        output_log_file: workdir.join("output.txt").display().to_string(),
        output_dir: workdir.join("papers").display().to_string(),
        ..Config::default()
    };

    let result = App::initialize(config).unwrap().run().await;
    assert!(result.is_err());

    tokio::fs::remove_dir_all(&workdir).await.ok();
}
