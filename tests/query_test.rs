//! 照合処理の統合テスト
//!
//! 需要・台帳ファイルを一時ディレクトリに作成し、入口関数を通して検証する

use material_match::export::csv::read_results;
use material_match::{match_materials, run_query, MatchError, OutputFormat, QueryOutcome};
use material_match_common::{ColumnNames, Error as CommonError};
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const STORE_CSV: &str = "\
日期,摘要,供应商/客户名称,单据金额
2024-01-02,采购钢板一批,甲公司,1500
2024-01-03,螺栓采购,乙公司,300.5
2024-01-04,无关摘要,丙公司,20
2024-01-05,,丁公司,1
2024-01-06,钢板补货 钢板,戊公司,待定
";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("フィクスチャ作成失敗");
    path
}

fn run(demand: &Path, store: &Path, output: &Path, format: OutputFormat) -> QueryOutcome {
    match_materials(demand, store, output, format, &ColumnNames::default())
}

/// 仕様例: 「/」行は除外され、順序番号は元の行位置のまま
#[test]
fn test_scenario_orders_follow_demand_rows() {
    let dir = tempdir().expect("Failed to create temp dir");
    let demand = write(&dir, "demand.csv", "材料\n钢板\n/\n螺栓\n");
    let store = write(&dir, "store.csv", "摘要,供应商/客户名称,单据金额\n采购钢板一批,甲,1\n螺栓采购,乙,2\n无关摘要,丙,3\n");
    let output = dir.path().join("output").join("query_result.csv");

    let outcome = run(&demand, &store, &output, OutputFormat::Plain);
    assert!(outcome.is_written(), "{}", outcome.message());

    let records = read_results(&output).unwrap();
    let got: Vec<(usize, &str, &str)> = records
        .iter()
        .map(|r| (r.order, r.material.as_str(), r.summary.as_str()))
        .collect();
    assert_eq!(got, vec![(1, "钢板", "采购钢板一批"), (3, "螺栓", "螺栓采购")]);
}

/// 各順序の行数 = その材料を含む台帳行数
#[test]
fn test_row_count_per_order() {
    let dir = tempdir().unwrap();
    let demand = write(&dir, "demand.csv", "材料\n螺栓\n钢板\n法兰\n");
    let store = write(&dir, "store.csv", STORE_CSV);
    let output = dir.path().join("out.csv");

    run(&demand, &store, &output, OutputFormat::Plain);
    let records = read_results(&output).unwrap();

    let count = |order: usize| records.iter().filter(|r| r.order == order).count();
    assert_eq!(count(1), 1);
    assert_eq!(count(2), 2);
    assert_eq!(count(3), 0);

    let orders: Vec<usize> = records.iter().map(|r| r.order).collect();
    let mut sorted = orders.clone();
    sorted.sort();
    assert_eq!(orders, sorted);

    // 同一材料内は台帳の行順
    let steel: Vec<&str> = records
        .iter()
        .filter(|r| r.order == 2)
        .map(|r| r.counterparty.as_str())
        .collect();
    assert_eq!(steel, vec!["甲公司", "戊公司"]);
    assert_eq!(records[0].amount, "300.5");
}

/// 同じ入力からは同じCSVが出力される
#[test]
fn test_plain_output_is_idempotent() {
    let dir = tempdir().unwrap();
    let demand = write(&dir, "demand.csv", "材料\n钢板\n螺栓\n");
    let store = write(&dir, "store.csv", STORE_CSV);
    let output = dir.path().join("out.csv");

    run(&demand, &store, &output, OutputFormat::Plain);
    let first = std::fs::read(&output).unwrap();
    run(&demand, &store, &output, OutputFormat::Plain);
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second);
    assert!(first.starts_with(b"\xEF\xBB\xBForder,material,counterparty,amount,summary"));
}

/// HTML出力では全出現箇所がハイライトされる
#[test]
fn test_html_highlights_every_occurrence() {
    let dir = tempdir().unwrap();
    let demand = write(&dir, "demand.csv", "材料\n钢板\n");
    let store = write(&dir, "store.csv", STORE_CSV);
    let output = dir.path().join("query_result.html");

    let outcome = run(&demand, &store, &output, OutputFormat::Html);
    assert!(outcome.is_written());

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("一致 2 件"));
    assert!(html.contains("采购<span class=\"highlight\">钢板</span>一批"));
    assert!(html.contains(
        "<span class=\"highlight\">钢板</span>补货 <span class=\"highlight\">钢板</span>"
    ));
    assert!(!html.contains("螺栓采购"));
}

/// 台帳に金額列がない
#[test]
fn test_missing_amount_column() {
    let dir = tempdir().unwrap();
    let demand = write(&dir, "demand.csv", "材料\n钢板\n");
    let store = write(&dir, "store.csv", "摘要,供应商/客户名称\n采购钢板一批,甲\n");
    let output = dir.path().join("out.csv");

    let outcome = run(&demand, &store, &output, OutputFormat::Plain);
    match outcome {
        QueryOutcome::Failed(MatchError::Common(CommonError::Schema { source_kind, missing })) => {
            assert_eq!(source_kind, "store");
            assert_eq!(missing, vec!["单据金额".to_string()]);
        }
        other => panic!("想定外の結果: {:?}", other),
    }
    assert!(!output.exists());
}

/// 需要ファイルに材料列がない
#[test]
fn test_missing_material_column() {
    let dir = tempdir().unwrap();
    let demand = write(&dir, "demand.csv", "物料\n钢板\n");
    let store = write(&dir, "store.csv", STORE_CSV);

    let err = run_query(
        &demand,
        &store,
        &dir.path().join("out.csv"),
        OutputFormat::Plain,
        &ColumnNames::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("demand"));
    assert!(err.to_string().contains("材料"));
}

/// 有効な材料が1件もない
#[test]
fn test_no_valid_entries() {
    let dir = tempdir().unwrap();
    let demand = write(&dir, "demand.csv", "材料\n/\n   \n/ /\n");
    let store = write(&dir, "store.csv", STORE_CSV);
    let output = dir.path().join("out.csv");

    let outcome = run(&demand, &store, &output, OutputFormat::Plain);
    assert!(matches!(
        outcome,
        QueryOutcome::Failed(MatchError::Common(CommonError::NoValidEntries { discarded: 3 }))
    ));
    assert!(!output.exists());
}

/// 一致0件はエラーではなくNotFound
#[test]
fn test_zero_matches_is_not_found() {
    let dir = tempdir().unwrap();
    let demand = write(&dir, "demand.csv", "材料\n法兰\n垫片\n");
    let store = write(&dir, "store.csv", STORE_CSV);
    let output = dir.path().join("out.csv");

    let outcome = run(&demand, &store, &output, OutputFormat::Plain);
    assert!(matches!(outcome, QueryOutcome::NotFound));
    assert!(!output.exists());

    let inner = run_query(
        &demand,
        &store,
        &output,
        OutputFormat::Html,
        &ColumnNames::default(),
    )
    .unwrap();
    assert!(inner.is_none());
}

/// 対応外の拡張子
#[test]
fn test_unsupported_format() {
    let dir = tempdir().unwrap();
    let demand = write(&dir, "demand.txt", "材料\n钢板\n");
    let store = write(&dir, "store.csv", STORE_CSV);

    let outcome = run(&demand, &store, &dir.path().join("out.csv"), OutputFormat::Plain);
    assert!(matches!(outcome, QueryOutcome::Failed(MatchError::UnsupportedFormat(_))));
}

/// Excel同士の照合
#[test]
fn test_xlsx_inputs() {
    let dir = tempdir().unwrap();

    let demand = dir.path().join("demand.xlsx");
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "材料").unwrap();
    sheet.write_string(1, 0, "螺栓").unwrap();
    sheet.write_string(2, 0, "/").unwrap();
    sheet.write_string(3, 0, "钢板").unwrap();
    workbook.save(&demand).unwrap();

    let store = dir.path().join("store.xlsx");
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in ["摘要", "供应商/客户名称", "单据金额"].iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    sheet.write_string(1, 0, "采购钢板一批").unwrap();
    sheet.write_string(1, 1, "甲公司").unwrap();
    sheet.write_number(1, 2, 1500.0).unwrap();
    sheet.write_string(2, 0, "螺栓采购").unwrap();
    sheet.write_string(2, 1, "乙公司").unwrap();
    sheet.write_number(2, 2, 12.5).unwrap();
    workbook.save(&store).unwrap();

    let output = dir.path().join("out.csv");
    let outcome = run(&demand, &store, &output, OutputFormat::Plain);
    assert!(outcome.is_written(), "{}", outcome.message());

    let records = read_results(&output).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!((records[0].order, records[0].amount.as_str()), (1, "12.5"));
    assert_eq!((records[1].order, records[1].amount.as_str()), (3, "1500"));
}

/// 列名を設定で変更できる
#[test]
fn test_custom_column_names() {
    let dir = tempdir().unwrap();
    let demand = write(&dir, "demand.csv", "name\nbolt\n");
    let store = write(&dir, "store.csv", "memo,vendor,total\nbuy bolt,ACME,10\n");
    let output = dir.path().join("out.csv");

    let columns = ColumnNames {
        material: "name".into(),
        summary: "memo".into(),
        counterparty: "vendor".into(),
        amount: "total".into(),
    };
    let outcome = match_materials(&demand, &store, &output, OutputFormat::Plain, &columns);
    assert!(outcome.is_written());

    let records = read_results(&output).unwrap();
    assert_eq!(records[0].counterparty, "ACME");
}
