//! End-to-end tests for the paysplit binary.

use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use predicates::prelude::*;

/// Build a PDF with one statement page per entry of (name, date).
fn statement_pdf(pages: &[(&str, &str)]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for (name, date) in pages {
        let lines = [
            "Account 4300".to_string(),
            name.to_string(),
            "Company: Acme Widgets".to_string(),
            format!("Cheque Date: {}", date),
            "Net Pay: $1,234.56".to_string(),
        ];

        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
        ];
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                operations.push(Operation::new("Td", vec![0.into(), (-18).into()]));
            }
            operations.push(Operation::new("Tj", vec![Object::string_literal(line.as_str())]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("save test PDF");
    buf
}

#[test]
fn split_writes_one_file_per_page() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statements.pdf");
    std::fs::write(
        &input,
        statement_pdf(&[("Jane Doe", "15/03/2024"), ("John Roe", "3-1-24")]),
    )
    .unwrap();

    let out = dir.path().join("out");
    Command::cargo_bin("paysplit")
        .unwrap()
        .arg("split")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2/2 pages"));

    assert!(out.join("Jane Doe 2024-03-15.pdf").exists());
    assert!(out.join("John Roe 2024-01-03.pdf").exists());
}

#[test]
fn split_reports_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statements.pdf");
    std::fs::write(
        &input,
        statement_pdf(&[("Jane Doe", "15/03/2024"), ("Jane Doe", "15/03/2024")]),
    )
    .unwrap();

    let out = dir.path().join("out");
    Command::cargo_bin("paysplit")
        .unwrap()
        .arg("split")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate, skipped"));
}

#[test]
fn split_rejects_unreadable_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.pdf");
    std::fs::write(&input, b"not a pdf").unwrap();

    Command::cargo_bin("paysplit")
        .unwrap()
        .arg("split")
        .arg(&input)
        .assert()
        .failure();
}

#[test]
fn split_writes_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statements.pdf");
    std::fs::write(&input, statement_pdf(&[("Jane Doe", "15/03/2024")])).unwrap();

    let out = dir.path().join("out");
    Command::cargo_bin("paysplit")
        .unwrap()
        .arg("split")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success();

    let summary = std::fs::read_to_string(out.join("summary.json")).unwrap();
    assert!(summary.contains("Jane Doe"));
    assert!(summary.contains("2024-03-15"));
}
