//! In-memory PDF builders shared by the unit tests.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

/// Build a PDF with one text page per entry; each inner slice is the page's
/// lines, rendered top to bottom in Helvetica so the text layer comes back
/// one line per slice element. An empty slice produces a page with no
/// content stream at all (no extractable text).
pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
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
    for lines in pages {
        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
        };

        if !lines.is_empty() {
            let mut operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
            ];
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    operations.push(Operation::new("Td", vec![0.into(), (-18).into()]));
                }
                operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("encode content stream"),
            ));
            page_dict.set("Contents", content_id);
        }

        let page_id = doc.add_object(page_dict);
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

/// Build a PDF with `page_count` empty US Letter pages.
pub fn blank_pdf(page_count: usize) -> Vec<u8> {
    let empty: Vec<&[&str]> = vec![&[]; page_count];
    pdf_with_pages(&empty)
}

/// Lines for a plausible statement page: a shared header, the anchor
/// marker, then the per-statement block.
pub fn statement_lines<'a>(
    name: &'a str,
    date: &'a str,
    amount: &'a str,
    company: &'a str,
) -> Vec<String> {
    vec![
        "ACME PAYROLL SERVICES".to_string(),
        "Account 4300".to_string(),
        name.to_string(),
        format!("Company: {}", company),
        format!("Cheque Date: {}", date),
        format!("Net Pay: ${}", amount),
    ]
}
