//! In-memory PDF fixtures built with lopdf.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

/// Build a PDF with one page per entry; an empty entry makes a blank page.
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = build_document(pages);
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("save fixture PDF");
    buffer
}

/// Same as [`build_pdf`] with an `/Encrypt` entry in the trailer.
pub fn build_encrypted_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = build_document(pages);
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "O" => Object::string_literal(vec![0x41u8; 32]),
        "U" => Object::string_literal(vec![0x42u8; 32]),
        "P" => -4,
    });
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(vec![0x01u8; 16]),
            Object::string_literal(vec![0x01u8; 16]),
        ],
    );

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("save fixture PDF");
    buffer
}

fn build_document(pages: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let kids: Vec<Object> = pages
        .iter()
        .map(|text| add_page(&mut doc, pages_id, resources_id, text).into())
        .collect();

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn add_page(doc: &mut Document, pages_id: ObjectId, resources_id: ObjectId, text: &str) -> ObjectId {
    let operations = if text.is_empty() {
        Vec::new()
    } else {
        vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ]
    };
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode content stream"),
    ));

    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    })
}
