//! Integration tests for export crate

use scribe_export::{build_export, Delivery, DirectoryDelivery, ExportFormat};

#[test]
fn test_export_surface_triggers() {
    // The two buttons resolve to these tags
    let pdf: ExportFormat = "pdf".parse().unwrap();
    let word: ExportFormat = "word-document".parse().unwrap();

    let raw = "<p>Quarterly <strong>report</strong></p>";
    let pdf_export = build_export(raw, pdf);
    let word_export = build_export(raw, word);

    assert!(pdf_export.filename.ends_with(".pdf"));
    assert!(word_export.filename.ends_with(".docx"));
    assert_eq!(pdf_export.bytes, word_export.bytes);
}

#[test]
fn test_both_formats_land_side_by_side() {
    let dir = tempfile::tempdir().unwrap();
    let delivery = DirectoryDelivery::new(dir.path());

    for format in ExportFormat::ALL {
        delivery.deliver(&build_export("<p>x</p>", format)).unwrap();
    }

    assert!(dir.path().join("document.pdf").exists());
    assert!(dir.path().join("document.docx").exists());
}
