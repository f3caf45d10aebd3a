use std::fs;

use anyhow::Result;

use mepla_json::{
    document::{DocumentElement, Heading, HeadingLevel, Paragraph, ParagraphStyle},
    mepla::dat_parser::{parse_dat, DatParser, DatState},
};

fn assert_tab_stops(paragraph: &Paragraph, expected_mm: &[f64]) {
    let actual: Vec<f64> = paragraph.tab_stops().iter().map(|t| t.position_mm).collect();
    assert_eq!(actual.len(), expected_mm.len(), "{:?}", actual);
    for (a, e) in actual.iter().zip(expected_mm) {
        assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected_mm);
    }
}

#[test]
fn test_heading_and_row_group() {
    let document = parse_dat("01Heading One:\n03 Row  12.5\n00");

    assert_eq!(document.len(), 2);
    assert_eq!(
        document.elements[0],
        DocumentElement::Heading(Heading {
            level: HeadingLevel::One,
            text: "Heading One".to_owned(),
        })
    );

    let DocumentElement::Paragraph(paragraph) = &document.elements[1] else {
        panic!("expected a paragraph: {:?}", document.elements[1]);
    };
    assert_eq!(paragraph.words(), ["Row", "12.5"]);
    assert_eq!(paragraph.style, ParagraphStyle::NoSpacing);
    assert_eq!(paragraph.text(), "\tRow\t12.5");
    assert_tab_stops(paragraph, &[2.0 * 1.75, 7.0 * 1.75]);
}

#[test]
fn test_rule_heading_is_skipped() {
    assert!(parse_dat("01===").is_empty());
    assert!(parse_dat("01==========================").is_empty());
    assert_eq!(parse_dat("01== not a rule").headings().count(), 1);
}

#[test]
fn test_level_two_heading_strips_colons() {
    let document = parse_dat("02Section::");
    let headings: Vec<_> = document.headings().collect();

    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].level, HeadingLevel::Two);
    assert_eq!(headings[0].text, "Section");
}

#[test]
fn test_rows_are_written_on_flush_only() {
    let mut parser = DatParser::new();
    assert_eq!(parser.state(), &DatState::Idle);

    parser.push_line("03 a  1");
    parser.push_line("04 b  2");
    assert_eq!(
        parser.state(),
        &DatState::Buffering(vec![" a  1".to_owned(), " b  2".to_owned()])
    );

    parser.push_line("00");
    assert_eq!(parser.state(), &DatState::Idle);

    // a second flush without rows writes nothing
    parser.push_line("00");

    let document = parser.finish();
    let words: Vec<_> = document.paragraphs().map(|p| p.words().to_vec()).collect();
    assert_eq!(words, vec![vec!["a", "1"], vec!["b", "2"]]);
}

#[test]
fn test_rows_without_flush_are_dropped() {
    let document = parse_dat("01Title\n03 Row  1\n04 Row  2\n");

    assert_eq!(document.len(), 1);
    assert_eq!(document.paragraphs().count(), 0);
}

#[test]
fn test_unknown_tags_are_ignored() {
    let document = parse_dat("99 whatever\n0\n\nxx\n05 five  5\n00");
    assert!(document.is_empty());
}

#[test]
fn test_headings_between_rows_keep_order() {
    let document = parse_dat("03 r1  1\n02Sub\n03 r2  2\n00\n");

    // rows are written at "00", after the heading that came in between
    assert!(matches!(document.elements[0], DocumentElement::Heading(_)));
    assert_eq!(document.paragraphs().count(), 2);
}

#[test]
fn test_dat_fixture() -> Result<()> {
    let txt = fs::read_to_string("./tests/fixtures/sj_mepla.dat")?;
    let document = parse_dat(&txt);

    let headings: Vec<_> = document
        .headings()
        .map(|h| (h.level.as_number(), h.text.as_str()))
        .collect();
    assert_eq!(headings, [(1, "Geometry"), (2, "Plate"), (1, "Loads")]);

    let paragraphs: Vec<_> = document.paragraphs().collect();
    assert_eq!(paragraphs.len(), 4);

    assert_eq!(paragraphs[0].words(), ["Span", "12.5"]);
    assert_tab_stops(paragraphs[0], &[3.5, 17.5]);
    assert_eq!(paragraphs[1].words(), ["Width", "3.2"]);
    assert_eq!(paragraphs[2].words(), ["Wind load", "1.25e-3"]);
    assert_tab_stops(paragraphs[2], &[3.5, 26.25]);
    assert_eq!(paragraphs[3].words(), ["Safety Factor", "1.5"]);
    assert_tab_stops(paragraphs[3], &[3.5, 31.5]);

    Ok(())
}
