use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    document::{Document, HeadingLevel, Paragraph},
    mepla::{layout::ColumnLayout, reader::split_lines, tokenizer::tokenize_line},
};

// rows collected since the last "00" line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatState {
    Idle,
    Buffering(Vec<String>),
}

// sj_mepla.dat: every line starts with a two digit tag
//   00      end of a row group
//   01      heading (level 1), "===" lines are decoration
//   02      heading (level 2)
//   03, 04  data row
#[derive(Debug)]
pub struct DatParser {
    state: DatState,
    document: Document,
}

impl DatParser {
    pub fn new() -> Self {
        Self {
            state: DatState::Idle,
            document: Document::new(),
        }
    }

    pub fn state(&self) -> &DatState {
        &self.state
    }

    pub fn push_line(&mut self, line: &str) {
        static REGEX_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"={3,}").unwrap());

        let Some((tag, rest)) = split_tag(line) else {
            tracing::trace!(line, "skipping untagged line");
            return;
        };

        match tag {
            "00" => self.flush_records(),
            "01" => {
                if REGEX_RULE.is_match(rest) {
                    return;
                }
                self.document
                    .push_heading(HeadingLevel::One, rest.trim_end_matches(':'));
            }
            "02" => {
                self.document
                    .push_heading(HeadingLevel::Two, rest.trim_end_matches(':'));
            }
            "03" | "04" => {
                if self.state == DatState::Idle {
                    self.state = DatState::Buffering(Vec::new());
                }
                if let DatState::Buffering(records) = &mut self.state {
                    records.push(rest.to_owned());
                }
            }
            tag => tracing::trace!(tag, "skipping unknown tag"),
        }
    }

    fn flush_records(&mut self) {
        let DatState::Buffering(records) = std::mem::replace(&mut self.state, DatState::Idle)
        else {
            return;
        };

        for record in &records {
            let tokenized = tokenize_line(record);
            let tab_stops = ColumnLayout::Dat.tab_stops(&tokenized.tab_stops);
            self.document
                .push_paragraph(Paragraph::columns(tokenized.words, tab_stops));
        }
    }

    // rows without a closing "00" are not written
    pub fn finish(self) -> Document {
        if let DatState::Buffering(records) = &self.state {
            tracing::debug!(count = records.len(), "dropping rows without closing tag");
        }

        self.document
    }
}

impl Default for DatParser {
    fn default() -> Self {
        Self::new()
    }
}

fn split_tag(line: &str) -> Option<(&str, &str)> {
    if line.len() < 2 || !line.is_char_boundary(2) {
        return None;
    }
    Some(line.split_at(2))
}

pub fn parse_dat(txt: &str) -> Document {
    let mut parser = DatParser::new();
    for line in split_lines(txt) {
        parser.push_line(line);
    }
    parser.finish()
}
