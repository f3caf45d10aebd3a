use crate::{
    document::{Document, HeadingLevel, Paragraph},
    mepla::{layout::ColumnLayout, reader::split_lines, tokenizer::tokenize_line},
};

const HORIZONTAL_RULE: char = '─';
const BULLET: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepState {
    Normal,
    InHeadingBlock, // after the first rule of a pair, until a bullet line
}

// sj_mepla.rep
//
// ───────────
// •Title         <- heading (level 1)
// ───────────
// •Sub title     <- sub heading paragraph
// Span   12.5    <- data
#[derive(Debug)]
pub struct RepParser {
    state: RepState,
    rule_count: usize,
    document: Document,
}

impl RepParser {
    pub fn new() -> Self {
        Self {
            state: RepState::Normal,
            rule_count: 0,
            document: Document::new(),
        }
    }

    pub fn state(&self) -> RepState {
        self.state
    }

    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    pub fn push_line(&mut self, line: &str) {
        if line.is_empty() {
            self.document.push_paragraph(Paragraph::blank());
            return;
        }

        if line.starts_with(HORIZONTAL_RULE) {
            self.rule_count += 1;
            if self.rule_count == 1 {
                self.state = RepState::InHeadingBlock;
            } else {
                self.state = RepState::Normal;
                self.rule_count = 0;
            }
            return;
        }

        if let Some(rest) = line.strip_prefix(BULLET) {
            // the rule counter is left alone so that the closing rule still pairs up
            match self.state {
                RepState::InHeadingBlock => {
                    self.document.push_heading(HeadingLevel::One, rest);
                    self.state = RepState::Normal;
                }
                RepState::Normal => {
                    self.document.push_paragraph(Paragraph::sub_heading(rest));
                }
            }
            return;
        }

        let tokenized = tokenize_line(line);
        let tab_stops = ColumnLayout::Rep.tab_stops(&tokenized.tab_stops);
        self.document
            .push_paragraph(Paragraph::columns(tokenized.words, tab_stops));
    }

    pub fn finish(self) -> Document {
        if self.state == RepState::InHeadingBlock {
            tracing::debug!("report ends inside a heading block");
        }

        self.document
    }
}

impl Default for RepParser {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_rep(txt: &str) -> Document {
    let mut parser = RepParser::new();
    for line in split_lines(txt) {
        parser.push_line(line);
    }
    parser.finish()
}
