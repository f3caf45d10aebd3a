use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub elements: Vec<DocumentElement>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: DocumentElement) {
        self.elements.push(element);
    }

    pub fn push_heading(&mut self, level: HeadingLevel, text: &str) {
        self.push(DocumentElement::Heading(Heading {
            level,
            text: text.to_owned(),
        }));
    }

    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.push(DocumentElement::Paragraph(paragraph));
    }

    pub fn headings(&self) -> impl Iterator<Item = &Heading> {
        self.elements.iter().filter_map(|e| match e {
            DocumentElement::Heading(heading) => Some(heading),
            _ => None,
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.elements.iter().filter_map(|e| match e {
            DocumentElement::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "content")]
pub enum DocumentElement {
    Heading(Heading),
    Paragraph(Paragraph),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingLevel {
    One,
    Two,
}

impl HeadingLevel {
    pub fn as_number(&self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParagraphStyle {
    Normal,
    NoSpacing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabAlignment {
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabStop {
    pub position_mm: f64,
    pub alignment: TabAlignment,
}

// in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    pub before: f64,
    pub after: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum ParagraphContent {
    Empty,
    Text {
        value: String,
    },
    // words.len() == tab_stops.len()
    Columns {
        words: Vec<String>,
        tab_stops: Vec<TabStop>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub content: ParagraphContent,
    pub style: ParagraphStyle,
    pub spacing: Option<Spacing>,
}

impl Paragraph {
    pub fn blank() -> Self {
        Self {
            content: ParagraphContent::Empty,
            style: ParagraphStyle::Normal,
            spacing: Some(Spacing {
                before: 0.0,
                after: 0.0,
            }),
        }
    }

    pub fn sub_heading(text: &str) -> Self {
        Self {
            content: ParagraphContent::Text {
                value: text.to_owned(),
            },
            style: ParagraphStyle::Normal,
            spacing: Some(Spacing {
                before: 12.0,
                after: 0.0,
            }),
        }
    }

    pub fn columns(words: Vec<String>, tab_stops: Vec<TabStop>) -> Self {
        debug_assert_eq!(words.len(), tab_stops.len());

        Self {
            content: ParagraphContent::Columns { words, tab_stops },
            style: ParagraphStyle::NoSpacing,
            spacing: None,
        }
    }

    pub fn words(&self) -> &[String] {
        match &self.content {
            ParagraphContent::Columns { words, .. } => words,
            _ => &[],
        }
    }

    pub fn tab_stops(&self) -> &[TabStop] {
        match &self.content {
            ParagraphContent::Columns { tab_stops, .. } => tab_stops,
            _ => &[],
        }
    }

    // column text starts with a tab so that the first word sits on the first stop
    pub fn text(&self) -> String {
        match &self.content {
            ParagraphContent::Empty => String::new(),
            ParagraphContent::Text { value } => value.clone(),
            ParagraphContent::Columns { words, .. } => format!("\t{}", words.join("\t")),
        }
    }
}
