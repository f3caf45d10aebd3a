use crate::mepla::number::is_number;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizedLine {
    pub tab_stops: Vec<usize>, // 1-based, in characters
    pub words: Vec<String>,
}

impl TokenizedLine {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == '_'
}

// Columns are separated by runs of two or more spaces/underscores.
// A single separator stays inside the word ("Safety Factor"), unless the
// word so far is a number, which ends at the first separator ("12.5 Factor").
pub fn tokenize_line(line: &str) -> TokenizedLine {
    let chars: Vec<char> = line.chars().collect();

    let mut words = Vec::new();

    let mut buffer = String::new();
    let mut padding = 0;
    let mut last_separator = ' ';

    for &c in &chars {
        if is_separator(c) {
            padding += 1;
            last_separator = c;

            if buffer.is_empty() {
                continue;
            }

            if padding == 1 && is_number(&buffer) {
                flush_word(&mut buffer, &mut words);
                padding = 0;
            } else if padding == 2 {
                flush_word(&mut buffer, &mut words);
            }
        } else {
            if padding == 1 && !buffer.is_empty() && !is_number(&buffer) {
                buffer.push(last_separator);
            }
            buffer.push(c);
            padding = 0;
        }
    }

    flush_word(&mut buffer, &mut words);

    // Each word is looked up again in the line, from just past the previous
    // match. A word that also occurs earlier inside its own gap can be matched
    // there instead of at the place it was read from.
    let mut start = 0;
    let (tab_stops, words) = words
        .into_iter()
        .filter_map(|word| {
            let needle: Vec<char> = word.chars().collect();
            let position = find_chars(&chars, &needle, start)?;
            start = position + needle.len() + 1;
            Some((position + 1, word))
        })
        .unzip();

    TokenizedLine { tab_stops, words }
}

fn flush_word(buffer: &mut String, words: &mut Vec<String>) {
    let word = buffer.trim_end_matches(|c: char| is_separator(c) || c.is_whitespace());
    if !word.is_empty() {
        words.push(word.to_owned());
    }
    buffer.clear();
}

fn find_chars(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || haystack.len() < from {
        return None;
    }

    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|p| p + from)
}
