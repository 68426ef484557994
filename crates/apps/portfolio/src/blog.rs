//! Lightweight markup for blog post bodies.
//!
//! Supported per line: `# ` and `## ` headings, `---` rules, blank-line breaks, and inline
//! `**strong**` / `*emphasis*` spans inside paragraphs.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    Emphasis(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Subtitle(String),
    Rule,
    Break,
    Paragraph(Vec<Inline>),
}

pub fn parse_body(body: &str) -> Vec<Block> {
    body.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix("## ") {
        Block::Subtitle(rest.to_string())
    } else if let Some(rest) = line.strip_prefix("# ") {
        Block::Title(rest.to_string())
    } else if line == "---" {
        Block::Rule
    } else if line.trim().is_empty() {
        Block::Break
    } else {
        Block::Paragraph(parse_inline(line))
    }
}

fn parse_inline(line: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut rest = line;

    while !rest.is_empty() {
        if let Some((inner, after)) = delimited(rest, "**") {
            flush(&mut text, &mut spans);
            spans.push(Inline::Strong(inner.to_string()));
            rest = after;
        } else if let Some((inner, after)) = delimited(rest, "*") {
            flush(&mut text, &mut spans);
            spans.push(Inline::Emphasis(inner.to_string()));
            rest = after;
        } else {
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                text.push(ch);
            }
            rest = chars.as_str();
        }
    }
    flush(&mut text, &mut spans);
    spans
}

/// Matches `marker inner marker` at the start of `input` with a non-empty, marker-free inner.
fn delimited<'a>(input: &'a str, marker: &str) -> Option<(&'a str, &'a str)> {
    let after_open = input.strip_prefix(marker)?;
    let close = after_open.find('*')?;
    let inner = &after_open[..close];
    if inner.is_empty() {
        return None;
    }
    let after_close = after_open[close..].strip_prefix(marker)?;
    Some((inner, after_close))
}

fn flush(text: &mut String, spans: &mut Vec<Inline>) {
    if !text.is_empty() {
        spans.push(Inline::Text(std::mem::take(text)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_kinds_are_recognized_per_line() {
        let blocks = parse_body("# Title\n## Part\n---\n\nplain");
        assert_eq!(
            blocks,
            vec![
                Block::Title("Title".into()),
                Block::Subtitle("Part".into()),
                Block::Rule,
                Block::Break,
                Block::Paragraph(vec![Inline::Text("plain".into())]),
            ]
        );
    }

    #[test]
    fn inline_strong_and_emphasis_spans() {
        assert_eq!(
            parse_inline("a **bold** and *soft* end"),
            vec![
                Inline::Text("a ".into()),
                Inline::Strong("bold".into()),
                Inline::Text(" and ".into()),
                Inline::Emphasis("soft".into()),
                Inline::Text(" end".into()),
            ]
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(
            parse_inline("2 * 3 = 6"),
            vec![Inline::Text("2 * 3 = 6".into())]
        );
        assert_eq!(parse_inline("**"), vec![Inline::Text("**".into())]);
    }
}
