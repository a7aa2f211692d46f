//! Minimal inline markup for CV free text: `[label](url)` becomes a link,
//! `\n` becomes a line break, everything else passes through verbatim.

use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    LineBreak,
    Link { label: String, href: String },
}

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\[([^\]]+)\]\(([^\s)]+)\)").expect("link pattern is valid")
    })
}

/// Splits `text` into display nodes. Literal runs and link markers alternate
/// by construction, so a literal cursor and a link cursor are advanced in
/// turn until both are exhausted. Empty literal runs (a leading link, or two
/// adjacent links) produce no node.
pub fn format_links(text: &str) -> Vec<Node> {
    let pattern = link_pattern();
    let literals: Vec<&str> = pattern.split(text).collect();
    let links: Vec<(&str, &str)> = pattern
        .captures_iter(text)
        .map(|captures| {
            let label = captures.get(1).map_or("", |m| m.as_str());
            let href = captures.get(2).map_or("", |m| m.as_str());
            (label, href)
        })
        .collect();

    let mut nodes = Vec::new();
    let mut literal_index = 0;
    let mut link_index = 0;
    let mut turn = 0;

    while literal_index < literals.len() || link_index < links.len() {
        if turn % 2 == 0 {
            if literal_index < literals.len() {
                push_literal(&mut nodes, literals[literal_index]);
                literal_index += 1;
            }
        } else if link_index < links.len() {
            let (label, href) = links[link_index];
            nodes.push(Node::Link {
                label: label.to_owned(),
                href: href.to_owned(),
            });
            link_index += 1;
        }
        turn += 1;
    }

    nodes
}

fn push_literal(nodes: &mut Vec<Node>, literal: &str) {
    for (index, line) in literal.split('\n').enumerate() {
        if index > 0 {
            nodes.push(Node::LineBreak);
        }
        if !line.is_empty() {
            nodes.push(Node::Text(line.to_owned()));
        }
    }
}

/// Renders `text` straight to an HTML fragment. Text and link labels are
/// escaped; hrefs are escaped attribute values.
pub fn format_links_html(text: &str) -> String {
    format_links(text)
        .iter()
        .map(|node| match node {
            Node::Text(text) => escape(text),
            Node::LineBreak => "<br>".to_owned(),
            Node::Link { label, href } => format!(
                r#"<a href="{}" target="_blank" rel="noreferrer">{}</a>"#,
                escape(href),
                escape(label)
            ),
        })
        .collect()
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(character),
        }
    }
    escaped
}
