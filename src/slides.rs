//! Derivation of a slide deck from the board.
//!
//! [`derive_presentation`] is a pure function of the board: every
//! Explanation node opens a topic, and the Definition, Question and Link
//! nodes it points at are gathered into one slide per kind. The deck is
//! framed by an introduction and a fixed summary.

use crate::board::{Board, Node, NodeKind};
use serde::{Deserialize, Serialize};

/// Number of characters of an explanation used in its topic title.
pub const TOPIC_TITLE_CHARS: usize = 30;

const TOPIC_PREFIX: &str = "Topic: ";
const INTRODUCTION_TITLE: &str = "Introduction";
const INTRODUCTION_PLACEHOLDER: &str = "Untitled";
const SUMMARY_TITLE: &str = "Summary";
const SUMMARY_BODY: &str = "This presentation was generated from your ChainBoard.";

/// A title/body pair in the derived deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub body: String,
}

impl Slide {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Grouped slide for one kind of child node.
struct Group {
    kind: NodeKind,
    title: &'static str,
    bullet: &'static str,
}

const GROUPS: [Group; 3] = [
    Group {
        kind: NodeKind::Definition,
        title: "Definitions",
        bullet: "📘",
    },
    Group {
        kind: NodeKind::Question,
        title: "Questions",
        bullet: "❓",
    },
    Group {
        kind: NodeKind::Link,
        title: "Links",
        bullet: "🔗",
    },
];

/// Build the slide deck for `board`.
///
/// Always yields at least the introduction and summary slides.
pub fn derive_presentation(board: &Board) -> Vec<Slide> {
    let mut slides = vec![introduction(board)];

    for topic in board.nodes().filter(|n| n.kind == NodeKind::Explanation) {
        slides.push(topic_slide(topic));

        let children: Vec<&Node> = board.children_of(topic.id).collect();
        for group in &GROUPS {
            let body = children
                .iter()
                .filter(|child| child.kind == group.kind)
                .map(|child| format!("{} {}", group.bullet, child.text))
                .collect::<Vec<_>>()
                .join("\n\n");
            if !body.is_empty() {
                slides.push(Slide::new(group.title, body));
            }
        }
    }

    slides.push(Slide::new(SUMMARY_TITLE, SUMMARY_BODY));
    tracing::debug!(slides = slides.len(), "presentation derived");
    slides
}

fn introduction(board: &Board) -> Slide {
    let body = board
        .first_of_kind(NodeKind::Definition)
        .map(|n| n.text.as_str())
        .filter(|text| !text.is_empty())
        .unwrap_or(INTRODUCTION_PLACEHOLDER);
    Slide::new(INTRODUCTION_TITLE, body)
}

fn topic_slide(topic: &Node) -> Slide {
    let head: String = topic.text.chars().take(TOPIC_TITLE_CHARS).collect();
    Slide::new(format!("{TOPIC_PREFIX}{head}"), topic.display_text())
}
