use crate::board::Board;
use crate::slides::{derive_presentation, Slide};

/// A derived deck plus the slide currently on screen.
///
/// Navigation clamps at both ends; the deck is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    slides: Vec<Slide>,
    index: usize,
}

impl Presentation {
    /// Derive a fresh deck from `board`, starting at the first slide.
    pub fn from_board(board: &Board) -> Self {
        Self {
            slides: derive_presentation(board),
            index: 0,
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Never true for a derived deck.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.index]
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.slides.len()
    }

    /// Advance one slide. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        self.go_to(self.index + 1)
    }

    /// Go back one slide. Returns whether the index changed.
    pub fn prev(&mut self) -> bool {
        match self.index.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    /// Jump to `index`, clamped to the deck.
    pub fn go_to(&mut self, index: usize) -> bool {
        let clamped = index.min(self.slides.len().saturating_sub(1));
        let changed = clamped != self.index;
        self.index = clamped;
        changed
    }

    /// One-based position such as `"2 / 5"`.
    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.slides.len())
    }
}
