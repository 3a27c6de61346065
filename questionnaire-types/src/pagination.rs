//! Grouping questions into fixed-size pages, and a bounded pager over them.

use log::debug;

use crate::Question;

/// Number of questions shown together on one page.
pub const QUESTIONS_PER_PAGE: usize = 2;

/// A group of up to [`QUESTIONS_PER_PAGE`] consecutive questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    index: usize,
    questions: Vec<Question>,
}

impl Page {
    /// Zero-based position of this page.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based page number, for display.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// One-based questionnaire-wide number of the question in `slot`.
    pub fn question_number(&self, slot: usize) -> usize {
        self.index * QUESTIONS_PER_PAGE + slot + 1
    }

    /// Questions paired with their display numbers.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Question)> {
        self.questions
            .iter()
            .enumerate()
            .map(|(slot, q)| (self.question_number(slot), q))
    }
}

/// Partition `questions` into pages, preserving order.
///
/// Zero questions yield zero pages.
pub fn paginate(questions: &[Question]) -> Vec<Page> {
    let pages: Vec<Page> = questions
        .chunks(QUESTIONS_PER_PAGE)
        .enumerate()
        .map(|(index, chunk)| Page {
            index,
            questions: chunk.to_vec(),
        })
        .collect();
    debug!(
        "Paginated {} questions into {} pages",
        questions.len(),
        pages.len()
    );
    pages
}

/// Linear position among pre-built pages.
///
/// Navigation is bounded on both ends; there is no wrap-around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pager {
    pages: Vec<Page>,
    current: usize,
}

impl Pager {
    /// Build a pager positioned on the first page.
    pub fn new(questions: &[Question]) -> Self {
        Self {
            pages: paginate(questions),
            current: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page_at(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Zero-based index of the current page (0 when there are no pages).
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.pages.len()
    }

    pub fn can_go_backward(&self) -> bool {
        self.current > 0
    }

    /// Move to the next page. Returns whether the position changed.
    pub fn go_forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move to the previous page. Returns whether the position changed.
    pub fn go_backward(&mut self) -> bool {
        if !self.can_go_backward() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to `index`. Out-of-range indices leave the position unchanged.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.pages.len() || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    pub fn go_to_last(&mut self) -> bool {
        match self.pages.len() {
            0 => false,
            len => self.go_to(len - 1),
        }
    }

    /// Screen title, e.g. `"Questionnaire (2/3)"`.
    pub fn title(&self) -> String {
        if self.pages.is_empty() {
            "Questionnaire".to_string()
        } else {
            format!("Questionnaire ({}/{})", self.current + 1, self.pages.len())
        }
    }
}
