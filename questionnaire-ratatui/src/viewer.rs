//! Question pager screen.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::debug;
use questionnaire::{AnswerSheet, Page, Pager, Question, Questionnaire, QuestionnaireViewer};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::terminal::{RatatuiError, with_terminal};
use crate::theme::Theme;

/// Ratatui viewer that pages through a questionnaire.
#[derive(Debug, Clone, Default)]
pub struct RatatuiViewer {
    theme: Theme,
}

impl RatatuiViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

struct ViewerState<'a> {
    questionnaire: &'a Questionnaire,
    pager: &'a mut Pager,
    answers: Option<&'a AnswerSheet>,
    /// Vertical scroll within the current page.
    scroll: u16,
    closed: bool,
    theme: &'a Theme,
}

impl ViewerState<'_> {
    fn forward(&mut self) {
        if self.pager.go_forward() {
            self.scroll = 0;
            debug!("Pager moved to {}", self.pager.title());
        }
    }

    fn backward(&mut self) {
        if self.pager.go_backward() {
            self.scroll = 0;
            debug!("Pager moved to {}", self.pager.title());
        }
    }

    fn first(&mut self) {
        if self.pager.go_to(0) {
            self.scroll = 0;
        }
    }

    fn last(&mut self) {
        if self.pager.go_to_last() {
            self.scroll = 0;
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.closed = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.closed = true,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown | KeyCode::Char(' ') => {
                self.forward()
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => self.backward(),
            KeyCode::Home => self.first(),
            KeyCode::End => self.last(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }
}

fn draw_viewer(frame: &mut Frame, state: &ViewerState<'_>) {
    let area = frame.area();
    let theme = state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Page
            Constraint::Length(1), // Page dots
            Constraint::Length(1), // Help
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(state.pager.title()).style(Style::default().fg(theme.primary).bold()),
        Line::from(format!(
            "{} · {}",
            state.questionnaire.title, state.questionnaire.description
        ))
        .style(Style::default().fg(theme.muted)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(header, chunks[0]);

    match state.pager.current_page() {
        Some(page) => draw_page(frame, state, page, chunks[1]),
        None => {
            let empty = Paragraph::new("No questions")
                .style(Style::default().fg(theme.muted))
                .alignment(Alignment::Center);
            frame.render_widget(empty, chunks[1]);
        }
    }

    frame.render_widget(page_dots(&*state.pager, theme), chunks[2]);

    let help = Paragraph::new("←/→: Page  ↑/↓: Scroll  Home/End: First/Last  q: Close")
        .style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[3]);
}

fn draw_page(frame: &mut Frame, state: &ViewerState<'_>, page: &Page, area: Rect) {
    // A lone question on the last page keeps half the height, like a full page.
    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    for ((number, question), card) in page.numbered().zip(cards.iter()) {
        let answer = state.answers.and_then(|a| a.get(question.id()));
        draw_question_card(frame, state, number, question, answer, *card);
    }
}

fn draw_question_card(
    frame: &mut Frame,
    state: &ViewerState<'_>,
    number: usize,
    question: &Question,
    answer: Option<&str>,
    area: Rect,
) {
    let theme = state.theme;

    let mut lines = vec![
        Line::from(question.text().to_string())
            .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("Type: {}", question.kind())).style(Style::default().fg(theme.muted)),
    ];
    if let Some(follow_up) = question.follow_up() {
        lines.push(Line::from(""));
        lines.push(
            Line::from(format!("Follow-up: {follow_up}"))
                .style(Style::default().fg(theme.follow_up)),
        );
    }
    if state.answers.is_some() {
        lines.push(Line::from(""));
        lines.push(match answer {
            Some(answer) => Line::from(vec![
                Span::styled("Answer: ", Style::default().fg(theme.success).bold()),
                Span::styled(answer.to_string(), Style::default().fg(theme.text)),
            ]),
            None => Line::from("Answer: (not extracted)").style(Style::default().fg(theme.muted)),
        });
    }

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((state.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" Question {number} "))
                .title_style(Style::default().fg(theme.primary).bold()),
        );
    frame.render_widget(card, area);
}

fn page_dots(pager: &Pager, theme: &Theme) -> Paragraph<'static> {
    let spans: Vec<Span<'static>> = (0..pager.page_count())
        .map(|index| {
            if index == pager.current_index() {
                Span::styled("● ", Style::default().fg(theme.primary))
            } else {
                Span::styled("○ ", Style::default().fg(theme.muted))
            }
        })
        .collect();
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

impl QuestionnaireViewer for RatatuiViewer {
    type Error = RatatuiError;

    fn present(
        &self,
        questionnaire: &Questionnaire,
        pager: &mut Pager,
        answers: Option<&AnswerSheet>,
    ) -> Result<(), Self::Error> {
        let mut state = ViewerState {
            questionnaire,
            pager,
            answers,
            scroll: 0,
            closed: false,
            theme: &self.theme,
        };

        with_terminal(|terminal| {
            while !state.closed {
                terminal.draw(|frame| draw_viewer(frame, &state))?;

                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        state.handle_key(key.code, key.modifiers);
                    }
                }
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn sample(n: i64) -> Questionnaire {
        let questions = (1..=n)
            .map(|id| {
                let q = Question::new(id, format!("Prompt number {id}"), "open");
                if id == 5 {
                    q.with_follow_up("Tell me more")
                } else {
                    q
                }
            })
            .collect();
        Questionnaire::new("Health", "Baseline", questions)
    }

    fn press(state: &mut ViewerState<'_>, code: KeyCode) {
        state.handle_key(code, KeyModifiers::NONE);
    }

    fn render(state: &ViewerState<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw_viewer(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn keys_move_within_bounds() {
        let q = sample(5);
        let mut pager = Pager::new(q.questions());
        let theme = Theme::default();
        let mut state = ViewerState {
            questionnaire: &q,
            pager: &mut pager,
            answers: None,
            scroll: 0,
            closed: false,
            theme: &theme,
        };

        press(&mut state, KeyCode::Left);
        assert_eq!(state.pager.current_index(), 0);

        press(&mut state, KeyCode::Down);
        assert_eq!(state.scroll, 1);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.scroll, 0);
        press(&mut state, KeyCode::End);
        assert_eq!(state.pager.current_index(), 2);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.pager.current_index(), 2);
        press(&mut state, KeyCode::Home);
        assert_eq!(state.pager.current_index(), 0);

        press(&mut state, KeyCode::Char('q'));
        assert!(state.closed);
    }

    #[test]
    fn ctrl_c_closes_but_plain_c_does_not() {
        let q = sample(3);
        let mut pager = Pager::new(q.questions());
        let theme = Theme::default();
        let mut state = ViewerState {
            questionnaire: &q,
            pager: &mut pager,
            answers: None,
            scroll: 0,
            closed: false,
            theme: &theme,
        };

        press(&mut state, KeyCode::Char('c'));
        assert!(!state.closed);
        state.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(state.closed);
    }

    #[test]
    fn last_page_shows_question_five() {
        let q = sample(5);
        let mut pager = Pager::new(q.questions());
        pager.go_to_last();
        let theme = Theme::default();
        let state = ViewerState {
            questionnaire: &q,
            pager: &mut pager,
            answers: None,
            scroll: 0,
            closed: false,
            theme: &theme,
        };

        let text = render(&state);
        assert!(text.contains("Questionnaire (3/3)"));
        assert!(text.contains("Question 5"));
        assert!(text.contains("Prompt number 5"));
        assert!(text.contains("Follow-up: Tell me more"));
        assert!(!text.contains("Question 4"));
        assert!(!text.contains("Answer:"));
    }

    #[test]
    fn answers_render_beside_questions() {
        let q = sample(2);
        let mut pager = Pager::new(q.questions());
        let answers = AnswerSheet::from_matched(&[questionnaire::MatchedQuestion {
            matched_question_id: 1,
            matched_question: "Prompt number 1".to_string(),
            extracted_answer: "Yes".to_string(),
            confidence: "high".to_string(),
            clarification_needed: false,
        }]);
        let theme = Theme::default();
        let state = ViewerState {
            questionnaire: &q,
            pager: &mut pager,
            answers: Some(&answers),
            scroll: 0,
            closed: false,
            theme: &theme,
        };

        let text = render(&state);
        assert!(text.contains("Answer: Yes"));
        assert!(text.contains("Answer: (not extracted)"));
    }

    #[test]
    fn empty_questionnaire_renders_placeholder() {
        let q = sample(0);
        let mut pager = Pager::new(q.questions());
        let theme = Theme::default();
        let state = ViewerState {
            questionnaire: &q,
            pager: &mut pager,
            answers: None,
            scroll: 0,
            closed: false,
            theme: &theme,
        };

        let text = render(&state);
        assert!(text.contains("No questions"));
        assert!(text.contains("Questionnaire"));
    }
}
