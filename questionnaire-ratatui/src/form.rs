//! Respondent intake form.
//!
//! Displays every field at once. Validation runs on submit; a failure opens a
//! blocking alert naming the problem and the form stays open.

use std::collections::HashMap;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use questionnaire::{
    FocusState, FormField, Gender, IntakeBackend, IntakeOutcome, RespondentForm,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::terminal::{RatatuiError, with_terminal};
use crate::theme::Theme;

/// Ratatui intake backend that shows the respondent form.
#[derive(Debug, Clone)]
pub struct RatatuiIntakeBackend {
    /// Title shown at the top of the form.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiIntakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiIntakeBackend {
    pub fn new() -> Self {
        Self {
            title: "Respondent Information".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the form.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Focusable controls, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Text(FormField),
    Gender,
    Submit,
}

const CONTROLS: [Control; 6] = [
    Control::Text(FormField::Name),
    Control::Text(FormField::Age),
    Control::Gender,
    Control::Text(FormField::Phone),
    Control::Text(FormField::Location),
    Control::Submit,
];

/// State for the intake screen.
struct IntakeState {
    form: RespondentForm,
    control: Control,
    /// Text field being edited; `none` while gender or submit is focused.
    focus: FocusState,
    /// Cursor per text field, in chars.
    cursors: HashMap<FormField, usize>,
    alert: Option<String>,
    outcome: Option<IntakeOutcome>,
    title: String,
    theme: Theme,
}

impl IntakeState {
    fn new(form: RespondentForm, title: String, theme: Theme) -> Self {
        let cursors = FormField::ALL
            .iter()
            .map(|&field| (field, form.value(field).chars().count()))
            .collect();
        Self {
            form,
            control: Control::Text(FormField::Name),
            focus: FocusState::on(FormField::Name),
            cursors,
            alert: None,
            outcome: None,
            title,
            theme,
        }
    }

    fn focus_control(&mut self, control: Control) {
        self.control = control;
        self.focus = match control {
            Control::Text(field) => FocusState::on(field),
            Control::Gender | Control::Submit => FocusState::none(),
        };
    }

    fn control_position(&self) -> usize {
        CONTROLS
            .iter()
            .position(|&c| c == self.control)
            .unwrap_or(0)
    }

    fn next_control(&mut self) {
        let pos = self.control_position();
        if let Some(&next) = CONTROLS.get(pos + 1) {
            self.focus_control(next);
        }
    }

    fn prev_control(&mut self) {
        let pos = self.control_position();
        if pos > 0 {
            self.focus_control(CONTROLS[pos - 1]);
        }
    }

    /// Return key: text fields chain to the next text field, then to submit.
    fn on_return(&mut self) {
        match self.control {
            Control::Text(_) => {
                let next = self.focus.on_return();
                match next.focused() {
                    Some(field) => self.focus_control(Control::Text(field)),
                    None => self.focus_control(Control::Submit),
                }
            }
            Control::Gender => self.next_control(),
            Control::Submit => self.submit(),
        }
    }

    fn submit(&mut self) {
        match self.form.validate() {
            Ok(info) => {
                debug!("Intake form submitted");
                self.outcome = Some(IntakeOutcome::Submitted(info));
            }
            Err(err) => {
                warn!("Intake form rejected: {}", err);
                self.alert = Some(err.message);
            }
        }
    }

    fn cancel(&mut self) {
        self.outcome = Some(IntakeOutcome::Cancelled);
    }

    fn cursor(&self, field: FormField) -> usize {
        self.cursors.get(&field).copied().unwrap_or(0)
    }

    fn set_cursor(&mut self, field: FormField, pos: usize) {
        self.cursors.insert(field, pos);
    }

    fn handle_text_input(&mut self, c: char) {
        let Some(field) = self.focus.focused() else {
            return;
        };
        // Age takes digits only, like a number pad.
        if field == FormField::Age && !c.is_ascii_digit() {
            return;
        }
        let pos = self.cursor(field);
        let value = self.form.value_mut(field);
        let at = byte_index(value, pos);
        value.insert(at, c);
        self.set_cursor(field, pos + 1);
    }

    fn handle_backspace(&mut self) {
        let Some(field) = self.focus.focused() else {
            return;
        };
        let pos = self.cursor(field);
        if pos == 0 {
            return;
        }
        let value = self.form.value_mut(field);
        let at = byte_index(value, pos - 1);
        value.remove(at);
        self.set_cursor(field, pos - 1);
    }

    fn handle_delete(&mut self) {
        let Some(field) = self.focus.focused() else {
            return;
        };
        let pos = self.cursor(field);
        let value = self.form.value_mut(field);
        if pos < value.chars().count() {
            let at = byte_index(value, pos);
            value.remove(at);
        }
    }

    fn cursor_left(&mut self) {
        if let Some(field) = self.focus.focused() {
            let pos = self.cursor(field);
            self.set_cursor(field, pos.saturating_sub(1));
        }
    }

    fn cursor_right(&mut self) {
        if let Some(field) = self.focus.focused() {
            let len = self.form.value(field).chars().count();
            let pos = self.cursor(field);
            self.set_cursor(field, (pos + 1).min(len));
        }
    }

    fn cursor_home(&mut self) {
        if let Some(field) = self.focus.focused() {
            self.set_cursor(field, 0);
        }
    }

    fn cursor_end(&mut self) {
        if let Some(field) = self.focus.focused() {
            let len = self.form.value(field).chars().count();
            self.set_cursor(field, len);
        }
    }

    fn gender_left(&mut self) {
        let index = self.form.gender().index();
        if index > 0 {
            self.form.select_gender_index(index - 1);
        }
    }

    fn gender_right(&mut self) {
        let index = self.form.gender().index();
        self.form.select_gender_index(index + 1);
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // The alert blocks everything until dismissed.
        if self.alert.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert = None;
            }
            return;
        }

        match code {
            KeyCode::Esc => self.cancel(),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.cancel(),
            KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::F(10) => self.submit(),
            KeyCode::Enter => self.on_return(),
            KeyCode::BackTab | KeyCode::Up => self.prev_control(),
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => self.prev_control(),
            KeyCode::Tab | KeyCode::Down => self.next_control(),
            KeyCode::Left => match self.control {
                Control::Gender => self.gender_left(),
                _ => self.cursor_left(),
            },
            KeyCode::Right => match self.control {
                Control::Gender => self.gender_right(),
                _ => self.cursor_right(),
            },
            KeyCode::Home => self.cursor_home(),
            KeyCode::End => self.cursor_end(),
            KeyCode::Backspace => self.handle_backspace(),
            KeyCode::Delete => self.handle_delete(),
            KeyCode::Char(c) => match self.control {
                Control::Text(_) => self.handle_text_input(c),
                // 1-3 pick a gender option directly.
                Control::Gender => {
                    if let Some(digit) = c.to_digit(10) {
                        if digit > 0 {
                            self.form.select_gender_index(digit as usize - 1);
                        }
                    }
                }
                Control::Submit => {
                    if c == ' ' {
                        self.submit();
                    }
                }
            },
            _ => {}
        }
    }
}

fn byte_index(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

fn draw_form(frame: &mut Frame, state: &IntakeState) {
    let area = frame.area();
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Fields
            Constraint::Length(3), // Submit button
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let title = Paragraph::new(state.title.clone())
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(title, chunks[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 5])
        .split(chunks[1]);

    for (row, control) in rows.iter().zip(CONTROLS.iter()) {
        match control {
            Control::Text(field) => draw_text_field(frame, state, *field, *row),
            Control::Gender => draw_gender(frame, state, *row),
            Control::Submit => {}
        }
    }

    let submit_focused = state.control == Control::Submit;
    let submit_style = if submit_focused {
        Style::default()
            .fg(theme.text)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    };
    let submit_text = if submit_focused {
        "  [ Start Recording ]  "
    } else {
        "    Start Recording    "
    };
    let submit_button = Paragraph::new(submit_text)
        .style(submit_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if submit_focused {
                    theme.primary
                } else {
                    theme.border
                })),
        );
    frame.render_widget(submit_button, chunks[2]);

    let help_text = "Tab: Next  Enter: Next field / Submit  ←/→: Gender  Ctrl+S: Submit  Esc: Cancel";
    let help = Paragraph::new(help_text).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[3]);

    if let Some(message) = &state.alert {
        draw_alert(frame, message, theme);
    }
}

fn draw_text_field(frame: &mut Frame, state: &IntakeState, field: FormField, area: Rect) {
    let theme = &state.theme;
    let is_focused = state.focus.is_focused(field);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            theme.primary
        } else {
            theme.border
        }))
        .title(format!(" {} ", field.label()))
        .title_style(Style::default().fg(if is_focused {
            theme.highlight
        } else {
            theme.text
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = state.form.value(field);
    let text = if value.is_empty() {
        Paragraph::new(field.placeholder()).style(Style::default().fg(theme.muted))
    } else {
        Paragraph::new(value.to_string()).style(Style::default().fg(theme.text))
    };
    frame.render_widget(text, inner);

    if is_focused && state.alert.is_none() {
        let cursor_x = inner.x.saturating_add(cursor_column(value, state.cursor(field)));
        if cursor_x < inner.x + inner.width {
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }
}

/// Display column of the char cursor; wide glyphs take two cells.
fn cursor_column(value: &str, cursor: usize) -> u16 {
    let end = byte_index(value, cursor);
    let width = Span::raw(&value[..end]).width();
    u16::try_from(width).unwrap_or(u16::MAX)
}

fn draw_gender(frame: &mut Frame, state: &IntakeState, area: Rect) {
    let theme = &state.theme;
    let is_focused = state.control == Control::Gender;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            theme.primary
        } else {
            theme.border
        }))
        .title(" Gender * ")
        .title_style(Style::default().fg(if is_focused {
            theme.highlight
        } else {
            theme.text
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let selected = state.form.gender();
    let mut spans = Vec::with_capacity(Gender::ALL.len() * 2);
    for gender in Gender::ALL {
        let style = if gender == selected && is_focused {
            Style::default()
                .fg(theme.text)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else if gender == selected {
            Style::default().fg(theme.highlight)
        } else {
            Style::default().fg(theme.text)
        };
        let marker = if gender == selected { "(●)" } else { "( )" };
        spans.push(Span::styled(format!("{} {}", marker, gender.label()), style));
        spans.push(Span::raw("   "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_alert(frame: &mut Frame, message: &str, theme: &Theme) {
    let area = centered(frame.area(), 44, 7);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error))
        .title(" Alert ")
        .title_style(Style::default().fg(theme.error).add_modifier(Modifier::BOLD));
    let body = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(body, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl IntakeBackend for RatatuiIntakeBackend {
    type Error = RatatuiError;

    fn collect(&self, form: RespondentForm) -> Result<IntakeOutcome, Self::Error> {
        let mut state = IntakeState::new(form, self.title.clone(), self.theme.clone());

        with_terminal(|terminal| {
            loop {
                terminal.draw(|frame| draw_form(frame, &state))?;

                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    state.handle_key(key.code, key.modifiers);
                }

                if let Some(outcome) = state.outcome.take() {
                    return Ok(outcome);
                }
            }
        })
    }
}
