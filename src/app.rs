//! Application state and key handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use job_form::{Field, FormSession, FormValues, InputKind, SubmissionSink};
use std::cell::RefCell;
use std::rc::Rc;

/// A selectable row on the form, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Free text input
    Input(Field),
    /// Position selector
    Position,
    /// One skill checkbox
    Skill(String),
    /// Submit button
    Submit,
}

impl Row {
    /// Field path this row writes to
    pub fn path(&self) -> Option<String> {
        match self {
            Row::Input(field) => Some(field.name().to_string()),
            Row::Position => Some(Field::Position.name().to_string()),
            Row::Skill(name) => Some(format!("{}.{}", Field::AdditionalSkills.name(), name)),
            Row::Submit => None,
        }
    }
}

/// Success action for the terminal: keep the payload for the success dialog
#[derive(Debug, Clone, Default)]
pub struct PayloadSlot(Rc<RefCell<Option<String>>>);

impl PayloadSlot {
    pub fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().take();
    }
}

impl SubmissionSink for PayloadSlot {
    fn on_submit_success(&mut self, values: &FormValues) {
        let payload = match values.to_pretty_json() {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!("Failed to render submitted values: {err}");
                format!("{values:?}")
            }
        };
        *self.0.borrow_mut() = Some(payload);
    }
}

/// Main application struct
pub struct App {
    /// Form values, errors and submission flow
    pub session: FormSession<PayloadSlot>,
    /// Payload of the last clean submission, shown until dismissed
    success: PayloadSlot,
    /// Index into `rows()`
    pub active_row: usize,
    /// Status bar message
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App with a blank form over the given skills
    pub fn new(skills: Vec<String>) -> Self {
        let success = PayloadSlot::default();
        let session = FormSession::new(FormValues::with_skills(skills), success.clone());
        Self {
            session,
            success,
            active_row: 0,
            status_message: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Rows for the current position, ending with the submit button
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for field in self.session.form().visible_fields() {
            match field {
                Field::Position => rows.push(Row::Position),
                Field::AdditionalSkills => rows.extend(
                    self.session
                        .values()
                        .additional_skills
                        .names()
                        .map(|name| Row::Skill(name.to_string())),
                ),
                other => rows.push(Row::Input(other)),
            }
        }
        rows.push(Row::Submit);
        rows
    }

    pub fn active(&self) -> Row {
        let rows = self.rows();
        let index = self.active_row.min(rows.len() - 1);
        rows[index].clone()
    }

    /// Pretty JSON of the last clean submission, while its dialog is open
    pub fn success_payload(&self) -> Option<String> {
        self.success.get()
    }

    pub fn next_row(&mut self) {
        let count = self.rows().len();
        self.active_row = (self.active_row + 1) % count;
    }

    pub fn prev_row(&mut self) {
        let count = self.rows().len();
        if self.active_row == 0 {
            self.active_row = count - 1;
        } else {
            self.active_row -= 1;
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Success dialog is modal
        if self.success_payload().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.success.clear();
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => {
                self.submit();
                return Ok(());
            }
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.next_row();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.prev_row();
                return Ok(());
            }
            _ => {}
        }

        let row = self.active();
        match (row.path(), &row) {
            (Some(path), Row::Input(_)) => self.handle_input_key(&path, key)?,
            (Some(path), Row::Position) => self.handle_position_key(&path, key)?,
            (Some(path), Row::Skill(_)) => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.toggle_skill(&path)?;
                }
            }
            _ => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit();
                }
            }
        }

        Ok(())
    }

    fn handle_input_key(&mut self, path: &str, key: KeyEvent) -> Result<()> {
        let mut value = self
            .session
            .form()
            .get(path)?
            .as_text()
            .unwrap_or_default()
            .to_string();

        match key.code {
            KeyCode::Char(c) => value.push(c),
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Enter => {
                self.next_row();
                return Ok(());
            }
            _ => return Ok(()),
        }

        self.session.update(path, &value, InputKind::Text)?;
        Ok(())
    }

    fn handle_position_key(&mut self, path: &str, key: KeyEvent) -> Result<()> {
        let current = self.session.values().position;
        let next = match key.code {
            KeyCode::Left => current.prev(),
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => current.next(),
            _ => return Ok(()),
        };
        self.session.update(path, next.as_str(), InputKind::Text)?;
        Ok(())
    }

    fn toggle_skill(&mut self, path: &str) -> Result<()> {
        let checked = self
            .session
            .form()
            .get(path)?
            .as_bool()
            .unwrap_or_default();
        let raw = if checked { "false" } else { "true" };
        self.session.update(path, raw, InputKind::Checkbox)?;
        Ok(())
    }

    fn submit(&mut self) {
        if self.session.submit() {
            self.status_message = Some("Form submitted successfully!".to_string());
        } else {
            let count = self.session.errors().len();
            self.status_message = Some(format!(
                "{count} field{} need attention",
                if count == 1 { "" } else { "s" }
            ));
        }
    }
}
