use crate::locale::Locale;
use crate::logger;
use crate::models::{AppState, FlashcardRecord, OptionOutcome, QuizSession};
use crossterm::event::{KeyCode, KeyEvent};
use rand::seq::SliceRandom;

impl QuizSession {
    /// Draws one card uniformly at random. The draw happens exactly once,
    /// here; redrawing the UI never re-rolls the card. Returns `None` only
    /// for an empty bank, which load-time validation already rejects.
    pub fn new_random(bank: &[FlashcardRecord]) -> Option<QuizSession> {
        let card = bank.choose(&mut rand::thread_rng())?.clone();
        logger::log(&format!("Drew card {} ({})", card.id, card.category));
        Some(QuizSession::with_card(card))
    }

    pub fn with_card(card: FlashcardRecord) -> QuizSession {
        QuizSession {
            card,
            selected: None,
            revealed: false,
            show_translation: false,
        }
    }

    /// Selects an option. Overwrites any previous selection; locked once the
    /// answer has been revealed.
    pub fn select(&mut self, index: usize) {
        if !self.revealed && index < self.card.options_nl.len() {
            self.selected = Some(index);
        }
    }

    pub fn select_next(&mut self) {
        let last = self.card.options_nl.len().saturating_sub(1);
        let next = match self.selected {
            Some(current) => (current + 1).min(last),
            None => 0,
        };
        self.select(next);
    }

    pub fn select_prev(&mut self) {
        let last = self.card.options_nl.len().saturating_sub(1);
        let prev = match self.selected {
            Some(current) => current.saturating_sub(1),
            None => last,
        };
        self.select(prev);
    }

    /// Reveals the answer. No-op without a selection.
    pub fn confirm(&mut self) {
        if self.selected.is_some() && !self.revealed {
            self.revealed = true;
            logger::log(&format!(
                "Card {} revealed, selected {:?}, correct: {}",
                self.card.id,
                self.selected,
                self.is_selection_correct()
            ));
        }
    }

    pub fn toggle_translation(&mut self) {
        self.show_translation = !self.show_translation;
    }

    /// Correctness is matched on option text against `answer_nl`, not on a
    /// stored answer index.
    pub fn is_selection_correct(&self) -> bool {
        match self.selected {
            Some(index) => self.card.options_nl[index] == self.card.answer_nl,
            None => false,
        }
    }

    /// Styling for option `index` in the rendered list. Everything is neutral
    /// until the answer is revealed; then the correct text is always positive
    /// and a wrong selection is negative.
    pub fn option_outcome(&self, index: usize) -> OptionOutcome {
        if !self.revealed {
            return OptionOutcome::Neutral;
        }
        if self.card.options_nl[index] == self.card.answer_nl {
            OptionOutcome::Correct
        } else if self.selected == Some(index) {
            OptionOutcome::Incorrect
        } else {
            OptionOutcome::Neutral
        }
    }

    /// Localized feedback line, present only once revealed.
    pub fn feedback_message(&self, locale: Locale) -> Option<String> {
        if !self.revealed {
            return None;
        }
        if self.is_selection_correct() {
            Some(locale.msg_correct().to_string())
        } else {
            Some(format!(
                "{}{}",
                locale.msg_answer_prefix(),
                self.card.answer_nl
            ))
        }
    }

    /// Translated twin of the feedback line, applying the same text-equality
    /// rule to the resolved option/answer pair. Present only while the
    /// translation overlay is on.
    pub fn translation_feedback(&self, locale: Locale) -> Option<String> {
        if !self.revealed || !self.show_translation {
            return None;
        }
        let index = self.selected?;
        let options = self.card.translated_options(locale);
        let answer = self.card.translated_answer(locale);
        if options[index] == answer {
            Some(locale.msg_translation_correct().to_string())
        } else {
            Some(format!("{}{}", locale.msg_translation_prefix(), answer))
        }
    }
}

pub fn handle_quiz_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
    bank: &[FlashcardRecord],
) {
    if !session.revealed {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuitConfirm;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                session.select_next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                session.select_prev();
            }
            KeyCode::Char(c @ '1'..='9') => {
                // '1' maps to the first option
                let index = (c as usize) - ('1' as usize);
                session.select(index);
            }
            KeyCode::Enter => {
                session.confirm();
            }
            KeyCode::Char('t') => {
                session.toggle_translation();
            }
            KeyCode::Char('n') => {
                if let Some(next) = QuizSession::new_random(bank) {
                    *session = next;
                }
            }
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuitConfirm;
            }
            KeyCode::Char('t') => {
                session.toggle_translation();
            }
            KeyCode::Enter | KeyCode::Char('n') => {
                if let Some(next) = QuizSession::new_random(bank) {
                    *session = next;
                }
            }
            _ => {}
        }
    }
}
