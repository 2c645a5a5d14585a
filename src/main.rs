use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use open_knm::{
    AppState, BankError, DEFAULT_LOCALE, Locale, QuizSession, bank, draw_menu,
    draw_quit_confirmation, draw_quiz, handle_quiz_input, logger,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "open-knm")]
#[command(version, about = "Flashcard trainer for the Dutch Inburgering (KNM) exam")]
struct Args {
    /// UI language tag, "en" or "zh"; anything else falls back to zh
    #[arg(short, long)]
    locale: Option<String>,
    /// Question bank JSON file overriding the embedded bank
    #[arg(short, long, value_name = "FILE")]
    bank: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Bank(#[from] BankError),
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logger::init();

    let bank = match &args.bank {
        Some(path) => bank::load_from_file(path)?,
        None => bank::load_embedded()?,
    };
    logger::log(&format!("Loaded question bank with {} records", bank.len()));

    let mut locale = args
        .locale
        .as_deref()
        .map(Locale::parse)
        .unwrap_or(DEFAULT_LOCALE);
    let mut selected_locale_index = Locale::ALL
        .iter()
        .position(|candidate| *candidate == locale)
        .unwrap_or(0);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::Menu;
    let mut quiz_session: Option<QuizSession> = None;

    // A locale passed on the command line skips the language menu, the way
    // the locale segment of a URL would.
    if args.locale.is_some() {
        quiz_session = QuizSession::new_random(&bank);
        if quiz_session.is_some() {
            app_state = AppState::Quiz;
        }
    }

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(f, selected_locale_index),
            AppState::Quiz => {
                if let Some(session) = &quiz_session {
                    draw_quiz(f, session, locale);
                }
            }
            AppState::QuitConfirm => draw_quit_confirmation(f, locale),
        })?;

        if let Event::Key(key) = event::read()? {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            match app_state {
                AppState::Menu => match key.code {
                    KeyCode::Up => {
                        if selected_locale_index > 0 {
                            selected_locale_index -= 1;
                        }
                    }
                    KeyCode::Down => {
                        if selected_locale_index < Locale::ALL.len().saturating_sub(1) {
                            selected_locale_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        locale = Locale::ALL[selected_locale_index];
                        quiz_session = QuizSession::new_random(&bank);
                        if quiz_session.is_some() {
                            app_state = AppState::Quiz;
                        }
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
                AppState::Quiz => {
                    if let Some(session) = &mut quiz_session {
                        handle_quiz_input(session, key, &mut app_state, &bank);
                    }
                }
                AppState::QuitConfirm => match key.code {
                    KeyCode::Char('y') => {
                        app_state = AppState::Menu;
                        quiz_session = None;
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        app_state = AppState::Quiz;
                    }
                    _ => {}
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
