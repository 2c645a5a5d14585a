pub mod bank;
pub mod locale;
pub mod logger;
pub mod meta;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use bank::{BankError, load_embedded, load_from_file};
pub use locale::{DEFAULT_LOCALE, Locale};
pub use meta::{Page, PageMeta, absolute_url, alternate_urls, canonical_url, page_meta};
pub use models::{AppState, FlashcardRecord, OptionOutcome, QuizSession};
pub use session::handle_quiz_input;
pub use ui::{draw_menu, draw_quit_confirmation, draw_quiz};
pub use utils::{display_width, truncate_to_width};
