pub mod session;

pub use session::{ModeTotals, QuizMode, SessionResult};
