use crate::data::read_questions_embedded;
use crate::model::AppState;
use crate::session::QuizSession;

// Submódulos
pub mod actions;
#[cfg(debug_assertions)]
pub mod debug;
pub mod timing;

/// Estado de la aplicación: la sesión de quiz más lo que solo interesa a la
/// capa de pantalla (pantalla activa, mensajes, acumulador del reloj).
pub struct QuizApp {
    pub session: QuizSession,
    pub state: AppState,
    pub message: String,
    /// Fracción de segundo acumulada entre fotogramas; ver `tick_clock`.
    pub clock_accumulator: f64,
    #[cfg(debug_assertions)]
    pub debug_open: bool,
}

impl QuizApp {
    pub fn new() -> Self {
        Self {
            session: QuizSession::new(read_questions_embedded()),
            state: AppState::Quiz,
            message: String::new(),
            clock_accumulator: 0.0,
            #[cfg(debug_assertions)]
            debug_open: false,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
