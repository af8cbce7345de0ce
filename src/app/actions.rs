use super::*;
use crate::session::Advance;

impl QuizApp {
    /// Envía la selección de la pregunta actual. Si la selección está
    /// incompleta la llamada no cambia nada (el propio estado la rechaza).
    pub fn confirmar_respuesta(&mut self) {
        if let Some(state) = self.session.current_state_mut() {
            state.submit();
        }
    }

    /// Pasa a la siguiente pregunta; en la última, cierra la sesión y cambia
    /// a la pantalla final.
    pub fn avanzar(&mut self) {
        match self.session.advance() {
            Advance::Moved => self.message.clear(),
            Advance::Finished => {
                self.state = AppState::Complete;
                self.message.clear();
            }
            Advance::Ignored => {}
        }
    }

    /// Vuelve a empezar desde la primera pregunta con el reloj a cero.
    pub fn reiniciar(&mut self) {
        self.session.restart();
        self.state = AppState::Quiz;
        self.message.clear();
        self.clock_accumulator = 0.0;
    }
}
