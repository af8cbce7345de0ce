use super::*;

impl QuizApp {
    /// Salto del navegador de depuración: coloca la sesión en la pregunta
    /// con ese id (descartando la respuesta a medias) y vuelve a la pantalla
    /// de quiz si hacía falta reabrir la sesión.
    pub fn saltar_a(&mut self, question_id: &str) {
        self.session.jump_to(question_id);
        if !self.session.is_completed() {
            self.state = AppState::Quiz;
        }
        self.message = format!("Salto a la pregunta {question_id}");
    }
}
