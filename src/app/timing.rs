use super::*;

impl QuizApp {
    /// Convierte el delta de cada fotograma en ticks de 1 s para la sesión.
    /// El resto fraccionario queda acumulado para el siguiente fotograma.
    pub fn tick_clock(&mut self, dt: f64) {
        self.clock_accumulator += dt;
        while self.clock_accumulator >= 1.0 {
            self.clock_accumulator -= 1.0;
            self.session.tick();
        }
    }

    /// Tiempo transcurrido en formato `MM:SS`.
    pub fn formatted_time(&self) -> String {
        let seconds = self.session.elapsed_seconds();
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}
