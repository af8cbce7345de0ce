mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Reloj: el delta de fotograma se acumula en ticks de 1 s. La
        // repetición periódica mantiene vivo el contador aunque no haya
        // interacción.
        let dt = ctx.input(|i| i.stable_dt);
        self.tick_clock(f64::from(dt));
        ctx.request_repaint_after(std::time::Duration::from_millis(200));

        // Navegador de depuración: tecla D (si no se está escribiendo)
        #[cfg(debug_assertions)]
        {
            if !ctx.wants_keyboard_input() && ctx.input(|i| i.key_pressed(egui::Key::D)) {
                self.debug_open = !self.debug_open;
            }
            views::debug::ui_debug_window(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las funciones en views/
        match self.state {
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Complete => views::complete::ui_complete(self, ctx),
        }
    }
}
