use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::Context;

pub fn ui_complete(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 240.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎉 ¡Quiz completado!");
            ui.add_space(10.0);
            ui.label(format!(
                "Has respondido las {} preguntas en {}.",
                app.session.question_count(),
                app.formatted_time()
            ));
            ui.add_space(20.0);
        });

        let (reiniciar, salir) = two_button_row(ui, 360.0, "⟲ Volver a empezar", "❌ Salir");
        if reiniciar {
            app.reiniciar();
        }
        if salir {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
