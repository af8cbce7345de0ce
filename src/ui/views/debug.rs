use crate::QuizApp;
use egui::{Context, RichText, ScrollArea};

/// Ventana del navegador de depuración (solo builds de desarrollo): lista
/// todas las preguntas y permite saltar directamente a cualquiera de ellas.
/// Se abre y cierra con la tecla D.
pub fn ui_debug_window(app: &mut QuizApp, ctx: &Context) {
    if !app.debug_open {
        return;
    }

    let mut open = app.debug_open;
    let mut jump_target: Option<String> = None;

    egui::Window::new("🛠 Depuración — saltar a pregunta")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Pulsa una pregunta para saltar a ella (tecla D para cerrar):");
            ui.add_space(6.0);
            ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for (i, question) in app.session.questions().iter().enumerate() {
                    let mut prompt = question.prompt().to_owned();
                    if prompt.chars().count() > 48 {
                        prompt = prompt.chars().take(48).collect::<String>() + "…";
                    }
                    let current = !app.session.is_completed()
                        && i == app.session.current_index();
                    let label = format!("{}. [{}] {}", i + 1, question.id(), prompt);
                    let text = if current {
                        RichText::new(label).strong()
                    } else {
                        RichText::new(label)
                    };
                    if ui.button(text).clicked() {
                        jump_target = Some(question.id().to_owned());
                    }
                }
            });
        });

    if let Some(id) = jump_target {
        app.saltar_a(&id);
        open = false;
    }
    app.debug_open = open;
}
