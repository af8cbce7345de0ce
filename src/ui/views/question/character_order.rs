use crate::session::{QuestionState, Selection};
use crate::ui::layout::confirm_button;
use crate::ui::views::question::media::media_link;
use egui::{Button, Ui};

/// Orden de caracteres: se consume letra a letra del alfabeto disponible
/// hasta agotarlo. Pulsar una letra ya colocada la devuelve al alfabeto;
/// «Reiniciar» lo restaura entero.
pub fn ui_character_order(
    ui: &mut Ui,
    image_url: Option<&str>,
    state: &mut QuestionState,
) -> bool {
    if let Some(url) = image_url {
        media_link(ui, "🖼", "Imagen de la pregunta", url);
        ui.add_space(8.0);
    }

    let (available, chosen) = match state.selection() {
        Selection::Characters { available, chosen } => (available.clone(), chosen.clone()),
        _ => (Vec::new(), Vec::new()),
    };
    let answered = state.answered();

    // Secuencia construida
    ui.label("Tu respuesta:");
    let mut unpick: Option<usize> = None;
    ui.horizontal_wrapped(|ui| {
        if chosen.is_empty() {
            ui.weak("(coloca aquí las letras)");
        }
        for (idx, ch) in chosen.iter().enumerate() {
            if ui
                .add_enabled(!answered, Button::new(ch.to_string()).min_size([36.0, 36.0].into()))
                .clicked()
            {
                unpick = Some(idx);
            }
        }
    });
    if let Some(idx) = unpick {
        state.unpick_char(idx);
    }

    ui.add_space(10.0);

    // Alfabeto restante
    ui.label("Letras disponibles:");
    let mut pick: Option<usize> = None;
    ui.horizontal_wrapped(|ui| {
        for (idx, ch) in available.iter().enumerate() {
            if ui
                .add_enabled(!answered, Button::new(ch.to_string()).min_size([36.0, 36.0].into()))
                .clicked()
            {
                pick = Some(idx);
            }
        }
    });
    if let Some(idx) = pick {
        state.pick_char(idx);
    }

    ui.add_space(10.0);
    let mut confirm = false;
    ui.horizontal(|ui| {
        let can_reset = !answered && !chosen.is_empty();
        if ui.add_enabled(can_reset, Button::new("⟲ Reiniciar")).clicked() {
            state.reset_chars();
        }
        confirm = confirm_button(ui, state.submittable());
    });
    confirm
}
