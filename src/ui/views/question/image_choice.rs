use crate::model::ImageOption;
use crate::session::{QuestionState, Selection};
use crate::ui::helpers::{choice_button, choice_status};
use crate::ui::views::question::media::media_link;
use egui::Ui;

/// Elección única cuyas opciones son imágenes. Cada opción se presenta con
/// su texto alternativo y el enlace a la imagen; como en el resto de tipos
/// de elección única, seleccionar es responder.
pub fn ui_image_choice(ui: &mut Ui, choices: &[ImageOption], state: &mut QuestionState) {
    let selected = match state.selection() {
        Selection::Single(slot) => slot.clone(),
        _ => None,
    };
    let answered = state.answered();

    let mut clicked: Option<String> = None;
    egui::Grid::new("image_choices")
        .num_columns(2)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (i, option) in choices.iter().enumerate() {
                ui.vertical(|ui| {
                    let alt = option.image_alt.as_deref().unwrap_or("(sin descripción)");
                    let status =
                        choice_status(answered, selected.as_deref(), &option.id, option.is_correct);
                    if choice_button(ui, alt, status, 220.0) && !answered {
                        clicked = Some(option.id.clone());
                    }
                    media_link(ui, "🖼", "ver imagen", &option.image_url);
                });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    if let Some(id) = clicked {
        state.select_single(&id);
    }
}
