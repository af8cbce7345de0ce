use crate::model::Choice;
use crate::session::{QuestionState, Selection};
use crate::ui::helpers::{choice_button, choice_status};
use egui::Ui;

/// Lista de opciones compartida por los cuatro tipos de elección única.
/// Seleccionar una opción responde la pregunta en el acto; después de eso
/// los botones solo sirven para mostrar el resultado.
pub fn ui_single_choice(ui: &mut Ui, choices: &[Choice], state: &mut QuestionState) {
    let selected = match state.selection() {
        Selection::Single(slot) => slot.clone(),
        _ => None,
    };
    let answered = state.answered();
    let width = ui.available_width();

    let mut clicked: Option<String> = None;
    for choice in choices {
        let status = choice_status(answered, selected.as_deref(), &choice.id, choice.is_correct);
        if choice_button(ui, &choice.text, status, width) && !answered {
            clicked = Some(choice.id.clone());
        }
        ui.add_space(6.0);
    }
    if let Some(id) = clicked {
        state.select_single(&id);
    }
}
