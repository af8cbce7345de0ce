use crate::model::Choice;
use crate::session::{QuestionState, Selection};
use crate::ui::layout::confirm_button;
use egui::{Checkbox, Color32, RichText, Ui};

/// Respuesta múltiple: casillas más botón de confirmar (deshabilitado hasta
/// marcar al menos una). Devuelve si se pulsó confirmar.
pub fn ui_multi_answer(ui: &mut Ui, choices: &[Choice], state: &mut QuestionState) -> bool {
    let selected: Vec<String> = match state.selection() {
        Selection::Multi(ids) => ids.clone(),
        _ => Vec::new(),
    };
    let answered = state.answered();

    let mut toggled: Option<String> = None;
    for choice in choices {
        let mut checked = selected.iter().any(|id| *id == choice.id);
        let text = if answered {
            if choice.is_correct {
                RichText::new(format!("✅ {}", choice.text)).color(Color32::from_rgb(22, 131, 66))
            } else if checked {
                RichText::new(format!("❌ {}", choice.text)).color(Color32::from_rgb(185, 28, 28))
            } else {
                RichText::new(choice.text.clone())
            }
        } else {
            RichText::new(choice.text.clone())
        };
        let checkbox = Checkbox::new(&mut checked, text);
        if ui.add_enabled(!answered, checkbox).changed() {
            toggled = Some(choice.id.clone());
        }
        ui.add_space(4.0);
    }
    if let Some(id) = toggled {
        state.toggle_choice(&id);
    }

    ui.add_space(10.0);
    confirm_button(ui, state.submittable())
}
