use crate::session::{QuestionState, Selection};
use crate::ui::layout::confirm_button;
use crate::ui::views::question::media::media_link;
use egui::{Button, RichText, Ui};

/// Entrada numérica con teclado en pantalla. El estado rechaza por sí solo
/// el dígito que exceda `max_digits`.
pub fn ui_number_input(
    ui: &mut Ui,
    image_url: Option<&str>,
    state: &mut QuestionState,
) -> bool {
    if let Some(url) = image_url {
        media_link(ui, "🖼", "Imagen de la pregunta", url);
        ui.add_space(8.0);
    }

    let digits = match state.selection() {
        Selection::Digits(digits) => digits.clone(),
        _ => String::new(),
    };
    let answered = state.answered();

    ui.vertical_centered(|ui| {
        let shown = if digits.is_empty() { "—" } else { digits.as_str() };
        ui.label(RichText::new(shown).monospace().size(28.0));
    });
    ui.add_space(8.0);

    let mut pressed: Option<char> = None;
    let mut erase = false;
    egui::Grid::new("keypad").spacing([6.0, 6.0]).show(ui, |ui| {
        for (i, key) in ('1'..='9').enumerate() {
            let button = Button::new(key.to_string()).min_size([48.0, 40.0].into());
            if ui.add_enabled(!answered, button).clicked() {
                pressed = Some(key);
            }
            if i % 3 == 2 {
                ui.end_row();
            }
        }
        if ui
            .add_enabled(!answered, Button::new("⌫").min_size([48.0, 40.0].into()))
            .clicked()
        {
            erase = true;
        }
        if ui
            .add_enabled(!answered, Button::new("0").min_size([48.0, 40.0].into()))
            .clicked()
        {
            pressed = Some('0');
        }
        ui.end_row();
    });

    if let Some(digit) = pressed {
        state.push_digit(digit);
    }
    if erase {
        state.pop_digit();
    }

    ui.add_space(10.0);
    confirm_button(ui, state.submittable())
}
