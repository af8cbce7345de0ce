use egui::{Button, Color32, RichText, Ui, Vec2};

/// Cómo pintar una opción una vez (o antes de que) la pregunta se responde.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ChoiceStatus {
    Default,
    Correct,
    Incorrect,
}

/// Tras responder: la opción correcta se marca en verde y la elegida, si era
/// otra, en rojo. Antes de responder todo va en neutro.
pub fn choice_status(
    answered: bool,
    selected: Option<&str>,
    id: &str,
    is_correct: bool,
) -> ChoiceStatus {
    if !answered {
        return ChoiceStatus::Default;
    }
    if is_correct {
        ChoiceStatus::Correct
    } else if selected == Some(id) {
        ChoiceStatus::Incorrect
    } else {
        ChoiceStatus::Default
    }
}

pub fn choice_button(ui: &mut Ui, label: &str, status: ChoiceStatus, width: f32) -> bool {
    let text = match status {
        ChoiceStatus::Default => RichText::new(label),
        ChoiceStatus::Correct => RichText::new(format!("✅ {label}")).color(Color32::WHITE),
        ChoiceStatus::Incorrect => RichText::new(format!("❌ {label}")).color(Color32::WHITE),
    };
    let mut button = Button::new(text).min_size(Vec2::new(width, 36.0));
    button = match status {
        ChoiceStatus::Default => button,
        ChoiceStatus::Correct => button.fill(Color32::from_rgb(22, 131, 66)),
        ChoiceStatus::Incorrect => button.fill(Color32::from_rgb(185, 28, 28)),
    };
    ui.add(button).clicked()
}

/// Etiqueta de resultado bajo la pregunta ya respondida.
pub fn feedback_label(ui: &mut Ui, correct: bool) {
    let (text, color) = if correct {
        ("✅ ¡Correcto!", Color32::from_rgb(22, 131, 66))
    } else {
        ("❌ Incorrecto.", Color32::from_rgb(185, 28, 28))
    };
    ui.label(RichText::new(text).color(color).strong());
}
