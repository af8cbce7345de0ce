use crate::model::{Pair, PairItem};
use crate::session::{QuestionState, Selection};
use crate::ui::layout::confirm_button;
use egui::{Button, Color32, RichText, Ui};

/// Combinación izquierda-derecha con el protocolo de clics del original:
/// primero un elemento izquierdo (repetir el clic lo suelta), después el
/// derecho con el que se empareja. Re-emparejar un izquierdo sustituye su
/// pareja anterior.
pub fn ui_combination(
    ui: &mut Ui,
    left_items: &[PairItem],
    right_items: &[PairItem],
    correct_combinations: &[Pair],
    state: &mut QuestionState,
) -> bool {
    let (selected_left, pairs) = match state.selection() {
        Selection::Pairs {
            selected_left,
            pairs,
        } => (selected_left.clone(), pairs.clone()),
        _ => (None, Vec::new()),
    };
    let answered = state.answered();

    let right_text = |id: &str| {
        right_items
            .iter()
            .find(|item| item.id == id)
            .map_or("?", |item| item.text.as_str())
    };
    let pair_status = |pair: &Pair| -> Option<bool> {
        answered.then(|| correct_combinations.contains(pair))
    };

    let mut clicked_left: Option<String> = None;
    let mut clicked_right: Option<String> = None;

    ui.columns(2, |columns| {
        columns[0].label("Elige un elemento…");
        for item in left_items {
            let paired = pairs.iter().find(|p| p.left_id == item.id);
            let label = match paired {
                Some(pair) => format!("{} ↔ {}", item.text, right_text(&pair.right_id)),
                None => item.text.clone(),
            };
            let mut text = RichText::new(label);
            if let Some(ok) = paired.and_then(|p| pair_status(p)) {
                text = text.color(if ok {
                    Color32::from_rgb(22, 131, 66)
                } else {
                    Color32::from_rgb(185, 28, 28)
                });
            } else if selected_left.as_deref() == Some(item.id.as_str()) {
                text = text.strong();
            }
            let button = Button::new(text).min_size([200.0, 32.0].into());
            if columns[0].add_enabled(!answered, button).clicked() {
                clicked_left = Some(item.id.clone());
            }
            columns[0].add_space(4.0);
        }

        columns[1].label("…y su pareja");
        for item in right_items {
            let taken = pairs.iter().any(|p| p.right_id == item.id);
            let label = if taken {
                format!("● {}", item.text)
            } else {
                item.text.clone()
            };
            let button = Button::new(label).min_size([200.0, 32.0].into());
            if columns[1].add_enabled(!answered, button).clicked() {
                clicked_right = Some(item.id.clone());
            }
            columns[1].add_space(4.0);
        }
    });

    if let Some(id) = clicked_left {
        state.select_left(&id);
    }
    if let Some(id) = clicked_right {
        state.select_right(&id);
    }

    ui.add_space(10.0);
    confirm_button(ui, state.submittable())
}
