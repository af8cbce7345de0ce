use crate::model::OrderItem;
use crate::session::{QuestionState, Selection};
use crate::ui::layout::confirm_button;
use egui::{Color32, RichText, Ui};

/// Lista ordenable: el arrastre del original queda reducido a flechas que
/// intercambian posiciones adyacentes. Tras responder, cada fila se marca
/// según si quedó en su posición objetivo.
pub fn ui_order_selection(ui: &mut Ui, choices: &[OrderItem], state: &mut QuestionState) -> bool {
    let ids: Vec<String> = match state.selection() {
        Selection::Order(ids) => ids.clone(),
        _ => Vec::new(),
    };
    let answered = state.answered();

    ui.label("Usa las flechas para colocar cada elemento en su sitio:");
    ui.add_space(6.0);

    let mut requested_move: Option<(usize, usize)> = None;
    for (idx, id) in ids.iter().enumerate() {
        let item = choices.iter().find(|c| c.id == *id);
        let text = item.map_or(id.as_str(), |i| i.text.as_str());
        ui.horizontal(|ui| {
            if answered {
                let in_place = item.is_some_and(|i| i.order == idx + 1);
                let mark = if in_place { "✅" } else { "❌" };
                let color = if in_place {
                    Color32::from_rgb(22, 131, 66)
                } else {
                    Color32::from_rgb(185, 28, 28)
                };
                ui.label(RichText::new(format!("{mark} {}. {text}", idx + 1)).color(color));
            } else {
                if ui.small_button("⬆").clicked() && idx > 0 {
                    requested_move = Some((idx, idx - 1));
                }
                if ui.small_button("⬇").clicked() && idx + 1 < ids.len() {
                    requested_move = Some((idx, idx + 1));
                }
                ui.label(format!("{}. {text}", idx + 1));
            }
        });
        ui.add_space(2.0);
    }
    if let Some((from, to)) = requested_move {
        state.move_item(from, to);
    }

    ui.add_space(10.0);
    confirm_button(ui, state.submittable())
}
