use crate::model::Choice;
use crate::session::QuestionState;
use crate::ui::views::question::choice_list::ui_single_choice;
use egui::{RichText, Ui};

// Las preguntas con medio adjunto son la lista de opciones de siempre más
// una referencia al recurso; la reproducción corre a cargo del visor del
// sistema, aquí solo se enlaza.

pub fn ui_image_quiz(
    ui: &mut Ui,
    image_url: &str,
    image_alt: Option<&str>,
    choices: &[Choice],
    state: &mut QuestionState,
) {
    media_link(ui, "🖼", image_alt.unwrap_or("Imagen de la pregunta"), image_url);
    ui.add_space(10.0);
    ui_single_choice(ui, choices, state);
}

pub fn ui_video_quiz(
    ui: &mut Ui,
    video_url: &str,
    poster: Option<&str>,
    choices: &[Choice],
    state: &mut QuestionState,
) {
    media_link(ui, "▶", "Ver el vídeo de la pregunta", video_url);
    if let Some(poster) = poster {
        media_link(ui, "🖼", "Fotograma de portada", poster);
    }
    ui.add_space(10.0);
    ui_single_choice(ui, choices, state);
}

pub fn ui_audio_quiz(ui: &mut Ui, audio_url: &str, choices: &[Choice], state: &mut QuestionState) {
    media_link(ui, "🔊", "Escuchar el audio de la pregunta", audio_url);
    ui.add_space(10.0);
    ui_single_choice(ui, choices, state);
}

pub fn media_link(ui: &mut Ui, icon: &str, label: &str, url: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).heading());
        ui.hyperlink_to(label, url);
    });
}
