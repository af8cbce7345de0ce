use crate::QuizApp;
use crate::model::Question;
use crate::ui::helpers::feedback_label;
use crate::ui::layout::{centered_panel, question_banner, timer_chip};
use crate::ui::views::question;
use egui::{Button, Context, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 540.0, 680.0, |ui| {
        // Con la sesión completada esta pantalla no tiene nada que pintar
        let Some((question, _)) = app.session.current() else {
            return;
        };
        let question = question.clone();
        let index = app.session.current_index();
        let total = app.session.question_count();

        question_banner(ui, index, total);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(question.prompt()).heading());
        });
        ui.add_space(12.0);

        // Cuerpo específico del tipo de pregunta. Los tipos de elección
        // única responden al seleccionar; el resto devuelve si se pulsó
        // «Confirmar».
        let mut confirm = false;
        if let Some(state) = app.session.current_state_mut() {
            confirm = match &question {
                Question::Text { choices, .. } => {
                    question::choice_list::ui_single_choice(ui, choices, state);
                    false
                }
                Question::Image {
                    image_url,
                    image_alt,
                    choices,
                    ..
                } => {
                    question::media::ui_image_quiz(
                        ui,
                        image_url,
                        image_alt.as_deref(),
                        choices,
                        state,
                    );
                    false
                }
                Question::Video {
                    video_url,
                    poster,
                    choices,
                    ..
                } => {
                    question::media::ui_video_quiz(
                        ui,
                        video_url,
                        poster.as_deref(),
                        choices,
                        state,
                    );
                    false
                }
                Question::Audio {
                    audio_url, choices, ..
                } => {
                    question::media::ui_audio_quiz(ui, audio_url, choices, state);
                    false
                }
                Question::ImageChoice { choices, .. } => {
                    question::image_choice::ui_image_choice(ui, choices, state);
                    false
                }
                Question::MultiAnswer { choices, .. } => {
                    question::multi_answer::ui_multi_answer(ui, choices, state)
                }
                Question::OrderSelection { choices, .. } => {
                    question::order_selection::ui_order_selection(ui, choices, state)
                }
                Question::CharacterOrder { image_url, .. } => {
                    question::character_order::ui_character_order(
                        ui,
                        image_url.as_deref(),
                        state,
                    )
                }
                Question::NumberInput { image_url, .. } => {
                    question::number_input::ui_number_input(ui, image_url.as_deref(), state)
                }
                Question::Combination {
                    left_items,
                    right_items,
                    correct_combinations,
                    ..
                } => question::combination::ui_combination(
                    ui,
                    left_items,
                    right_items,
                    correct_combinations,
                    state,
                ),
            };
        }
        if confirm {
            app.confirmar_respuesta();
        }

        // Pie: resultado, cronómetro y avance
        ui.add_space(16.0);
        let answered_info = app
            .session
            .current_state()
            .map(|s| (s.answered(), s.correct()));
        if let Some((true, Some(correct))) = answered_info {
            ui.vertical_centered(|ui| feedback_label(ui, correct));
            ui.add_space(6.0);
        }
        ui.horizontal(|ui| {
            timer_chip(ui, &app.formatted_time());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let answered = matches!(answered_info, Some((true, _)));
                if answered {
                    let siguiente = ui.add(
                        Button::new(RichText::new("Siguiente ▶").strong())
                            .min_size([140.0, 32.0].into()),
                    );
                    if siguiente.clicked() {
                        app.avanzar();
                    }
                }
            });
        });

        if !app.message.is_empty() {
            ui.add_space(6.0);
            ui.label(&app.message);
        }
    });
}
