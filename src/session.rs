//! Máquina de estados del quiz: el estado de respuesta de la pregunta en
//! pantalla (`QuestionState`) y el recorrido de la sesión (`QuizSession`).
//!
//! Las equivocaciones del usuario (respuesta errónea, selección incompleta)
//! nunca son errores: se absorben como `correct == false` o como no-op
//! silencioso. Llamar a un mutador del tipo equivocado sí es un defecto de
//! programación y provoca pánico inmediato.

use crate::grading;
use crate::model::{Pair, Question};
use rand::seq::SliceRandom;

/// Respuesta enviada, en su forma canónica por tipo de pregunta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Id de la opción elegida (elección única y elección de imagen).
    Choice(String),
    /// Ids marcados, en orden de selección.
    Choices(Vec<String>),
    /// Ids en el orden final de la lista.
    Order(Vec<String>),
    /// Cadena formada con los caracteres consumidos.
    Word(String),
    /// Parejas en forma `"izquierdaId-derechaId"`.
    Pairs(Vec<String>),
    /// Dígitos tecleados.
    Digits(String),
}

/// Selección en curso. La forma depende del tipo de la pregunta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<String>),
    Multi(Vec<String>),
    Order(Vec<String>),
    Characters {
        available: Vec<char>,
        chosen: Vec<char>,
    },
    Pairs {
        selected_left: Option<String>,
        pairs: Vec<Pair>,
    },
    Digits(String),
}

/// Estado efímero de la pregunta actualmente mostrada.
///
/// Se crea cuando la pregunta pasa a ser la actual y se descarta al avanzar.
/// Mientras está sin responder, los mutadores específicos de cada tipo editan
/// la selección; `submit()` la corrige una sola vez y congela el estado.
#[derive(Debug, Clone)]
pub struct QuestionState {
    question: Question,
    selection: Selection,
    answered: bool,
    correct: Option<bool>,
    response: Option<Response>,
}

impl QuestionState {
    pub fn new(question: &Question) -> Self {
        let selection = match question {
            Question::Text { .. }
            | Question::Image { .. }
            | Question::Video { .. }
            | Question::Audio { .. }
            | Question::ImageChoice { .. } => Selection::Single(None),
            Question::MultiAnswer { .. } => Selection::Multi(Vec::new()),
            Question::OrderSelection { choices, .. } => {
                // Como en pantalla: la lista arranca barajada
                let mut ids: Vec<String> = choices.iter().map(|c| c.id.clone()).collect();
                ids.shuffle(&mut rand::thread_rng());
                Selection::Order(ids)
            }
            Question::CharacterOrder { characters, .. } => Selection::Characters {
                available: characters.clone(),
                chosen: Vec::new(),
            },
            Question::Combination { .. } => Selection::Pairs {
                selected_left: None,
                pairs: Vec::new(),
            },
            Question::NumberInput { .. } => Selection::Digits(String::new()),
        };
        Self {
            question: question.clone(),
            selection,
            answered: false,
            correct: None,
            response: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    /// `None` hasta que la pregunta se responde.
    pub fn correct(&self) -> Option<bool> {
        self.correct
    }

    /// Respuesta canónica registrada al responder.
    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    // ---- Mutadores de elección única -------------------------------------

    /// Selecciona una opción en una pregunta de elección única o de elección
    /// de imagen. Para estos tipos seleccionar *es* responder: la corrección
    /// se calcula en el acto. Repetir la selección tras responder es no-op.
    pub fn select_single(&mut self, choice_id: &str) {
        if self.answered {
            return;
        }
        match &mut self.selection {
            Selection::Single(slot) => *slot = Some(choice_id.to_owned()),
            _ => panic!("select_single sobre una pregunta que no es de elección única"),
        }
        self.submit();
    }

    // ---- Mutadores de respuesta múltiple ---------------------------------

    pub fn toggle_choice(&mut self, choice_id: &str) {
        if self.answered {
            return;
        }
        match &mut self.selection {
            Selection::Multi(selected) => {
                if let Some(pos) = selected.iter().position(|id| id == choice_id) {
                    selected.remove(pos);
                } else {
                    selected.push(choice_id.to_owned());
                }
            }
            _ => panic!("toggle_choice sobre una pregunta que no es de respuesta múltiple"),
        }
    }

    // ---- Mutadores de lista ordenable ------------------------------------

    /// Mueve el elemento de `from` a `to` (la reducción del arrastre de la
    /// interfaz a índices). Índices fuera de rango: no-op.
    pub fn move_item(&mut self, from: usize, to: usize) {
        if self.answered {
            return;
        }
        match &mut self.selection {
            Selection::Order(ids) => {
                if from >= ids.len() || to >= ids.len() || from == to {
                    return;
                }
                let id = ids.remove(from);
                ids.insert(to, id);
            }
            _ => panic!("move_item sobre una pregunta que no es de ordenación"),
        }
    }

    /// Sustituye el orden completo. Si `ids` no es una permutación de los
    /// elementos actuales (falta alguno, sobra alguno o hay repetidos) la
    /// llamada se ignora.
    pub fn reorder(&mut self, ids: &[String]) {
        if self.answered {
            return;
        }
        match &mut self.selection {
            Selection::Order(current) => {
                let is_permutation = ids.len() == current.len()
                    && current.iter().all(|id| ids.contains(id))
                    && ids.iter().all(|id| current.contains(id));
                if !is_permutation {
                    log::debug!("reorder ignorado: la lista no es una permutación");
                    return;
                }
                *current = ids.to_vec();
            }
            _ => panic!("reorder sobre una pregunta que no es de ordenación"),
        }
    }

    // ---- Mutadores de orden de caracteres --------------------------------

    /// Consume el carácter `index` del alfabeto disponible y lo añade a la
    /// secuencia construida. El índice permite distinguir duplicados.
    pub fn pick_char(&mut self, index: usize) {
        if self.answered {
            return;
        }
        match &mut self.selection {
            Selection::Characters { available, chosen } => {
                if index >= available.len() {
                    return;
                }
                let ch = available.remove(index);
                chosen.push(ch);
            }
            _ => panic!("pick_char sobre una pregunta que no es de orden de caracteres"),
        }
    }

    /// Devuelve al alfabeto disponible el carácter `index` de la secuencia.
    pub fn unpick_char(&mut self, index: usize) {
        if self.answered {
            return;
        }
        match &mut self.selection {
            Selection::Characters { available, chosen } => {
                if index >= chosen.len() {
                    return;
                }
                let ch = chosen.remove(index);
                available.push(ch);
            }
            _ => panic!("unpick_char sobre una pregunta que no es de orden de caracteres"),
        }
    }

    /// Deshace el último carácter consumido.
    pub fn unpick_last_char(&mut self) {
        let last = match &self.selection {
            Selection::Characters { chosen, .. } => chosen.len().checked_sub(1),
            _ => panic!("unpick_last_char sobre una pregunta que no es de orden de caracteres"),
        };
        if let Some(index) = last {
            self.unpick_char(index);
        }
    }

    /// Restaura el alfabeto completo y vacía la secuencia.
    pub fn reset_chars(&mut self) {
        if self.answered {
            return;
        }
        match (&mut self.selection, &self.question) {
            (
                Selection::Characters { available, chosen },
                Question::CharacterOrder { characters, .. },
            ) => {
                *available = characters.clone();
                chosen.clear();
            }
            _ => panic!("reset_chars sobre una pregunta que no es de orden de caracteres"),
        }
    }

    // ---- Mutadores de combinación ----------------------------------------

    /// Marca (o desmarca, si se repite) el elemento izquierdo activo.
    pub fn select_left(&mut self, left_id: &str) {
        if self.answered {
            return;
        }
        match &mut self.selection {
            Selection::Pairs { selected_left, .. } => {
                if selected_left.as_deref() == Some(left_id) {
                    *selected_left = None;
                } else {
                    *selected_left = Some(left_id.to_owned());
                }
            }
            _ => panic!("select_left sobre una pregunta que no es de combinación"),
        }
    }

    /// Empareja el elemento izquierdo activo con `right_id`. Sin izquierdo
    /// activo es no-op. Re-emparejar un izquierdo sustituye su pareja previa.
    pub fn select_right(&mut self, right_id: &str) {
        if self.answered {
            return;
        }
        match &mut self.selection {
            Selection::Pairs {
                selected_left,
                pairs,
            } => {
                let Some(left_id) = selected_left.take() else {
                    return;
                };
                pairs.retain(|p| p.left_id != left_id);
                pairs.push(Pair::new(left_id, right_id));
            }
            _ => panic!("select_right sobre una pregunta que no es de combinación"),
        }
    }

    /// Deshace el emparejamiento de un id izquierdo concreto.
    pub fn clear_pair(&mut self, left_id: &str) {
        if self.answered {
            return;
        }
        match &mut self.selection {
            Selection::Pairs { pairs, .. } => pairs.retain(|p| p.left_id != left_id),
            _ => panic!("clear_pair sobre una pregunta que no es de combinación"),
        }
    }

    // ---- Mutadores de entrada numérica -----------------------------------

    /// Añade un dígito. Se rechaza (sin cambio de estado) si no es un dígito
    /// ASCII o si ya se alcanzó `max_digits`.
    pub fn push_digit(&mut self, digit: char) {
        if self.answered {
            return;
        }
        let max_digits = match &self.question {
            Question::NumberInput { max_digits, .. } => *max_digits,
            _ => panic!("push_digit sobre una pregunta que no es de entrada numérica"),
        };
        match &mut self.selection {
            Selection::Digits(digits) => {
                if digit.is_ascii_digit() && digits.len() < max_digits {
                    digits.push(digit);
                }
            }
            _ => unreachable!("selección inconsistente con el tipo de la pregunta"),
        }
    }

    pub fn pop_digit(&mut self) {
        if self.answered {
            return;
        }
        match &mut self.selection {
            Selection::Digits(digits) => {
                digits.pop();
            }
            _ => panic!("pop_digit sobre una pregunta que no es de entrada numérica"),
        }
    }

    // ---- Envío -----------------------------------------------------------

    /// Si la selección tiene la forma mínima exigida por el tipo para poder
    /// corregirse. La interfaz usa esto para habilitar el botón de confirmar.
    pub fn submittable(&self) -> bool {
        if self.answered {
            return false;
        }
        match &self.selection {
            Selection::Single(slot) => slot.is_some(),
            Selection::Multi(selected) => !selected.is_empty(),
            // La lista siempre es una permutación completa
            Selection::Order(_) => true,
            Selection::Characters { available, chosen } => {
                available.is_empty() && !chosen.is_empty()
            }
            Selection::Pairs { pairs, .. } => match &self.question {
                Question::Combination { left_items, .. } => left_items
                    .iter()
                    .all(|item| pairs.iter().filter(|p| p.left_id == item.id).count() == 1),
                _ => unreachable!("selección inconsistente con el tipo de la pregunta"),
            },
            Selection::Digits(digits) => !digits.is_empty(),
        }
    }

    /// Transición Unanswered → Answered. No-op si ya se respondió o si la
    /// selección está incompleta. Corrige una sola vez, cachea el resultado y
    /// registra la respuesta en su forma canónica.
    pub fn submit(&mut self) {
        if self.answered || !self.submittable() {
            return;
        }
        let (correct, response) = match (&self.question, &self.selection) {
            (question, Selection::Single(Some(choice_id))) => {
                let correct = match question {
                    Question::ImageChoice { choices, .. } => {
                        grading::grade_image_choice(choices, choice_id)
                    }
                    _ => {
                        let choices = question
                            .single_choices()
                            .expect("variante de elección única sin opciones");
                        grading::grade_single_choice(choices, choice_id)
                    }
                };
                (correct, Response::Choice(choice_id.clone()))
            }
            (Question::MultiAnswer { choices, .. }, Selection::Multi(selected)) => (
                grading::grade_multi_answer(choices, selected),
                Response::Choices(selected.clone()),
            ),
            (Question::OrderSelection { choices, .. }, Selection::Order(ids)) => (
                grading::grade_order(choices, ids),
                Response::Order(ids.clone()),
            ),
            (Question::CharacterOrder { correct_answer, .. }, Selection::Characters { chosen, .. }) => {
                let word: String = chosen.iter().collect();
                (
                    grading::grade_character_sequence(correct_answer, &word),
                    Response::Word(word),
                )
            }
            (
                Question::Combination {
                    left_items,
                    correct_combinations,
                    ..
                },
                Selection::Pairs { pairs, .. },
            ) => (
                grading::grade_combination(left_items, correct_combinations, pairs),
                Response::Pairs(
                    pairs
                        .iter()
                        .map(|p| format!("{}-{}", p.left_id, p.right_id))
                        .collect(),
                ),
            ),
            (Question::NumberInput { correct_answer, .. }, Selection::Digits(digits)) => (
                grading::grade_number(*correct_answer, digits),
                Response::Digits(digits.clone()),
            ),
            _ => unreachable!("selección inconsistente con el tipo de la pregunta"),
        };

        self.answered = true;
        self.correct = Some(correct);
        log::info!(
            "pregunta {} respondida: {} ({:?})",
            self.question.id(),
            if correct { "correcta" } else { "incorrecta" },
            response
        );
        self.response = Some(response);
    }
}

/// Resultado de `QuizSession::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// La pregunta actual aún no estaba respondida (o la sesión ya terminó):
    /// sin cambios.
    Ignored,
    /// Se pasó a la siguiente pregunta.
    Moved,
    /// Era la última pregunta: la sesión queda completada. Se devuelve
    /// exactamente una vez por recorrido.
    Finished,
}

/// Recorrido lineal sobre la lista fija de preguntas.
///
/// Invariante: `0 <= current_index <= questions.len()`, con
/// `current_index == questions.len()` ⇔ sesión completada ⇔ sin
/// `QuestionState` actual.
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    current_state: Option<QuestionState>,
    elapsed_seconds: u64,
}

impl QuizSession {
    /// Construir una sesión sin preguntas es un defecto de cableado.
    pub fn new(questions: Vec<Question>) -> Self {
        assert!(
            !questions.is_empty(),
            "una sesión de quiz necesita al menos una pregunta"
        );
        let first = QuestionState::new(&questions[0]);
        Self {
            questions,
            current_index: 0,
            current_state: Some(first),
            elapsed_seconds: 0,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_completed(&self) -> bool {
        self.current_index == self.questions.len()
    }

    /// Pregunta y estado actuales; `None` señala sesión completada.
    pub fn current(&self) -> Option<(&Question, &QuestionState)> {
        self.current_state
            .as_ref()
            .map(|state| (&self.questions[self.current_index], state))
    }

    pub fn current_state(&self) -> Option<&QuestionState> {
        self.current_state.as_ref()
    }

    pub fn current_state_mut(&mut self) -> Option<&mut QuestionState> {
        self.current_state.as_mut()
    }

    /// Avanza a la siguiente pregunta. Ignorado (robustez frente a errores de
    /// la capa de interfaz) si la pregunta actual no está respondida todavía
    /// o si la sesión ya terminó.
    pub fn advance(&mut self) -> Advance {
        let answered = self
            .current_state
            .as_ref()
            .is_some_and(QuestionState::answered);
        if !answered {
            return Advance::Ignored;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.current_state = Some(QuestionState::new(&self.questions[self.current_index]));
            Advance::Moved
        } else {
            self.current_index = self.questions.len();
            self.current_state = None;
            log::info!(
                "sesión completada tras {} preguntas en {} s",
                self.questions.len(),
                self.elapsed_seconds
            );
            Advance::Finished
        }
    }

    /// Vuelve a la primera pregunta con cronómetro a cero y estado fresco.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.elapsed_seconds = 0;
        self.current_state = Some(QuestionState::new(&self.questions[0]));
    }

    /// Un segundo de reloj de pared. El contador se congela al completar y
    /// solo `restart()` lo pone a cero.
    pub fn tick(&mut self) {
        if !self.is_completed() {
            self.elapsed_seconds += 1;
        }
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Salto directo a una pregunta por id, descartando cualquier respuesta a
    /// medias y reabriendo la sesión si estaba completada. Solo para builds
    /// de desarrollo. Id desconocido: no-op con traza.
    #[cfg(debug_assertions)]
    pub fn jump_to(&mut self, question_id: &str) {
        match self
            .questions
            .iter()
            .position(|q| q.id() == question_id)
        {
            Some(index) => {
                self.current_index = index;
                self.current_state = Some(QuestionState::new(&self.questions[index]));
            }
            None => log::warn!("salto de depuración a id desconocido: {question_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, OrderItem, PairItem};

    fn text_question(id: &str) -> Question {
        Question::Text {
            id: id.into(),
            question: "¿Cuál es la correcta?".into(),
            choices: vec![
                Choice {
                    id: "a".into(),
                    text: "no".into(),
                    is_correct: false,
                },
                Choice {
                    id: "b".into(),
                    text: "sí".into(),
                    is_correct: true,
                },
            ],
        }
    }

    fn multi_question() -> Question {
        Question::MultiAnswer {
            id: "m".into(),
            question: "Marca las correctas".into(),
            choices: vec![
                Choice {
                    id: "a".into(),
                    text: "React".into(),
                    is_correct: true,
                },
                Choice {
                    id: "b".into(),
                    text: "Angular".into(),
                    is_correct: true,
                },
                Choice {
                    id: "c".into(),
                    text: "Django".into(),
                    is_correct: false,
                },
            ],
        }
    }

    fn order_question() -> Question {
        Question::OrderSelection {
            id: "o".into(),
            question: "Ordena los pasos".into(),
            choices: [("a", 1), ("b", 2), ("c", 3)]
                .iter()
                .map(|(id, order)| OrderItem {
                    id: (*id).into(),
                    text: format!("paso {order}"),
                    order: *order,
                })
                .collect(),
        }
    }

    fn character_question() -> Question {
        Question::CharacterOrder {
            id: "ch".into(),
            question: "Forma la palabra".into(),
            characters: vec!['P', 'Y', 'T', 'H', 'O', 'N'],
            correct_answer: "PYTHON".into(),
            image_url: None,
            image_alt: None,
        }
    }

    fn combination_question() -> Question {
        Question::Combination {
            id: "co".into(),
            question: "Empareja".into(),
            left_items: vec![
                PairItem {
                    id: "l1".into(),
                    text: "uno".into(),
                },
                PairItem {
                    id: "l2".into(),
                    text: "dos".into(),
                },
            ],
            right_items: vec![
                PairItem {
                    id: "r1".into(),
                    text: "one".into(),
                },
                PairItem {
                    id: "r2".into(),
                    text: "two".into(),
                },
            ],
            correct_combinations: vec![Pair::new("l1", "r2"), Pair::new("l2", "r1")],
            image_url: None,
            image_alt: None,
        }
    }

    fn number_question() -> Question {
        Question::NumberInput {
            id: "n".into(),
            question: "2^10 = ?".into(),
            correct_answer: 1024,
            max_digits: 4,
            image_url: None,
            image_alt: None,
        }
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    // ---- QuestionState ---------------------------------------------------

    #[test]
    fn single_selection_answers_immediately() {
        let mut state = QuestionState::new(&text_question("1"));
        assert!(!state.answered());
        state.select_single("b");
        assert!(state.answered());
        assert_eq!(state.correct(), Some(true));
        assert_eq!(state.response(), Some(&Response::Choice("b".into())));
    }

    #[test]
    fn single_wrong_option_is_just_incorrect() {
        let mut state = QuestionState::new(&text_question("1"));
        state.select_single("a");
        assert_eq!(state.correct(), Some(false));
    }

    #[test]
    fn reselecting_after_answering_changes_nothing() {
        let mut state = QuestionState::new(&text_question("1"));
        state.select_single("a");
        state.select_single("b");
        assert_eq!(state.correct(), Some(false));
        assert_eq!(state.response(), Some(&Response::Choice("a".into())));
    }

    #[test]
    fn multi_answer_needs_a_selection_before_submit() {
        let mut state = QuestionState::new(&multi_question());
        state.submit();
        assert!(!state.answered());

        state.toggle_choice("a");
        state.toggle_choice("c");
        state.toggle_choice("c"); // desmarca
        state.toggle_choice("b");
        state.submit();
        assert_eq!(state.correct(), Some(true));
        assert_eq!(
            state.response(),
            Some(&Response::Choices(ids(&["a", "b"])))
        );
    }

    #[test]
    fn toggles_after_answering_are_ignored() {
        let mut state = QuestionState::new(&multi_question());
        state.toggle_choice("a");
        state.toggle_choice("b");
        state.submit();
        assert_eq!(state.correct(), Some(true));

        state.toggle_choice("c");
        assert_eq!(
            state.response(),
            Some(&Response::Choices(ids(&["a", "b"])))
        );
        assert_eq!(state.selection(), &Selection::Multi(ids(&["a", "b"])));
    }

    #[test]
    fn reorder_rejects_non_permutations() {
        let mut state = QuestionState::new(&order_question());
        state.reorder(&ids(&["a", "b", "c"]));
        // Falta "c": se ignora y el orden previo sigue vigente
        state.reorder(&ids(&["b", "a"]));
        state.submit();
        assert_eq!(state.correct(), Some(true));
    }

    #[test]
    fn wrong_order_is_incorrect() {
        let mut state = QuestionState::new(&order_question());
        state.reorder(&ids(&["b", "a", "c"]));
        state.submit();
        assert_eq!(state.correct(), Some(false));
    }

    #[test]
    fn move_item_reorders_and_ignores_out_of_range() {
        let mut state = QuestionState::new(&order_question());
        state.reorder(&ids(&["b", "a", "c"]));
        state.move_item(1, 0);
        state.move_item(7, 0); // fuera de rango: no-op
        state.submit();
        assert_eq!(state.correct(), Some(true));
    }

    #[test]
    fn character_pool_shrinks_and_is_restorable() {
        let mut state = QuestionState::new(&character_question());

        // Consumir "P" y deshacer
        state.pick_char(0);
        match state.selection() {
            Selection::Characters { available, chosen } => {
                assert_eq!(available.len(), 5);
                assert_eq!(chosen, &['P']);
            }
            _ => unreachable!(),
        }
        state.unpick_last_char();
        match state.selection() {
            Selection::Characters { available, chosen } => {
                assert_eq!(available.len(), 6);
                assert!(chosen.is_empty());
            }
            _ => unreachable!(),
        }

        // Sin consumir todo el alfabeto no se puede responder
        state.pick_char(0);
        state.submit();
        assert!(!state.answered());

        // Consumir el resto en orden: el alfabeto ya está en el orden correcto
        for _ in 0..5 {
            state.pick_char(0);
        }
        state.submit();
        assert_eq!(state.correct(), Some(true));
        assert_eq!(state.response(), Some(&Response::Word("PYTHON".into())));
    }

    #[test]
    fn character_reset_restores_the_full_pool() {
        let mut state = QuestionState::new(&character_question());
        state.pick_char(0);
        state.pick_char(0);
        state.reset_chars();
        match state.selection() {
            Selection::Characters { available, chosen } => {
                assert_eq!(available, &['P', 'Y', 'T', 'H', 'O', 'N']);
                assert!(chosen.is_empty());
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn wrong_character_order_is_incorrect() {
        let mut state = QuestionState::new(&character_question());
        // "YPTHON"
        state.pick_char(1);
        for _ in 0..5 {
            state.pick_char(0);
        }
        state.submit();
        assert_eq!(state.correct(), Some(false));
    }

    #[test]
    fn combination_requires_every_left_paired() {
        let mut state = QuestionState::new(&combination_question());
        state.select_left("l1");
        state.select_right("r2");
        state.submit();
        assert!(!state.answered(), "una sola pareja no debe poder enviarse");

        state.select_left("l2");
        state.select_right("r1");
        state.submit();
        assert_eq!(state.correct(), Some(true));
    }

    #[test]
    fn repairing_a_left_item_replaces_its_pair() {
        let mut state = QuestionState::new(&combination_question());
        state.select_left("l1");
        state.select_right("r1");
        state.select_left("l1");
        state.select_right("r2");
        state.select_left("l2");
        state.select_right("r1");
        state.submit();
        assert_eq!(state.correct(), Some(true));
    }

    #[test]
    fn reclicking_the_left_item_deselects_it() {
        let mut state = QuestionState::new(&combination_question());
        state.select_left("l1");
        state.select_left("l1");
        // Sin izquierdo activo el clic derecho no crea pareja
        state.select_right("r1");
        match state.selection() {
            Selection::Pairs { pairs, .. } => assert!(pairs.is_empty()),
            _ => unreachable!(),
        }
    }

    #[test]
    fn clear_pair_reopens_the_submission_gate() {
        let mut state = QuestionState::new(&combination_question());
        state.select_left("l1");
        state.select_right("r2");
        state.select_left("l2");
        state.select_right("r1");
        assert!(state.submittable());

        state.clear_pair("l2");
        assert!(!state.submittable());
        state.submit();
        assert!(!state.answered());
    }

    #[test]
    fn crossed_combination_is_incorrect() {
        let mut state = QuestionState::new(&combination_question());
        state.select_left("l1");
        state.select_right("r1");
        state.select_left("l2");
        state.select_right("r2");
        state.submit();
        assert_eq!(state.correct(), Some(false));
        assert_eq!(
            state.response(),
            Some(&Response::Pairs(ids(&["l1-r1", "l2-r2"])))
        );
    }

    #[test]
    fn digits_respect_the_ceiling() {
        let mut state = QuestionState::new(&number_question());
        for d in ['1', '0', '2', '4', '9'] {
            state.push_digit(d);
        }
        // El quinto dígito se rechaza sin cambio de estado
        assert_eq!(state.selection(), &Selection::Digits("1024".into()));
        state.push_digit('x');
        assert_eq!(state.selection(), &Selection::Digits("1024".into()));
        state.submit();
        assert_eq!(state.correct(), Some(true));
    }

    #[test]
    fn empty_digits_cannot_be_submitted() {
        let mut state = QuestionState::new(&number_question());
        state.submit();
        assert!(!state.answered());

        state.push_digit('7');
        state.pop_digit();
        state.submit();
        assert!(!state.answered());
    }

    #[test]
    #[should_panic]
    fn kind_mismatch_is_a_programming_defect() {
        let mut state = QuestionState::new(&text_question("1"));
        state.push_digit('1');
    }

    // ---- QuizSession -----------------------------------------------------

    fn session() -> QuizSession {
        QuizSession::new(vec![
            text_question("1"),
            text_question("2"),
            text_question("3"),
        ])
    }

    fn answer_current(session: &mut QuizSession) {
        session
            .current_state_mut()
            .expect("hay pregunta actual")
            .select_single("b");
    }

    #[test]
    #[should_panic]
    fn an_empty_session_is_a_wiring_defect() {
        let _ = QuizSession::new(Vec::new());
    }

    #[test]
    fn advance_is_ignored_while_unanswered() {
        let mut session = session();
        assert_eq!(session.advance(), Advance::Ignored);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn advance_moves_and_creates_a_fresh_state() {
        let mut session = session();
        answer_current(&mut session);
        assert_eq!(session.advance(), Advance::Moved);
        assert_eq!(session.current_index(), 1);
        let (question, state) = session.current().expect("en curso");
        assert_eq!(question.id(), "2");
        assert!(!state.answered());
    }

    #[test]
    fn finishing_fires_exactly_once() {
        let mut session = session();
        for _ in 0..2 {
            answer_current(&mut session);
            assert_eq!(session.advance(), Advance::Moved);
        }
        answer_current(&mut session);
        assert_eq!(session.advance(), Advance::Finished);
        assert!(session.is_completed());
        assert!(session.current().is_none());
        // Una llamada espuria posterior no vuelve a señalar el final
        assert_eq!(session.advance(), Advance::Ignored);
    }

    #[test]
    fn restart_resets_position_clock_and_state() {
        let mut session = session();
        session.tick();
        session.tick();
        answer_current(&mut session);
        session.advance();

        session.restart();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.elapsed_seconds(), 0);
        let (question, state) = session.current().expect("en curso");
        assert_eq!(question.id(), "1");
        assert!(!state.answered());
    }

    #[test]
    fn clock_freezes_once_completed() {
        let mut session = QuizSession::new(vec![text_question("1")]);
        session.tick();
        assert_eq!(session.elapsed_seconds(), 1);
        answer_current(&mut session);
        assert_eq!(session.advance(), Advance::Finished);
        session.tick();
        session.tick();
        assert_eq!(session.elapsed_seconds(), 1);
    }

    #[test]
    fn clock_survives_advance() {
        let mut session = session();
        session.tick();
        answer_current(&mut session);
        session.advance();
        session.tick();
        assert_eq!(session.elapsed_seconds(), 2);
    }

    #[test]
    fn jump_to_repositions_and_discards_progress() {
        let mut session = session();
        answer_current(&mut session);
        session.jump_to("3");
        assert_eq!(session.current_index(), 2);
        let (question, state) = session.current().expect("en curso");
        assert_eq!(question.id(), "3");
        assert!(!state.answered());

        // Volver a la primera: su respuesta previa se descarta
        session.jump_to("1");
        assert!(!session.current_state().expect("en curso").answered());
    }

    #[test]
    fn jump_to_reopens_a_completed_session() {
        let mut session = QuizSession::new(vec![text_question("1"), text_question("2")]);
        answer_current(&mut session);
        session.advance();
        answer_current(&mut session);
        assert_eq!(session.advance(), Advance::Finished);

        session.jump_to("2");
        assert!(!session.is_completed());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn jump_to_unknown_id_is_a_noop() {
        let mut session = session();
        session.jump_to("no-existe");
        assert_eq!(session.current_index(), 0);
        assert!(session.current().is_some());
    }
}
