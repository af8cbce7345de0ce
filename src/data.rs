use crate::model::Question;

/// Carga el banco de preguntas desde el YAML embebido.
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/quiz_questions.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_embedded_bank_parses_and_covers_every_kind() {
        let questions = read_questions_embedded();
        assert_eq!(questions.len(), 11);
        assert!(questions.iter().any(|q| matches!(q, Question::Text { .. })));
        assert!(questions.iter().any(|q| matches!(q, Question::Image { .. })));
        assert!(questions.iter().any(|q| matches!(q, Question::Video { .. })));
        assert!(questions.iter().any(|q| matches!(q, Question::Audio { .. })));
        assert!(
            questions
                .iter()
                .any(|q| matches!(q, Question::ImageChoice { .. }))
        );
        assert!(
            questions
                .iter()
                .any(|q| matches!(q, Question::MultiAnswer { .. }))
        );
        assert!(
            questions
                .iter()
                .any(|q| matches!(q, Question::OrderSelection { .. }))
        );
        assert!(
            questions
                .iter()
                .any(|q| matches!(q, Question::CharacterOrder { .. }))
        );
        assert!(
            questions
                .iter()
                .any(|q| matches!(q, Question::NumberInput { .. }))
        );
        assert!(
            questions
                .iter()
                .any(|q| matches!(q, Question::Combination { .. }))
        );
    }

    #[test]
    fn question_ids_are_unique() {
        let questions = read_questions_embedded();
        let mut ids: Vec<&str> = questions.iter().map(|q| q.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), questions.len());
    }
}
