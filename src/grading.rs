//! Corrección pura por tipo de pregunta.
//!
//! Ninguna función falla ante entradas con forma incorrecta: una respuesta
//! incompleta o con ids desconocidos se corrige como incorrecta, nunca como
//! error.

use crate::model::{Choice, ImageOption, OrderItem, Pair, PairItem};
use std::collections::HashSet;

/// Correcta si la opción con ese id existe y está marcada como correcta.
/// Un id desconocido es simplemente una respuesta errónea.
pub fn grade_single_choice(choices: &[Choice], choice_id: &str) -> bool {
    choices.iter().any(|c| c.id == choice_id && c.is_correct)
}

pub fn grade_image_choice(options: &[ImageOption], choice_id: &str) -> bool {
    options.iter().any(|o| o.id == choice_id && o.is_correct)
}

/// Correcta si el conjunto enviado coincide exactamente con el conjunto de
/// opciones correctas: ni una más, ni una menos.
pub fn grade_multi_answer(choices: &[Choice], selected: &[String]) -> bool {
    let correct: HashSet<&str> = choices
        .iter()
        .filter(|c| c.is_correct)
        .map(|c| c.id.as_str())
        .collect();
    let submitted: HashSet<&str> = selected.iter().map(String::as_str).collect();
    submitted.len() == selected.len() && submitted == correct
}

/// Correcta si la lista enviada es una permutación completa de los elementos
/// y cada id cae en su posición objetivo (base 1).
pub fn grade_order(items: &[OrderItem], submitted: &[String]) -> bool {
    if submitted.len() != items.len() {
        return false;
    }
    let unique: HashSet<&str> = submitted.iter().map(String::as_str).collect();
    if unique.len() != submitted.len() {
        return false;
    }
    submitted.iter().enumerate().all(|(idx, id)| {
        items
            .iter()
            .find(|item| item.id == *id)
            .is_some_and(|item| item.order == idx + 1)
    })
}

/// Comparación exacta, sensible a mayúsculas y sin recortes.
pub fn grade_character_sequence(correct_answer: &str, submitted: &str) -> bool {
    submitted == correct_answer
}

/// Correcta si cada id izquierdo aparece emparejado exactamente una vez y el
/// conjunto de parejas coincide con las correctas. La doble condición evita
/// dar por buena una entrega parcial que sea subconjunto de la solución.
pub fn grade_combination(left_items: &[PairItem], correct: &[Pair], submitted: &[Pair]) -> bool {
    let every_left_once = left_items
        .iter()
        .all(|item| submitted.iter().filter(|p| p.left_id == item.id).count() == 1);
    if !every_left_once {
        return false;
    }
    let submitted_set: HashSet<(&str, &str)> = submitted
        .iter()
        .map(|p| (p.left_id.as_str(), p.right_id.as_str()))
        .collect();
    let correct_set: HashSet<(&str, &str)> = correct
        .iter()
        .map(|p| (p.left_id.as_str(), p.right_id.as_str()))
        .collect();
    submitted_set == correct_set
}

/// Interpreta la cadena como entero decimal no negativo. Cadena vacía o con
/// caracteres no numéricos cuenta como "sin respuesta válida": incorrecta.
pub fn grade_number(correct_answer: u32, digits: &str) -> bool {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    digits
        .parse::<u32>()
        .map(|value| value == correct_answer)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<Choice> {
        vec![
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
        ]
    }

    fn order_items() -> Vec<OrderItem> {
        ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, id)| OrderItem {
                id: (*id).into(),
                text: format!("paso {}", i + 1),
                order: i + 1,
            })
            .collect()
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn single_choice_accepts_only_the_marked_option() {
        let choices = vec![
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
        ];
        assert!(grade_single_choice(&choices, "b"));
        assert!(!grade_single_choice(&choices, "a"));
    }

    #[test]
    fn single_choice_unknown_id_is_wrong_not_an_error() {
        let choices = vec![Choice {
            id: "a".into(),
            text: "sí".into(),
            is_correct: true,
        }];
        assert!(!grade_single_choice(&choices, "zzz"));
    }

    #[test]
    fn multi_answer_requires_the_exact_set() {
        let choices = choices();
        assert!(grade_multi_answer(&choices, &ids(&["a", "b"])));
        // El orden de selección no importa
        assert!(grade_multi_answer(&choices, &ids(&["b", "a"])));
        // Subconjunto estricto
        assert!(!grade_multi_answer(&choices, &ids(&["a"])));
        // Superconjunto
        assert!(!grade_multi_answer(&choices, &ids(&["a", "b", "c"])));
        // Disjunto
        assert!(!grade_multi_answer(&choices, &ids(&["c"])));
        // Vacío: se corrige con normalidad, sin caso especial
        assert!(!grade_multi_answer(&choices, &[]));
    }

    #[test]
    fn order_accepts_exact_positions_only() {
        let items = order_items();
        assert!(grade_order(&items, &ids(&["a", "b", "c"])));
        assert!(!grade_order(&items, &ids(&["b", "a", "c"])));
    }

    #[test]
    fn order_rejects_incomplete_or_duplicated_lists() {
        let items = order_items();
        assert!(!grade_order(&items, &ids(&["a", "b"])));
        assert!(!grade_order(&items, &ids(&["a", "a", "c"])));
        assert!(!grade_order(&items, &ids(&["a", "b", "zzz"])));
    }

    #[test]
    fn character_sequence_is_case_sensitive_and_exact() {
        assert!(grade_character_sequence("PYTHON", "PYTHON"));
        assert!(!grade_character_sequence("PYTHON", "python"));
        assert!(!grade_character_sequence("PYTHON", "PYTHO"));
        assert!(!grade_character_sequence("PYTHON", "PYTHON "));
    }

    fn left_items() -> Vec<PairItem> {
        vec![
            PairItem {
                id: "l1".into(),
                text: "JavaScript".into(),
            },
            PairItem {
                id: "l2".into(),
                text: "SQL".into(),
            },
        ]
    }

    fn correct_pairs() -> Vec<Pair> {
        vec![Pair::new("l1", "r2"), Pair::new("l2", "r1")]
    }

    #[test]
    fn combination_accepts_the_full_bijection() {
        let submitted = vec![Pair::new("l2", "r1"), Pair::new("l1", "r2")];
        assert!(grade_combination(&left_items(), &correct_pairs(), &submitted));
    }

    #[test]
    fn combination_rejects_crossed_pairs() {
        let submitted = vec![Pair::new("l1", "r1"), Pair::new("l2", "r2")];
        assert!(!grade_combination(&left_items(), &correct_pairs(), &submitted));
    }

    #[test]
    fn combination_rejects_partial_submissions() {
        // Subconjunto de la solución: sin la guarda de "todo emparejado"
        // pasaría por correcta.
        let submitted = vec![Pair::new("l1", "r2")];
        assert!(!grade_combination(&left_items(), &correct_pairs(), &submitted));
    }

    #[test]
    fn combination_rejects_a_left_id_paired_twice() {
        let submitted = vec![
            Pair::new("l1", "r2"),
            Pair::new("l1", "r1"),
            Pair::new("l2", "r1"),
        ];
        assert!(!grade_combination(&left_items(), &correct_pairs(), &submitted));
    }

    #[test]
    fn number_parses_and_compares() {
        assert!(grade_number(1024, "1024"));
        assert!(!grade_number(1024, "102"));
        assert!(!grade_number(1024, "2024"));
    }

    #[test]
    fn number_treats_garbage_as_no_answer() {
        assert!(!grade_number(1024, ""));
        assert!(!grade_number(1024, "12a4"));
        assert!(!grade_number(1024, "-1024"));
        // Desbordamiento de u32: incorrecta, nunca pánico
        assert!(!grade_number(1024, "99999999999999999999"));
    }
}
