use serde::{Deserialize, Serialize};

/// Opción de respuesta con texto.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// Opción de respuesta cuya etiqueta es una imagen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageOption {
    pub id: String,
    pub image_url: String,
    pub image_alt: Option<String>,
    #[serde(default)]
    pub is_correct: bool,
}

/// Elemento de una lista ordenable. `order` es la posición correcta (base 1).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: String,
    pub text: String,
    pub order: usize,
}

/// Elemento de una de las dos columnas de una pregunta de combinación.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PairItem {
    pub id: String,
    pub text: String,
}

/// Emparejamiento izquierda-derecha.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    pub left_id: String,
    pub right_id: String,
}

impl Pair {
    pub fn new(left_id: impl Into<String>, right_id: impl Into<String>) -> Self {
        Self {
            left_id: left_id.into(),
            right_id: right_id.into(),
        }
    }
}

/// Una pregunta del banco. Unión etiquetada por `type`, una variante por
/// tipo de pregunta; el despacho es siempre un `match` exhaustivo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Question {
    Text {
        id: String,
        question: String,
        choices: Vec<Choice>,
    },
    Image {
        id: String,
        question: String,
        image_url: String,
        image_alt: Option<String>,
        choices: Vec<Choice>,
    },
    Video {
        id: String,
        question: String,
        video_url: String,
        poster: Option<String>,
        choices: Vec<Choice>,
    },
    Audio {
        id: String,
        question: String,
        audio_url: String,
        choices: Vec<Choice>,
    },
    ImageChoice {
        id: String,
        question: String,
        choices: Vec<ImageOption>,
    },
    MultiAnswer {
        id: String,
        question: String,
        choices: Vec<Choice>,
    },
    OrderSelection {
        id: String,
        question: String,
        choices: Vec<OrderItem>,
    },
    CharacterOrder {
        id: String,
        question: String,
        characters: Vec<char>,
        correct_answer: String,
        image_url: Option<String>,
        image_alt: Option<String>,
    },
    NumberInput {
        id: String,
        question: String,
        correct_answer: u32,
        max_digits: usize,
        image_url: Option<String>,
        image_alt: Option<String>,
    },
    Combination {
        id: String,
        question: String,
        left_items: Vec<PairItem>,
        right_items: Vec<PairItem>,
        correct_combinations: Vec<Pair>,
        image_url: Option<String>,
        image_alt: Option<String>,
    },
}

impl Question {
    pub fn id(&self) -> &str {
        match self {
            Question::Text { id, .. }
            | Question::Image { id, .. }
            | Question::Video { id, .. }
            | Question::Audio { id, .. }
            | Question::ImageChoice { id, .. }
            | Question::MultiAnswer { id, .. }
            | Question::OrderSelection { id, .. }
            | Question::CharacterOrder { id, .. }
            | Question::NumberInput { id, .. }
            | Question::Combination { id, .. } => id,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Question::Text { question, .. }
            | Question::Image { question, .. }
            | Question::Video { question, .. }
            | Question::Audio { question, .. }
            | Question::ImageChoice { question, .. }
            | Question::MultiAnswer { question, .. }
            | Question::OrderSelection { question, .. }
            | Question::CharacterOrder { question, .. }
            | Question::NumberInput { question, .. }
            | Question::Combination { question, .. } => question,
        }
    }

    /// Las cuatro variantes de elección única comparten la misma lista de
    /// opciones; el resto no tiene `choices` de este tipo.
    pub fn single_choices(&self) -> Option<&[Choice]> {
        match self {
            Question::Text { choices, .. }
            | Question::Image { choices, .. }
            | Question::Video { choices, .. }
            | Question::Audio { choices, .. } => Some(choices),
            _ => None,
        }
    }
}

/// Pantalla activa de la aplicación.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Quiz,
    Complete,
}
