use serde::Deserialize;
use serde_json::{Map, Value};

pub type CategoryId = u32;

/// Pregunta tal y como llega de la API, con la categoría ya decodificada.
///
/// Los campos mal tipados no se rechazan: se pasan a texto igual que lo haría
/// `String(valor)` en el navegador (ver [`crate::data::coerce_text`]).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    #[serde(
        default = "crate::data::undefined_text",
        deserialize_with = "crate::data::category_text"
    )]
    pub category: String,
    #[serde(
        default = "crate::data::undefined_text",
        deserialize_with = "crate::data::plain_text"
    )]
    pub difficulty: String,
    // Resto de campos (type, question, correct_answer...), opacos para el dashboard
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    pub fn new(category: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            difficulty: difficulty.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Orden fijo de los buckets del gráfico de barras.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Coincidencia insensible a mayúsculas; cualquier otro valor no tiene bucket.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Preguntas y categorías de un mismo ciclo de carga. Se reemplaza entero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub questions: Vec<Question>,
    pub categories: Vec<Category>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
