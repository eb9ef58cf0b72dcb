// src/data.rs

use crate::model::{Category, CategoryId, Question};
use crate::source::FetchError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Convierte el cuerpo JSON de la API en preguntas listas para el dashboard.
///
/// El cuerpo tiene que ser un objeto con una lista `results`; cualquier otra
/// forma se considera una respuesta inválida. Los registros mal formados no se
/// rechazan, se coaccionan a texto.
pub fn parse_questions(body: &str) -> Result<Vec<Question>, FetchError> {
    let payload: Value = serde_json::from_str(body)?;
    let results = payload
        .get("results")
        .and_then(Value::as_array)
        .ok_or(FetchError::MissingResults)?;

    Ok(results.iter().map(decode_question).collect())
}

fn decode_question(raw: &Value) -> Question {
    // Un registro que no es objeto no tiene campos: ambos quedan sin definir
    Question::deserialize(raw).unwrap_or_else(|_| Question::new(undefined_text(), undefined_text()))
}

/// Texto de un campo ausente.
pub fn undefined_text() -> String {
    "undefined".to_owned()
}

/// Categoría coaccionada a texto y con entidades HTML decodificadas.
pub fn category_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(decode_entities(&coerce_text(Some(&value))))
}

/// Campo coaccionado a texto, sin más transformaciones.
pub fn plain_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_text(Some(&value)))
}

/// Representación textual de un campo JSON, la misma que da `String(valor)`
/// en un navegador: `undefined`, `null`, literales tal cual, listas unidas por
/// comas y `[object Object]` para objetos.
pub fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None => undefined_text(),
        Some(value) => value_text(value),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

/// `&amp;` → `&`, `&#039;` → `'`, etc.
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Categorías distintas en orden de primera aparición, con ids desde 1.
pub fn derive_categories(questions: &[Question]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for q in questions {
        if categories.iter().any(|c| c.name == q.category) {
            continue;
        }
        let id = categories.len() as CategoryId + 1;
        categories.push(Category {
            id,
            name: q.category.clone(),
        });
    }
    categories
}
