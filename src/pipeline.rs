//! Filtrado por categorías y agregados para los dos gráficos.
//!
//! Todo es puro y se recalcula entero en cada cambio de selección; con
//! decenas de preguntas no merece la pena mantenerlo incremental.

use crate::model::{Category, CategoryId, Difficulty, Question};
use crate::theme::{category_color, difficulty_color};
use crate::view_models::{CategoryAggregate, DifficultyAggregate};
use std::collections::BTreeSet;

/// Selección vacía = sin filtro (pasan todas). Si no, solo las preguntas cuya
/// categoría esté entre las seleccionadas, en el orden original.
pub fn filter_questions<'a>(
    questions: &'a [Question],
    categories: &[Category],
    selected: &BTreeSet<CategoryId>,
) -> Vec<&'a Question> {
    if selected.is_empty() {
        return questions.iter().collect();
    }

    let names: Vec<&str> = categories
        .iter()
        .filter(|c| selected.contains(&c.id))
        .map(|c| c.name.as_str())
        .collect();

    questions
        .iter()
        .filter(|q| names.contains(&q.category.as_str()))
        .collect()
}

pub fn aggregate_by_category(filtered: &[&Question]) -> Vec<CategoryAggregate> {
    // (nombre, cuenta) en orden de primera aparición
    let mut groups: Vec<(&str, usize)> = Vec::new();
    for q in filtered {
        match groups.iter_mut().find(|(name, _)| *name == q.category) {
            Some((_, count)) => *count += 1,
            None => groups.push((q.category.as_str(), 1)),
        }
    }

    let total: usize = groups.iter().map(|(_, count)| count).sum();

    groups
        .into_iter()
        .enumerate()
        .map(|(idx, (name, count))| CategoryAggregate {
            name: name.to_string(),
            count,
            percentage: percentage(count, total),
            color: category_color(idx),
        })
        .collect()
}

/// Siempre tres entradas: easy, medium, hard. Las dificultades desconocidas
/// se descartan aquí (pero sí cuentan en el agregado por categoría).
pub fn aggregate_by_difficulty(filtered: &[&Question]) -> [DifficultyAggregate; 3] {
    let mut counts = [0usize; 3];
    for q in filtered {
        if let Some(d) = Difficulty::parse(&q.difficulty) {
            counts[bucket_index(d)] += 1;
        }
    }

    Difficulty::ALL.map(|difficulty| DifficultyAggregate {
        difficulty,
        count: counts[bucket_index(difficulty)],
        color: difficulty_color(difficulty),
    })
}

fn bucket_index(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    }
}

/// round(100 * count / total), con .5 hacia arriba; 0 si no hay total.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::derive_categories;

    fn sample() -> Vec<Question> {
        let mut questions = Vec::new();
        for d in ["easy", "easy", "easy", "easy", "hard", "hard"] {
            questions.push(Question::new("History", d));
        }
        for _ in 0..4 {
            questions.push(Question::new("Science", "medium"));
        }
        questions
    }

    #[test]
    fn empty_selection_passes_everything() {
        let questions = sample();
        let categories = derive_categories(&questions);
        let filtered = filter_questions(&questions, &categories, &BTreeSet::new());
        assert_eq!(filtered.len(), 10);
    }

    #[test]
    fn history_only_scenario() {
        let questions = sample();
        let categories = derive_categories(&questions);
        let history = categories.iter().find(|c| c.name == "History").unwrap().id;

        let filtered = filter_questions(&questions, &categories, &BTreeSet::from([history]));
        assert_eq!(filtered.len(), 6);

        let by_category = aggregate_by_category(&filtered);
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].name, "History");
        assert_eq!(by_category[0].count, 6);
        assert_eq!(by_category[0].percentage, 100);

        let counts: Vec<(Difficulty, usize)> = aggregate_by_difficulty(&filtered)
            .iter()
            .map(|d| (d.difficulty, d.count))
            .collect();
        assert_eq!(
            counts,
            vec![
                (Difficulty::Easy, 4),
                (Difficulty::Medium, 0),
                (Difficulty::Hard, 2)
            ]
        );
    }

    #[test]
    fn unknown_selected_ids_are_ignored() {
        let questions = sample();
        let categories = derive_categories(&questions);
        let filtered = filter_questions(&questions, &categories, &BTreeSet::from([99]));
        assert!(filtered.is_empty());
    }

    #[test]
    fn thirds_round_independently() {
        let questions = vec![
            Question::new("A", "easy"),
            Question::new("B", "easy"),
            Question::new("C", "easy"),
        ];
        let refs: Vec<&Question> = questions.iter().collect();
        let pcts: Vec<u32> = aggregate_by_category(&refs)
            .iter()
            .map(|c| c.percentage)
            .collect();
        assert_eq!(pcts, vec![33, 33, 33]);
    }

    #[test]
    fn half_rounds_up() {
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(2, 3), 67);
    }

    #[test]
    fn colors_follow_group_order() {
        let questions: Vec<Question> = (0..14)
            .map(|i| Question::new(format!("Cat {i}"), "easy"))
            .collect();
        let refs: Vec<&Question> = questions.iter().collect();
        let agg = aggregate_by_category(&refs);
        assert_eq!(agg[0].color, category_color(0));
        assert_eq!(agg[12].color, agg[0].color);
        assert_eq!(agg[13].color, agg[1].color);
    }

    #[test]
    fn unknown_difficulty_only_counts_for_category() {
        let questions = vec![
            Question::new("Art", "EASY"),
            Question::new("Art", "insane"),
        ];
        let refs: Vec<&Question> = questions.iter().collect();
        assert_eq!(aggregate_by_category(&refs)[0].count, 2);
        let total: usize = aggregate_by_difficulty(&refs).iter().map(|d| d.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn empty_input() {
        assert!(aggregate_by_category(&[]).is_empty());
        let buckets = aggregate_by_difficulty(&[]);
        assert_eq!(buckets.len(), 3);
        assert!(buckets.iter().all(|b| b.count == 0));
        assert_eq!(buckets[2].difficulty, Difficulty::Hard);
    }
}
