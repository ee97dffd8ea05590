// src/quiz.rs

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::{
    config::OPTION_COUNT,
    error::AppError,
    models::{question::Question, word::Vocabulary},
};

/// Builds a random multiple-choice question.
///
/// * Picks the correct entry from the category pool (or the whole vocabulary).
/// * Samples distractors from the same pool first, then tops up from the rest of
///   the vocabulary when the pool is too small.
/// * Options are distinct strings; there are fewer than `OPTION_COUNT` only when the
///   whole vocabulary has fewer distinct words.
pub fn generate_question<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    category: Option<&str>,
    rng: &mut R,
) -> Result<Question, AppError> {
    let pool = match category {
        Some(category) => {
            let pool = vocabulary.in_category(category);
            if pool.is_empty() {
                return Err(AppError::NotFound("Category not found".to_string()));
            }
            pool
        }
        None => vocabulary.entries().iter().collect(),
    };

    let correct = pool
        .choose(rng)
        .copied()
        .ok_or_else(|| AppError::InternalServerError("Vocabulary is empty".to_string()))?;

    let wanted = OPTION_COUNT - 1;

    // Phase one: distractors from the same pool.
    let pool_words = distinct_words(pool.iter().map(|e| e.word.as_str()), &[correct.word.as_str()]);
    let mut distractors: Vec<&str> = pool_words.choose_multiple(rng, wanted).copied().collect();

    // Phase two: pad from the whole vocabulary.
    if distractors.len() < wanted {
        let mut excluded = distractors.clone();
        excluded.push(correct.word.as_str());
        let remaining = distinct_words(
            vocabulary.entries().iter().map(|e| e.word.as_str()),
            &excluded,
        );
        let missing = wanted - distractors.len();
        distractors.extend(remaining.choose_multiple(rng, missing).copied());
    }

    let mut options: Vec<String> = distractors.into_iter().map(str::to_string).collect();
    options.push(correct.word.clone());
    options.shuffle(rng);

    Ok(Question {
        id: correct.word.clone(),
        definition: correct.definition.clone(),
        options,
    })
}

/// Strict string match between the echoed question id and the chosen option.
pub fn is_correct(id: &str, choice: &str) -> bool {
    id == choice
}

/// First occurrence of each word, in order, skipping anything in `excluded`.
fn distinct_words<'a>(words: impl Iterator<Item = &'a str>, excluded: &[&str]) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = excluded.iter().copied().collect();
    words.filter(|w| seen.insert(*w)).collect()
}
