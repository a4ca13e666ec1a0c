//! Multiple-choice quiz questions drawn from the catalog.

use std::fmt;

use itertools::Itertools;
use rand::Rng;
use tracing::{debug, instrument};

use crate::application::ordering::canonical_order;
use crate::application::{ApplicationError, ApplicationResult, Sampler};
use crate::domain::{Catalog, Rank, TimeDivision};

/// Stratigraphic terms and their definitions for definition questions.
pub const GLOSSARY: &[(&str, &str)] = &[
    ("Eon", "The largest division of geological time, spanning hundreds of millions to billions of years"),
    ("Era", "A major division of geological time, typically spanning tens to hundreds of millions of years"),
    ("Period", "A division of geological time that represents a system of rocks deposited during that time"),
    ("Epoch", "A subdivision of a geological period, typically spanning millions of years"),
    ("Age", "The smallest formally recognized division of geological time"),
    ("Mass Extinction", "An event where a large percentage of species die out in a relatively short period of geological time"),
    ("Stratigraphy", "The branch of geology concerned with the order and relative position of strata"),
    ("Supercontinent", "A landmass comprised of multiple continental cores, such as Pangaea"),
];

/// Distractor that is never a real era of the catalog.
const PRECAMBRIAN: &str = "Precambrian";

const MAX_DISTRACTORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Chronology,
    ParentDivision,
    Duration,
    Definition,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 4] = [
        QuestionKind::Chronology,
        QuestionKind::ParentDivision,
        QuestionKind::Duration,
        QuestionKind::Definition,
    ];
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionKind::Chronology => "chronology",
            QuestionKind::ParentDivision => "parent division",
            QuestionKind::Duration => "duration",
            QuestionKind::Definition => "definition",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.answer
    }

    /// Zero-based position of the answer among the options.
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.answer)
    }
}

/// A question of uniformly chosen kind.
pub fn random_question<R: Rng>(
    sampler: &mut Sampler<R>,
    catalog: &Catalog,
) -> ApplicationResult<QuizQuestion> {
    let pick = sampler.rng_mut().random_range(0..QuestionKind::ALL.len());
    generate_question(sampler, catalog, QuestionKind::ALL[pick])
}

#[instrument(level = "debug", skip(sampler, catalog))]
pub fn generate_question<R: Rng>(
    sampler: &mut Sampler<R>,
    catalog: &Catalog,
    kind: QuestionKind,
) -> ApplicationResult<QuizQuestion> {
    let question = match kind {
        QuestionKind::Chronology => chronology_question(sampler, catalog)?,
        QuestionKind::ParentDivision => parent_division_question(sampler, catalog)?,
        QuestionKind::Duration => duration_question(sampler, catalog)?,
        QuestionKind::Definition => definition_question(sampler),
    };
    debug!(prompt = %question.prompt, options = question.options.len(), "question generated");
    Ok(question)
}

fn not_enough(kind: QuestionKind) -> ApplicationError {
    ApplicationError::NotEnoughCandidates {
        what: format!("a {kind} question"),
    }
}

fn chronology_question<R: Rng>(
    sampler: &mut Sampler<R>,
    catalog: &Catalog,
) -> ApplicationResult<QuizQuestion> {
    let periods = sampler.sample(catalog, 4, Some(Rank::Period));
    let ordered = canonical_order(&periods);
    let [first, second, ..] = ordered.as_slice() else {
        return Err(not_enough(QuestionKind::Chronology));
    };
    let mut options = vec![first.name.clone(), second.name.clone()];
    sampler.shuffle(&mut options);
    Ok(QuizQuestion {
        kind: QuestionKind::Chronology,
        prompt: format!("Which came first: the {} or the {}?", options[0], options[1]),
        options,
        answer: first.name.clone(),
    })
}

fn parent_division_question<R: Rng>(
    sampler: &mut Sampler<R>,
    catalog: &Catalog,
) -> ApplicationResult<QuizQuestion> {
    let picked = sampler
        .sample_where(catalog, 1, |d| d.rank == Rank::Period && d.parent_id.is_some())
        .into_iter()
        .next()
        .ok_or_else(|| not_enough(QuestionKind::ParentDivision))?;
    let parent = catalog
        .parent_of(picked)
        .ok_or_else(|| not_enough(QuestionKind::ParentDivision))?;

    let mut distractors: Vec<String> = catalog
        .parent_of(parent)
        .map(|grandparent| catalog.children_of(&grandparent.id))
        .unwrap_or_default()
        .into_iter()
        .filter(|sibling| sibling.id != parent.id)
        .map(|sibling| sibling.name.clone())
        .collect();
    distractors.push(PRECAMBRIAN.to_string());
    sampler.shuffle(&mut distractors);
    distractors.truncate(MAX_DISTRACTORS);

    let mut options = vec![parent.name.clone()];
    options.extend(distractors);
    sampler.shuffle(&mut options);

    Ok(QuizQuestion {
        kind: QuestionKind::ParentDivision,
        prompt: format!(
            "Which {} does the {} {} belong to?",
            parent.rank, picked.name, picked.rank
        ),
        options,
        answer: parent.name.clone(),
    })
}

fn duration_question<R: Rng>(
    sampler: &mut Sampler<R>,
    catalog: &Catalog,
) -> ApplicationResult<QuizQuestion> {
    let picked: &TimeDivision = sampler
        .sample_where(catalog, 1, |d| d.duration() >= 1.0)
        .into_iter()
        .next()
        .ok_or_else(|| not_enough(QuestionKind::Duration))?;
    let duration = picked.duration();
    let answer = format_myr(duration);

    let rng = sampler.rng_mut();
    let factors = [
        0.5 + rng.random_range(0.0..0.2),
        1.3 + rng.random_range(0.0..0.2),
        0.7 + rng.random_range(0.0..0.2),
    ];
    let mut options: Vec<String> = std::iter::once(answer.clone())
        .chain(factors.iter().map(|f| format!("{}", (duration * f).round())))
        .unique()
        .collect();
    sampler.shuffle(&mut options);

    Ok(QuizQuestion {
        kind: QuestionKind::Duration,
        prompt: format!(
            "Approximately how many million years did the {} {} last?",
            picked.name, picked.rank
        ),
        options,
        answer,
    })
}

fn definition_question<R: Rng>(sampler: &mut Sampler<R>) -> QuizQuestion {
    let pick = sampler.rng_mut().random_range(0..GLOSSARY.len());
    let (term, definition) = GLOSSARY[pick];

    let mut wrong: Vec<String> = GLOSSARY
        .iter()
        .filter(|(t, _)| *t != term)
        .map(|(_, d)| d.to_string())
        .collect();
    sampler.shuffle(&mut wrong);
    wrong.truncate(MAX_DISTRACTORS);

    let mut options = vec![definition.to_string()];
    options.extend(wrong);
    sampler.shuffle(&mut options);

    QuizQuestion {
        kind: QuestionKind::Definition,
        prompt: format!("What is the definition of '{term}'?"),
        options,
        answer: definition.to_string(),
    }
}

/// Millions of years with at most two decimals and no trailing zeros.
fn format_myr(myr: f64) -> String {
    let s = format!("{myr:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_myr_trims_trailing_zeros() {
        assert_eq!(format_myr(541.0 - 485.4), "55.6");
        assert_eq!(format_myr(600.0), "600");
        assert_eq!(format_myr(2.5683), "2.57");
    }
}
