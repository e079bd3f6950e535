use rand::Rng;
use serde::{
    Deserialize,
    Serialize,
};

use super::sampler::{
    generate_practice_card_with,
    LearningMode,
};
use crate::{
    core::{
        PracticeCard,
        SarfError,
        TenseKind,
    },
    morphology::form_info,
};

pub const DEFAULT_CARD_COUNT: usize = 20;

/// A fixed-length run of practice cards. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub cards: Vec<PracticeCard>,
}

impl Session {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&PracticeCard> {
        self.cards.get(index)
    }
}

/// True if at least one selected form has a template for at least one
/// selected tense. Checked before sampling so that a dead selection is
/// reported immediately instead of after a futile retry loop per card.
pub fn selection_is_satisfiable(forms: &[u8], tenses: &[TenseKind]) -> bool {
    forms.iter().any(|&form_number| {
        form_info(form_number).is_some_and(|form| {
            tenses.iter().any(|&tense| form.template(tense).is_available())
        })
    })
}

/// Build a session with the thread rng.
pub fn build_session(
    forms: &[u8],
    tenses: &[TenseKind],
    mode: LearningMode,
    card_count: usize,
) -> Result<Session, SarfError> {
    build_session_with(&mut rand::rng(), forms, tenses, mode, card_count)
}

/// Build a session of exactly `card_count` cards from a caller-supplied rng.
pub fn build_session_with<R: Rng + ?Sized>(
    rng: &mut R,
    forms: &[u8],
    tenses: &[TenseKind],
    mode: LearningMode,
    card_count: usize,
) -> Result<Session, SarfError> {
    if forms.is_empty() || tenses.is_empty() || !selection_is_satisfiable(forms, tenses) {
        return Err(SarfError::NoValidCombination);
    }

    let mut cards = Vec::with_capacity(card_count);
    while cards.len() < card_count {
        cards.push(generate_practice_card_with(rng, forms, tenses, mode)?);
    }

    Ok(Session { cards })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    pub fn accuracy_percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            (self.correct as f32 / self.total as f32 * 100.0).round() as u32
        }
    }
}

/// Where the learner is within the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// Question shown, answer hidden.
    Prompt,
    /// Answer shown, waiting for a self-assessment.
    Revealed,
    /// Assessment recorded, waiting to advance.
    Marked,
}

/// Traversal state over a session: current card, reveal phase and running
/// score. A plain value; every user action maps to a transition that
/// returns the next state, and transitions fired from the wrong phase
/// return the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub index: usize,
    pub phase: CardPhase,
    pub score: Score,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState { index: 0, phase: CardPhase::Prompt, score: Score::default() }
    }

    pub fn reveal(self) -> Self {
        match self.phase {
            CardPhase::Prompt => SessionState { phase: CardPhase::Revealed, ..self },
            _ => self,
        }
    }

    pub fn mark(self, correct: bool) -> Self {
        match self.phase {
            CardPhase::Revealed => SessionState {
                phase: CardPhase::Marked,
                score: Score {
                    correct: self.score.correct + u32::from(correct),
                    total: self.score.total + 1,
                },
                ..self
            },
            _ => self,
        }
    }

    pub fn advance(self) -> Self {
        match self.phase {
            CardPhase::Marked => {
                SessionState { index: self.index + 1, phase: CardPhase::Prompt, ..self }
            }
            _ => self,
        }
    }

    pub fn finished(&self, card_count: usize) -> bool {
        self.index >= card_count
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
