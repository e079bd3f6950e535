use rand::{
    seq::IndexedRandom,
    Rng,
};

use crate::{
    core::{
        models::root_display,
        Answer,
        PracticeCard,
        Question,
        RootEntry,
        SarfError,
        TenseKind,
    },
    morphology::{
        canonical_root,
        display_pattern,
        generate_conjugations,
        require_form,
        root_catalog,
    },
};

/// How a session chooses its roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningMode {
    /// Draw real roots from the catalog.
    Mixed,
    /// Drill the bare templates with the canonical ف-ع-ل root.
    Patterns,
}

impl Default for LearningMode {
    fn default() -> Self {
        LearningMode::Mixed
    }
}

/// Cap on discarded draws before a card generation gives up. A draw is
/// discarded when the drawn tense does not exist for the drawn form; with
/// any workable selection a handful of redraws is plenty.
pub const MAX_DRAW_ATTEMPTS: usize = 128;

/// Draw one practice card with the thread rng.
pub fn generate_practice_card(
    forms: &[u8],
    tenses: &[TenseKind],
    mode: LearningMode,
) -> Result<PracticeCard, SarfError> {
    generate_practice_card_with(&mut rand::rng(), forms, tenses, mode)
}

/// Draw one practice card from a caller-supplied rng.
///
/// The form is drawn uniformly from `forms` FIRST and the root second, from
/// the catalog subset attesting that form. Drawing root-first would bias the
/// session toward forms with many attested roots; form-first gives every
/// allowed form equal weight. Inapplicable form/tense draws are discarded
/// and retried from scratch up to `MAX_DRAW_ATTEMPTS`.
pub fn generate_practice_card_with<R: Rng + ?Sized>(
    rng: &mut R,
    forms: &[u8],
    tenses: &[TenseKind],
    mode: LearningMode,
) -> Result<PracticeCard, SarfError> {
    for _ in 0..MAX_DRAW_ATTEMPTS {
        if let Some(card) = draw(rng, forms, tenses, mode)? {
            return Ok(card);
        }
    }

    Err(SarfError::NoValidCombination)
}

/// One sampling round. `Ok(None)` means the tense drawn does not exist for
/// the form drawn; the caller redraws.
fn draw<R: Rng + ?Sized>(
    rng: &mut R,
    forms: &[u8],
    tenses: &[TenseKind],
    mode: LearningMode,
) -> Result<Option<PracticeCard>, SarfError> {
    let form_number = *forms.choose(rng).ok_or(SarfError::NoValidCombination)?;

    let entry: &RootEntry = match mode {
        LearningMode::Patterns => canonical_root(),
        LearningMode::Mixed => {
            let candidates: Vec<&RootEntry> =
                root_catalog().iter().filter(|entry| entry.supports_form(form_number)).collect();
            *candidates.choose(rng).ok_or(SarfError::NoValidCombination)?
        }
    };

    let tense = *tenses.choose(rng).ok_or(SarfError::NoValidCombination)?;

    let form = require_form(form_number)?;
    let set = generate_conjugations(&entry.letters, form_number, Some(entry))?;

    let word = match set.conjugations.get(&tense).and_then(|word| word.clone()) {
        Some(word) => word,
        None => return Ok(None),
    };
    let pattern = match display_pattern(form, tense, Some(entry)) {
        Some(pattern) => pattern,
        None => return Ok(None),
    };

    Ok(Some(PracticeCard {
        question: Question { word },
        answer: Answer {
            root_display: root_display(&entry.letters),
            form: set.form,
            form_name: set.form_name.to_string(),
            form_description: set.form_description.to_string(),
            tense,
            tense_name: tense.label().to_string(),
            pattern: pattern.to_string(),
            gloss: entry.gloss.to_string(),
        },
    }))
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    #[test]
    fn test_patterns_mode_uses_canonical_root() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let card = generate_practice_card_with(
                &mut rng,
                &[3],
                &[TenseKind::Perfect],
                LearningMode::Patterns,
            )
            .unwrap();
            assert_eq!(card.answer.root_display, "ف-ع-ل");
            assert_eq!(card.question.word, "فَاعَلَ");
            assert_eq!(card.answer.gloss, "to do");
        }
    }

    #[test]
    fn test_mixed_mode_only_draws_roots_attesting_the_form() {
        // Form IX is attested by exactly four catalog roots; their perfects
        // are the only words a Form IX perfect card can show.
        let expected = ["اِفْعَلَّ", "اِحْمَرَّ", "اِسْوَدَّ", "اِبْيَضَّ"];

        let mut rng = StdRng::seed_from_u64(22);
        for _ in 0..100 {
            let card = generate_practice_card_with(
                &mut rng,
                &[9],
                &[TenseKind::Perfect],
                LearningMode::Mixed,
            )
            .unwrap();
            assert_eq!(card.answer.form, 9);
            assert!(
                expected.contains(&card.question.word.as_str()),
                "unexpected word {}",
                card.question.word
            );
        }
    }

    #[test]
    fn test_form_first_draws_are_fair() {
        // Form II is attested by all 26 roots, Form IX by only 4. Form-first
        // sampling must still split draws evenly between the two.
        let mut rng = StdRng::seed_from_u64(33);
        let draws = 4000;
        let mut form_two = 0;

        for _ in 0..draws {
            let card = generate_practice_card_with(
                &mut rng,
                &[2, 9],
                &[TenseKind::Perfect],
                LearningMode::Mixed,
            )
            .unwrap();
            if card.answer.form == 2 {
                form_two += 1;
            }
        }

        let share = form_two as f64 / draws as f64;
        assert!((0.45..=0.55).contains(&share), "form 2 share {} not near 1:1", share);
    }

    #[test]
    fn test_inapplicable_tense_draws_are_retried() {
        // Form VII keeps its imperative but has no passives; with both
        // tenses allowed every card must land on the imperative.
        let mut rng = StdRng::seed_from_u64(44);
        for _ in 0..50 {
            let card = generate_practice_card_with(
                &mut rng,
                &[7],
                &[TenseKind::PassivePerfect, TenseKind::Imperative],
                LearningMode::Mixed,
            )
            .unwrap();
            assert_eq!(card.answer.tense, TenseKind::Imperative);
        }
    }

    #[test]
    fn test_impossible_selection_fails_fast() {
        let mut rng = StdRng::seed_from_u64(55);
        let result = generate_practice_card_with(
            &mut rng,
            &[9],
            &[TenseKind::Imperative],
            LearningMode::Mixed,
        );
        assert_eq!(result, Err(SarfError::NoValidCombination));
    }

    #[test]
    fn test_form_i_card_shows_generic_pattern() {
        let mut rng = StdRng::seed_from_u64(66);
        let card = generate_practice_card_with(
            &mut rng,
            &[1],
            &[TenseKind::Perfect],
            LearningMode::Mixed,
        )
        .unwrap();
        assert_eq!(card.answer.pattern, "فَعلَ");
        assert_eq!(card.answer.tense_name, TenseKind::Perfect.label());
    }

    #[test]
    fn test_cards_are_self_contained_values() {
        let mut rng = StdRng::seed_from_u64(77);
        let card = generate_practice_card_with(
            &mut rng,
            &[4],
            &[TenseKind::VerbalNoun],
            LearningMode::Mixed,
        )
        .unwrap();

        let json = serde_json::to_string(&card).unwrap();
        let restored: PracticeCard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, card);
    }
}
