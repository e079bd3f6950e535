use std::collections::HashMap;

use super::{
    forms::{
        require_form,
        PatternKey,
        Template,
        VerbForm,
    },
    roots::root_catalog,
};
use crate::core::{
    models::root_display,
    RootEntry,
    SarfError,
    TenseKind,
    VowelClass,
};

/// All conjugations of one root in one form. `None` entries are tenses the
/// form does not have, not failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjugationSet {
    pub form: u8,
    pub form_name: &'static str,
    pub form_description: &'static str,
    pub conjugations: HashMap<TenseKind, Option<String>>,
}

/// Substitute the three root letters into a template. The template alphabet
/// uses ف, ع and ل as metavariables for the first, second and third root
/// letter; every other character (diacritics, affixes) passes through.
///
/// One synchronized pass over the template: a letter written by an earlier
/// substitution is never re-scanned as a placeholder, so roots whose letters
/// happen to be placeholder glyphs themselves conjugate correctly.
pub fn conjugate(root: &[char], pattern: &str) -> Result<String, SarfError> {
    if root.len() != 3 {
        return Err(SarfError::InvalidRoot(root.len()));
    }
    let (first, second, third) = (root[0], root[1], root[2]);

    let word = pattern
        .chars()
        .map(|glyph| match glyph {
            'ف' => first,
            'ع' => second,
            'ل' => third,
            other => other,
        })
        .collect();

    Ok(word)
}

fn variant(variants: &[(PatternKey, &'static str)], key: PatternKey) -> Option<&'static str> {
    variants.iter().find(|(k, _)| *k == key).map(|(_, pattern)| *pattern)
}

fn first_variant(variants: &[(PatternKey, &'static str)]) -> Option<&'static str> {
    variants.first().map(|(_, pattern)| *pattern)
}

/// Pick the Form I template matching the root's vowel class.
///
/// Perfect tense follows the root's perfect vowel, imperfect and imperative
/// follow its imperfect vowel. Without root data the perfect defaults to the
/// fatha variant and imperfect/imperative to the damma variant; a missing
/// key falls back to that default, then to the first variant on offer.
/// Participles and the verbal noun are not vowel-variant and take the first
/// variant.
pub fn resolve_form_i_pattern(
    tense: TenseKind,
    variants: &[(PatternKey, &'static str)],
    root_data: Option<&RootEntry>,
) -> Option<&'static str> {
    let default_class = match tense {
        TenseKind::Perfect => VowelClass::Fatha,
        TenseKind::Imperfect | TenseKind::Imperative => VowelClass::Damma,
        _ => return first_variant(variants),
    };

    let class = match root_data {
        None => default_class,
        Some(root) => match tense {
            TenseKind::Perfect => root.perfect_vowel,
            // Imperfect or imperative; every other tense returned above.
            _ => root.imperfect_vowel,
        },
    };

    variant(variants, PatternKey::Class(class))
        .or_else(|| variant(variants, PatternKey::Class(default_class)))
        .or_else(|| first_variant(variants))
}

/// The template string shown on the answer side of a card.
///
/// For the vowel-variant Form I tenses this prefers the generic `Display`
/// pattern, telling the learner the middle vowel depends on the root rather
/// than on the form.
pub fn display_pattern(
    form: &VerbForm,
    tense: TenseKind,
    root_data: Option<&RootEntry>,
) -> Option<&'static str> {
    match *form.template(tense) {
        Template::Unavailable => None,
        Template::Literal(pattern) => Some(pattern),
        Template::VowelVariant(variants) => {
            let prefer_display = matches!(
                tense,
                TenseKind::Perfect | TenseKind::Imperfect | TenseKind::Imperative
            );
            if prefer_display {
                if let Some(pattern) = variant(variants, PatternKey::Display) {
                    return Some(pattern);
                }
            }
            resolve_form_i_pattern(tense, variants, root_data)
        }
    }
}

/// Conjugate a root through all eight tenses of one form.
///
/// Every tense gets an entry: `Some(word)` where the form has a template,
/// `None` where it does not (Form VII/IX passives, Form IX imperative).
pub fn generate_conjugations(
    root: &[char],
    form_number: u8,
    root_data: Option<&RootEntry>,
) -> Result<ConjugationSet, SarfError> {
    let form = require_form(form_number)?;

    let mut conjugations = HashMap::with_capacity(TenseKind::ALL.len());
    for tense in TenseKind::ALL {
        let word = match *form.template(tense) {
            Template::Unavailable => None,
            Template::Literal(pattern) => Some(conjugate(root, pattern)?),
            Template::VowelVariant(variants) => {
                match resolve_form_i_pattern(tense, variants, root_data) {
                    Some(pattern) => Some(conjugate(root, pattern)?),
                    None => None,
                }
            }
        };
        conjugations.insert(tense, word);
    }

    Ok(ConjugationSet {
        form: form.number,
        form_name: form.name,
        form_description: form.description,
        conjugations,
    })
}

/// An example word for the reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub word: String,
    pub root_display: String,
    pub gloss: String,
}

const EXAMPLE_ROOT_COUNT: usize = 5;

/// Conjugate a fixed prefix of the catalog into a form/tense, skipping roots
/// that fail or lack the tense.
pub fn examples(form_number: u8, tense: TenseKind) -> Vec<Example> {
    let mut examples = Vec::new();

    for entry in root_catalog().iter().take(EXAMPLE_ROOT_COUNT) {
        let set = match generate_conjugations(&entry.letters, form_number, Some(entry)) {
            Ok(set) => set,
            Err(_) => continue,
        };
        if let Some(Some(word)) = set.conjugations.get(&tense) {
            examples.push(Example {
                word: word.clone(),
                root_display: root_display(&entry.letters),
                gloss: entry.gloss.to_string(),
            });
        }
    }

    examples
}
