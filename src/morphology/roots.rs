use std::sync::OnceLock;

use regex::Regex;

use crate::core::{
    RootEntry,
    VowelClass::{
        Damma,
        Fatha,
        Kasra,
    },
};

/// Curated practice roots. Sound triliteral roots only; weak/hollow/doubled
/// roots would need phonological rules the substitution engine does not have.
const ROOT_CATALOG: &[RootEntry] = &[
    // Basic verbs, well-attested across multiple forms
    RootEntry {
        letters: ['ف', 'ع', 'ل'],
        gloss: "to do",
        perfect_vowel: Fatha,
        imperfect_vowel: Damma,
        valid_forms: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], // canonical, works in all forms
    },
    RootEntry {
        letters: ['ك', 'ت', 'ب'],
        gloss: "to write",
        perfect_vowel: Fatha,
        imperfect_vowel: Damma,
        valid_forms: &[1, 2, 3, 4, 5, 6, 8, 10],
    },
    RootEntry {
        letters: ['ق', 'ر', 'أ'],
        gloss: "to read",
        perfect_vowel: Fatha,
        imperfect_vowel: Fatha,
        valid_forms: &[1, 2, 3, 4, 5, 6, 8, 10],
    },
    RootEntry {
        letters: ['د', 'ر', 'س'],
        gloss: "to study",
        perfect_vowel: Fatha,
        imperfect_vowel: Damma,
        valid_forms: &[1, 2, 3, 4, 5, 6, 8, 10],
    },
    RootEntry {
        letters: ['ع', 'م', 'ل'],
        gloss: "to work",
        perfect_vowel: Kasra,
        imperfect_vowel: Fatha,
        valid_forms: &[1, 2, 3, 4, 5, 6, 8, 10],
    },
    // Movement verbs
    RootEntry {
        letters: ['خ', 'ر', 'ج'],
        gloss: "to go out",
        perfect_vowel: Fatha,
        imperfect_vowel: Damma,
        valid_forms: &[1, 2, 4, 10],
    },
    RootEntry {
        letters: ['د', 'خ', 'ل'],
        gloss: "to enter",
        perfect_vowel: Fatha,
        imperfect_vowel: Damma,
        valid_forms: &[1, 2, 4, 10],
    },
    RootEntry {
        letters: ['ج', 'ل', 'س'],
        gloss: "to sit",
        perfect_vowel: Fatha,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 4],
    },
    RootEntry {
        letters: ['ر', 'ج', 'ع'],
        gloss: "to return",
        perfect_vowel: Fatha,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 4, 8],
    },
    RootEntry {
        letters: ['ذ', 'ه', 'ب'],
        gloss: "to go",
        perfect_vowel: Fatha,
        imperfect_vowel: Fatha,
        valid_forms: &[1, 2, 4],
    },
    RootEntry {
        letters: ['ج', 'ي', 'ء'],
        gloss: "to come",
        perfect_vowel: Fatha,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 4, 8],
    },
    RootEntry {
        letters: ['م', 'ش', 'ي'],
        gloss: "to walk",
        perfect_vowel: Fatha,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 8],
    },
    RootEntry {
        letters: ['ر', 'ك', 'ب'],
        gloss: "to ride",
        perfect_vowel: Kasra,
        imperfect_vowel: Fatha,
        valid_forms: &[1, 2, 8],
    },
    RootEntry {
        letters: ['ن', 'ز', 'ل'],
        gloss: "to descend",
        perfect_vowel: Fatha,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 4, 10],
    },
    RootEntry {
        letters: ['ص', 'ع', 'د'],
        gloss: "to ascend",
        perfect_vowel: Kasra,
        imperfect_vowel: Fatha,
        valid_forms: &[1, 2, 8],
    },
    // Action verbs
    RootEntry {
        letters: ['ن', 'ص', 'ر'],
        gloss: "to help",
        perfect_vowel: Fatha,
        imperfect_vowel: Damma,
        valid_forms: &[1, 2, 3, 4, 8, 10],
    },
    RootEntry {
        letters: ['ض', 'ر', 'ب'],
        gloss: "to hit",
        perfect_vowel: Fatha,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 3, 4, 8],
    },
    RootEntry {
        letters: ['ق', 'ط', 'ع'],
        gloss: "to cut",
        perfect_vowel: Fatha,
        imperfect_vowel: Fatha,
        valid_forms: &[1, 2, 4, 7, 8],
    },
    RootEntry {
        letters: ['ج', 'م', 'ع'],
        gloss: "to gather",
        perfect_vowel: Fatha,
        imperfect_vowel: Fatha,
        valid_forms: &[1, 2, 4, 6, 8],
    },
    RootEntry {
        letters: ['ح', 'م', 'ل'],
        gloss: "to carry",
        perfect_vowel: Fatha,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 5, 6, 8, 10],
    },
    // Roots with an attested Form VII (reflexive/passive)
    RootEntry {
        letters: ['ك', 'س', 'ر'],
        gloss: "to break",
        perfect_vowel: Fatha,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 4, 7, 8],
    },
    RootEntry {
        letters: ['ف', 'ت', 'ح'],
        gloss: "to open",
        perfect_vowel: Fatha,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 4, 7, 8],
    },
    RootEntry {
        letters: ['ق', 'ل', 'ب'],
        gloss: "to turn",
        perfect_vowel: Fatha,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 4, 7, 8],
    },
    // Roots with an attested Form IX (colors/defects)
    RootEntry {
        letters: ['ح', 'م', 'ر'],
        gloss: "to be red",
        perfect_vowel: Kasra,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 4, 9],
    },
    RootEntry {
        letters: ['س', 'و', 'د'],
        gloss: "to be black",
        perfect_vowel: Kasra,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 4, 9],
    },
    RootEntry {
        letters: ['ب', 'ي', 'ض'],
        gloss: "to be white",
        perfect_vowel: Kasra,
        imperfect_vowel: Kasra,
        valid_forms: &[1, 2, 4, 9],
    },
];

pub fn root_catalog() -> &'static [RootEntry] {
    ROOT_CATALOG
}

/// The ف-ع-ل placeholder root: every template conjugated with it reproduces
/// itself, which is what pattern-practice mode relies on.
pub fn canonical_root() -> &'static RootEntry {
    &ROOT_CATALOG[0]
}

/// Shape check only: exactly three letters, each inside the Arabic Unicode
/// block. Not a lexical validation.
pub fn is_valid_root(root: &[char]) -> bool {
    static ARABIC_LETTER: OnceLock<Regex> = OnceLock::new();
    let re = ARABIC_LETTER.get_or_init(|| Regex::new(r"^[\u{0600}-\u{06FF}]$").unwrap());

    root.len() == 3 && root.iter().all(|letter| re.is_match(&letter.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_roots_are_well_formed() {
        for entry in root_catalog() {
            assert!(is_valid_root(&entry.letters), "bad root {:?}", entry.letters);
            assert!(!entry.gloss.is_empty());
            assert!(entry.valid_forms.iter().all(|f| (1..=10).contains(f)));
            assert!(entry.supports_form(1), "every curated root is attested in Form I");
        }
    }

    #[test]
    fn test_canonical_root_supports_all_forms() {
        let canonical = canonical_root();
        assert_eq!(canonical.letters, ['ف', 'ع', 'ل']);
        for form_number in 1..=10 {
            assert!(canonical.supports_form(form_number));
        }
    }

    #[test]
    fn test_root_shape_check() {
        assert!(is_valid_root(&['ك', 'ت', 'ب']));
        assert!(!is_valid_root(&['ك', 'ت']));
        assert!(!is_valid_root(&['ك', 'ت', 'ب', 'ل']));
        assert!(!is_valid_root(&['k', 't', 'b']));
    }
}
