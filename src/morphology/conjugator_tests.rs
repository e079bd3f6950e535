#[cfg(test)]
mod tests {
    use crate::{
        core::{
            RootEntry,
            SarfError,
            TenseKind,
            VowelClass,
        },
        morphology::{
            canonical_root,
            conjugate,
            display_pattern,
            examples,
            form_catalog,
            form_info,
            generate_conjugations,
            resolve_form_i_pattern,
            root_catalog,
            PatternKey,
            Template,
        },
    };

    fn form_i_variants(tense: TenseKind) -> &'static [(PatternKey, &'static str)] {
        match *form_info(1).unwrap().template(tense) {
            Template::VowelVariant(variants) => variants,
            other => panic!("expected vowel variants for Form I {:?}, got {:?}", tense, other),
        }
    }

    fn entry_for(letters: [char; 3]) -> &'static RootEntry {
        root_catalog()
            .iter()
            .find(|entry| entry.letters == letters)
            .expect("root missing from catalog")
    }

    #[test]
    fn test_substitution_form_ii() {
        let word = conjugate(&['ك', 'ت', 'ب'], "فَعَّلَ").unwrap();
        assert_eq!(word, "كَتَّبَ");
    }

    #[test]
    fn test_substitution_passes_through_non_placeholders() {
        // No placeholder glyphs at all: the template comes back unchanged.
        assert_eq!(conjugate(&['ك', 'ت', 'ب'], "مَدْرَسَة").unwrap(), "مَدْرَسَة");
        assert_eq!(conjugate(&['ك', 'ت', 'ب'], "").unwrap(), "");
    }

    #[test]
    fn test_substitution_is_single_pass() {
        // Adversarial root: every letter is a placeholder glyph for some
        // *other* position. Each template position must be replaced exactly
        // once, from its own root index, never from a previously substituted
        // letter.
        let root = ['ل', 'ف', 'ع'];
        assert_eq!(conjugate(&root, "فعل").unwrap(), "لفع");
        assert_eq!(conjugate(&root, "فَعَلَ").unwrap(), "لَفَعَ");
    }

    #[test]
    fn test_canonical_root_is_a_fixed_point_of_every_template() {
        let root = canonical_root();
        for form in form_catalog() {
            for tense in TenseKind::ALL {
                match *form.template(tense) {
                    Template::Unavailable => {}
                    Template::Literal(pattern) => {
                        assert_eq!(conjugate(&root.letters, pattern).unwrap(), pattern);
                    }
                    Template::VowelVariant(variants) => {
                        for (_, pattern) in variants {
                            assert_eq!(conjugate(&root.letters, pattern).unwrap(), *pattern);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_two_letter_root_is_rejected() {
        assert_eq!(conjugate(&['ك', 'ت'], "فَعَلَ"), Err(SarfError::InvalidRoot(2)));
        assert_eq!(
            generate_conjugations(&['ك', 'ت', 'ب', 'ل'], 2, None),
            Err(SarfError::InvalidRoot(4))
        );
    }

    #[test]
    fn test_form_number_out_of_range_is_rejected() {
        let root = ['ك', 'ت', 'ب'];
        assert_eq!(generate_conjugations(&root, 0, None), Err(SarfError::InvalidForm(0)));
        assert_eq!(generate_conjugations(&root, 11, None), Err(SarfError::InvalidForm(11)));
        assert!(form_info(11).is_none());
    }

    #[test]
    fn test_every_root_and_form_yields_eight_entries() {
        for entry in root_catalog() {
            for form_number in 1..=10 {
                let set =
                    generate_conjugations(&entry.letters, form_number, Some(entry)).unwrap();
                assert_eq!(set.conjugations.len(), 8);

                let form = form_info(form_number).unwrap();
                for tense in TenseKind::ALL {
                    let word = set.conjugations.get(&tense).unwrap();
                    assert_eq!(
                        word.is_none(),
                        !form.template(tense).is_available(),
                        "form {} {:?}",
                        form_number,
                        tense
                    );
                }
            }
        }
    }

    #[test]
    fn test_unavailable_tenses_are_none_not_errors() {
        let root = ['ك', 'س', 'ر'];
        let form_vii = generate_conjugations(&root, 7, None).unwrap();
        assert_eq!(form_vii.conjugations[&TenseKind::PassivePerfect], None);
        assert_eq!(form_vii.conjugations[&TenseKind::PassiveImperfect], None);
        assert_eq!(form_vii.conjugations[&TenseKind::PassiveParticiple], None);
        assert_eq!(form_vii.conjugations[&TenseKind::Perfect], Some("اِنْكَسَرَ".to_string()));

        let form_ix = generate_conjugations(&['ح', 'م', 'ر'], 9, None).unwrap();
        assert_eq!(form_ix.conjugations[&TenseKind::Imperative], None);
        assert_eq!(form_ix.conjugations[&TenseKind::Perfect], Some("اِحْمَرَّ".to_string()));
    }

    #[test]
    fn test_vowel_resolution_follows_root_classes() {
        // عمل is a kasra-perfect, fatha-imperfect root.
        let amal = entry_for(['ع', 'م', 'ل']);
        let set = generate_conjugations(&amal.letters, 1, Some(amal)).unwrap();
        assert_eq!(set.conjugations[&TenseKind::Perfect], Some("عَمِلَ".to_string()));
        assert_eq!(set.conjugations[&TenseKind::Imperfect], Some("يَعْمَلُ".to_string()));
        assert_eq!(set.conjugations[&TenseKind::Imperative], Some("اِعْمَلْ".to_string()));

        // كتب is a fatha-perfect, damma-imperfect root.
        let kataba = entry_for(['ك', 'ت', 'ب']);
        let set = generate_conjugations(&kataba.letters, 1, Some(kataba)).unwrap();
        assert_eq!(set.conjugations[&TenseKind::Perfect], Some("كَتَبَ".to_string()));
        assert_eq!(set.conjugations[&TenseKind::Imperfect], Some("يَكْتُبُ".to_string()));
        assert_eq!(set.conjugations[&TenseKind::Imperative], Some("اُكْتُبْ".to_string()));
    }

    #[test]
    fn test_resolver_defaults_without_root_data() {
        let perfect = form_i_variants(TenseKind::Perfect);
        let imperfect = form_i_variants(TenseKind::Imperfect);
        let imperative = form_i_variants(TenseKind::Imperative);

        assert_eq!(resolve_form_i_pattern(TenseKind::Perfect, perfect, None), Some("فَعَلَ"));
        assert_eq!(resolve_form_i_pattern(TenseKind::Imperfect, imperfect, None), Some("يَفْعُلُ"));
        assert_eq!(
            resolve_form_i_pattern(TenseKind::Imperative, imperative, None),
            Some("اُفْعُلْ")
        );
    }

    #[test]
    fn test_resolver_falls_back_when_class_is_missing() {
        // The perfect variant set has no damma entry; a damma-perfect root
        // must land on the fatha default.
        let damma_perfect = RootEntry {
            letters: ['ن', 'ص', 'ر'],
            gloss: "synthetic",
            perfect_vowel: VowelClass::Damma,
            imperfect_vowel: VowelClass::Damma,
            valid_forms: &[1],
        };
        let perfect = form_i_variants(TenseKind::Perfect);
        assert_eq!(
            resolve_form_i_pattern(TenseKind::Perfect, perfect, Some(&damma_perfect)),
            Some("فَعَلَ")
        );
    }

    #[test]
    fn test_resolver_ignores_vowels_for_non_variant_tenses() {
        let perfect = form_i_variants(TenseKind::Perfect);
        let amal = entry_for(['ع', 'م', 'ل']);
        // Participles take whatever variant comes first, root data or not.
        assert_eq!(
            resolve_form_i_pattern(TenseKind::ActiveParticiple, perfect, Some(amal)),
            Some("فَعَلَ")
        );
        assert_eq!(
            resolve_form_i_pattern(TenseKind::ActiveParticiple, perfect, None),
            Some("فَعَلَ")
        );
    }

    #[test]
    fn test_display_pattern_prefers_generic_form_i_variant() {
        let form_i = form_info(1).unwrap();
        let amal = entry_for(['ع', 'م', 'ل']);

        // The learner sees the middle-vowel-free pattern, not the resolved one.
        assert_eq!(display_pattern(form_i, TenseKind::Perfect, Some(amal)), Some("فَعلَ"));
        assert_eq!(display_pattern(form_i, TenseKind::Imperfect, Some(amal)), Some("يَفْعلُ"));
        assert_eq!(display_pattern(form_i, TenseKind::Imperative, Some(amal)), Some("اِفْعلْ"));

        // Non-variant tenses and other forms show the literal template.
        assert_eq!(
            display_pattern(form_i, TenseKind::ActiveParticiple, Some(amal)),
            Some("فَاعِل")
        );
        let form_ii = form_info(2).unwrap();
        assert_eq!(display_pattern(form_ii, TenseKind::Perfect, None), Some("فَعَّلَ"));

        // Unavailable tenses have nothing to show.
        let form_ix = form_info(9).unwrap();
        assert_eq!(display_pattern(form_ix, TenseKind::Imperative, None), None);
    }

    #[test]
    fn test_examples_sample_the_catalog_prefix() {
        let perfect = examples(1, TenseKind::Perfect);
        assert_eq!(perfect.len(), 5);
        assert_eq!(perfect[0].word, "فَعَلَ");
        assert_eq!(perfect[0].root_display, "ف-ع-ل");
        assert_eq!(perfect[0].gloss, "to do");
        assert_eq!(perfect[1].word, "كَتَبَ");

        // Form IX has no imperative, so nothing qualifies.
        assert!(examples(9, TenseKind::Imperative).is_empty());

        // Invalid form numbers are skipped, not propagated.
        assert!(examples(11, TenseKind::Perfect).is_empty());
    }
}
