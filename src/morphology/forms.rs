use crate::core::{
    SarfError,
    TenseKind,
    VowelClass,
};

/// Key into a Form I vowel-variant template set. `Display` is the generic
/// pattern with the position-dependent middle vowel left out, used when
/// showing the template to the learner rather than conjugating with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKey {
    Class(VowelClass),
    Display,
}

/// A per-tense conjugation template. Most forms use a single literal
/// pattern; some tenses do not exist for a form at all; Form I keys several
/// tenses by the root's vowel class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Literal(&'static str),
    Unavailable,
    VowelVariant(&'static [(PatternKey, &'static str)]),
}

impl Template {
    pub fn is_available(&self) -> bool {
        !matches!(self, Template::Unavailable)
    }
}

/// One of the ten classical derivational measures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbForm {
    pub number: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub perfect: Template,
    pub imperfect: Template,
    pub passive_perfect: Template,
    pub passive_imperfect: Template,
    pub imperative: Template,
    pub active_participle: Template,
    pub passive_participle: Template,
    pub verbal_noun: Template,
}

impl VerbForm {
    pub fn template(&self, tense: TenseKind) -> &Template {
        match tense {
            TenseKind::Perfect => &self.perfect,
            TenseKind::Imperfect => &self.imperfect,
            TenseKind::PassivePerfect => &self.passive_perfect,
            TenseKind::PassiveImperfect => &self.passive_imperfect,
            TenseKind::Imperative => &self.imperative,
            TenseKind::ActiveParticiple => &self.active_participle,
            TenseKind::PassiveParticiple => &self.passive_participle,
            TenseKind::VerbalNoun => &self.verbal_noun,
        }
    }
}

const FORM_I_PERFECT: &[(PatternKey, &str)] = &[
    (PatternKey::Class(VowelClass::Fatha), "فَعَلَ"),
    (PatternKey::Class(VowelClass::Kasra), "فَعِلَ"),
    (PatternKey::Display, "فَعلَ"),
];

const FORM_I_IMPERFECT: &[(PatternKey, &str)] = &[
    (PatternKey::Class(VowelClass::Damma), "يَفْعُلُ"),
    (PatternKey::Class(VowelClass::Kasra), "يَفْعِلُ"),
    (PatternKey::Class(VowelClass::Fatha), "يَفْعَلُ"),
    (PatternKey::Display, "يَفْعلُ"),
];

const FORM_I_IMPERATIVE: &[(PatternKey, &str)] = &[
    (PatternKey::Class(VowelClass::Damma), "اُفْعُلْ"),
    (PatternKey::Class(VowelClass::Kasra), "اِفْعِلْ"),
    (PatternKey::Class(VowelClass::Fatha), "اِفْعَلْ"),
    (PatternKey::Display, "اِفْعلْ"),
];

const FORM_CATALOG: [VerbForm; 10] = [
    VerbForm {
        number: 1,
        name: "Form I",
        description: "Regular",
        perfect: Template::VowelVariant(FORM_I_PERFECT),
        imperfect: Template::VowelVariant(FORM_I_IMPERFECT),
        passive_perfect: Template::Literal("فُعِلَ"),
        passive_imperfect: Template::Literal("يُفْعَلُ"),
        imperative: Template::VowelVariant(FORM_I_IMPERATIVE),
        active_participle: Template::Literal("فَاعِل"),
        passive_participle: Template::Literal("مَفْعُول"),
        verbal_noun: Template::Literal("فَعْل"),
    },
    VerbForm {
        number: 2,
        name: "Form II",
        description: "Causative/intensive",
        perfect: Template::Literal("فَعَّلَ"),
        imperfect: Template::Literal("يُفَعِّلُ"),
        passive_perfect: Template::Literal("فُعِّلَ"),
        passive_imperfect: Template::Literal("يُفَعَّلُ"),
        imperative: Template::Literal("فَعِّلْ"),
        active_participle: Template::Literal("مُفَعِّل"),
        passive_participle: Template::Literal("مُفَعَّل"),
        verbal_noun: Template::Literal("تَفْعِيل"),
    },
    VerbForm {
        number: 3,
        name: "Form III",
        description: "Associative - do with/to someone",
        perfect: Template::Literal("فَاعَلَ"),
        imperfect: Template::Literal("يُفَاعِلُ"),
        passive_perfect: Template::Literal("فُوعِلَ"),
        passive_imperfect: Template::Literal("يُفَاعَلُ"),
        imperative: Template::Literal("فَاعِلْ"),
        active_participle: Template::Literal("مُفَاعِل"),
        passive_participle: Template::Literal("مُفَاعَل"),
        verbal_noun: Template::Literal("مُفَاعَلَة"),
    },
    VerbForm {
        number: 4,
        name: "Form IV",
        description: "Causative",
        perfect: Template::Literal("أَفْعَلَ"),
        imperfect: Template::Literal("يُفْعِلُ"),
        passive_perfect: Template::Literal("أُفْعِلَ"),
        passive_imperfect: Template::Literal("يُفْعَلُ"),
        imperative: Template::Literal("أَفْعِلْ"),
        active_participle: Template::Literal("مُفْعِل"),
        passive_participle: Template::Literal("مُفْعَل"),
        verbal_noun: Template::Literal("إِفْعَال"),
    },
    VerbForm {
        number: 5,
        name: "Form V",
        description: "Reflexive of Form II - doing the action to oneself",
        perfect: Template::Literal("تَفَعَّلَ"),
        imperfect: Template::Literal("يَتَفَعَّلُ"),
        passive_perfect: Template::Literal("تُفُعِّلَ"),
        passive_imperfect: Template::Literal("يُتَفَعَّلُ"),
        imperative: Template::Literal("تَفَعَّلْ"),
        active_participle: Template::Literal("مُتَفَعِّل"),
        passive_participle: Template::Literal("مُتَفَعَّل"),
        verbal_noun: Template::Literal("تَفَعُّل"),
    },
    VerbForm {
        number: 6,
        name: "Form VI",
        description: "Reflexive of Form III - reciprocal action",
        perfect: Template::Literal("تَفَاعَلَ"),
        imperfect: Template::Literal("يَتَفَاعَلُ"),
        passive_perfect: Template::Literal("تُفُوعِلَ"),
        passive_imperfect: Template::Literal("يُتَفَاعَلُ"),
        imperative: Template::Literal("تَفَاعَلْ"),
        active_participle: Template::Literal("مُتَفَاعِل"),
        passive_participle: Template::Literal("مُتَفَاعَل"),
        verbal_noun: Template::Literal("تَفَاعُل"),
    },
    VerbForm {
        number: 7,
        name: "Form VII",
        description: "Passive of Form I - action happens to the subject",
        perfect: Template::Literal("اِنْفَعَلَ"),
        imperfect: Template::Literal("يَنْفَعِلُ"),
        passive_perfect: Template::Unavailable,
        passive_imperfect: Template::Unavailable,
        imperative: Template::Literal("اِنْفَعِلْ"),
        active_participle: Template::Literal("مُنْفَعِل"),
        passive_participle: Template::Unavailable,
        verbal_noun: Template::Literal("اِنْفِعَال"),
    },
    VerbForm {
        number: 8,
        name: "Form VIII",
        description: "Reflexive of I",
        perfect: Template::Literal("اِفْتَعَلَ"),
        imperfect: Template::Literal("يَفْتَعِلُ"),
        passive_perfect: Template::Literal("اُفْتُعِلَ"),
        passive_imperfect: Template::Literal("يُفْتَعَلُ"),
        imperative: Template::Literal("اِفْتَعِلْ"),
        active_participle: Template::Literal("مُفْتَعِل"),
        passive_participle: Template::Literal("مُفْتَعَل"),
        verbal_noun: Template::Literal("اِفْتِعَال"),
    },
    VerbForm {
        number: 9,
        name: "Form IX",
        description: "Add colour/Be defective",
        perfect: Template::Literal("اِفْعَلَّ"),
        imperfect: Template::Literal("يَفْعَلُّ"),
        passive_perfect: Template::Unavailable,
        passive_imperfect: Template::Unavailable,
        imperative: Template::Unavailable,
        active_participle: Template::Literal("مُفْعَلّ"),
        passive_participle: Template::Unavailable,
        verbal_noun: Template::Literal("اِفْعِلَال"),
    },
    VerbForm {
        number: 10,
        name: "Form X",
        description: "Seeking/requesting",
        perfect: Template::Literal("اِسْتَفْعَلَ"),
        imperfect: Template::Literal("يَسْتَفْعِلُ"),
        passive_perfect: Template::Literal("اُسْتُفْعِلَ"),
        passive_imperfect: Template::Literal("يُسْتَفْعَلُ"),
        imperative: Template::Literal("اِسْتَفْعِلْ"),
        active_participle: Template::Literal("مُسْتَفْعِل"),
        passive_participle: Template::Literal("مُسْتَفْعَل"),
        verbal_noun: Template::Literal("اِسْتِفْعَال"),
    },
];

/// Read-only snapshot of all ten measures, ordered by form number.
pub fn form_catalog() -> &'static [VerbForm; 10] {
    &FORM_CATALOG
}

pub fn form_info(form_number: u8) -> Option<&'static VerbForm> {
    match form_number {
        1..=10 => Some(&FORM_CATALOG[(form_number - 1) as usize]),
        _ => None,
    }
}

/// Like `form_info`, but an out-of-range number is a caller contract
/// violation rather than an absence.
pub fn require_form(form_number: u8) -> Result<&'static VerbForm, SarfError> {
    form_info(form_number).ok_or(SarfError::InvalidForm(form_number))
}
