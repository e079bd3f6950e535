use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// The eight tense/voice categories a verb form conjugates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenseKind {
    Perfect,
    Imperfect,
    PassivePerfect,
    PassiveImperfect,
    Imperative,
    ActiveParticiple,
    PassiveParticiple,
    VerbalNoun,
}

impl TenseKind {
    pub const ALL: [TenseKind; 8] = [
        TenseKind::Perfect,
        TenseKind::Imperfect,
        TenseKind::PassivePerfect,
        TenseKind::PassiveImperfect,
        TenseKind::Imperative,
        TenseKind::ActiveParticiple,
        TenseKind::PassiveParticiple,
        TenseKind::VerbalNoun,
    ];

    /// Full label shown on answer cards, English with the Arabic grammar term.
    pub fn label(&self) -> &'static str {
        match self {
            TenseKind::Perfect => "Perfect (Past) - الماضي",
            TenseKind::Imperfect => "Imperfect (Present) - المضارع",
            TenseKind::PassivePerfect => "Passive Perfect (Past) - الماضي المجهول",
            TenseKind::PassiveImperfect => "Passive Imperfect (Present) - المضارع المجهول",
            TenseKind::Imperative => "Imperative (Command) - الأمر",
            TenseKind::ActiveParticiple => "Active Participle - اسم الفاعل",
            TenseKind::PassiveParticiple => "Passive Participle - اسم المفعول",
            TenseKind::VerbalNoun => "Verbal Noun (Masdar) - المصدر",
        }
    }

    /// Short label for table headers and checkboxes.
    pub fn short_label(&self) -> &'static str {
        match self {
            TenseKind::Perfect => "Perfect",
            TenseKind::Imperfect => "Imperfect",
            TenseKind::PassivePerfect => "Passive Perfect",
            TenseKind::PassiveImperfect => "Passive Imperfect",
            TenseKind::Imperative => "Imperative",
            TenseKind::ActiveParticiple => "Active Participle",
            TenseKind::PassiveParticiple => "Passive Participle",
            TenseKind::VerbalNoun => "Verbal Noun",
        }
    }
}

impl fmt::Display for TenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_label())
    }
}

/// The short vowel governing Form I template choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VowelClass {
    Fatha,
    Damma,
    Kasra,
}

impl VowelClass {
    pub fn arabic_name(&self) -> &'static str {
        match self {
            VowelClass::Fatha => "فَتحة",
            VowelClass::Damma => "ضَمّة",
            VowelClass::Kasra => "كَسرة",
        }
    }
}

/// One curated root: three consonants plus the lexical data needed to pick
/// Form I templates and to restrict sampling to attested forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootEntry {
    pub letters: [char; 3],
    pub gloss: &'static str,              // English meaning of the base verb
    pub perfect_vowel: VowelClass,        // Middle vowel of the Form I perfect
    pub imperfect_vowel: VowelClass,      // Middle vowel of the Form I imperfect
    pub valid_forms: &'static [u8],       // Forms (1-10) this root is attested in
}

impl RootEntry {
    /// An empty `valid_forms` slice means the catalog entry predates form
    /// annotations and is attested in Form I only.
    pub fn supports_form(&self, form_number: u8) -> bool {
        if self.valid_forms.is_empty() {
            form_number == 1
        } else {
            self.valid_forms.contains(&form_number)
        }
    }

    pub fn display(&self) -> String {
        root_display(&self.letters)
    }
}

/// Dash-joined root letters, e.g. "ف-ع-ل".
pub fn root_display(root: &[char]) -> String {
    root.iter().map(|c| c.to_string()).collect::<Vec<_>>().join("-")
}

/// The question side of a flashcard: just the conjugated surface word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub word: String,
}

/// The answer side of a flashcard. Owned strings only, so a card stays
/// meaningful after the engine tables it was drawn from go out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub root_display: String,
    pub form: u8,
    pub form_name: String,
    pub form_description: String,
    pub tense: TenseKind,
    pub tense_name: String,
    pub pattern: String,
    pub gloss: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeCard {
    pub question: Question,
    pub answer: Answer,
}
