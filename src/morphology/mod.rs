pub mod conjugator;

pub mod forms;

pub mod roots;

#[cfg(test)]
mod conjugator_tests;

pub use conjugator::{
    conjugate,
    display_pattern,
    examples,
    generate_conjugations,
    resolve_form_i_pattern,
    ConjugationSet,
    Example,
};
pub use forms::{
    form_catalog,
    form_info,
    require_form,
    PatternKey,
    Template,
    VerbForm,
};
pub use roots::{
    canonical_root,
    is_valid_root,
    root_catalog,
};
