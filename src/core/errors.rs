use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SarfError {
    #[error("Root must contain exactly 3 letters, got {0}")]
    InvalidRoot(usize),

    #[error("Invalid form number: {0}")]
    InvalidForm(u8),

    #[error("No conjugation exists for the selected forms and tenses")]
    NoValidCombination,
}
