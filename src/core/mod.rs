pub mod errors;
pub mod models;

pub use errors::SarfError;
pub use models::{ Answer, PracticeCard, Question, RootEntry, TenseKind, VowelClass };
