pub mod sampler;

pub mod session;

pub use sampler::{
    generate_practice_card,
    generate_practice_card_with,
    LearningMode,
    MAX_DRAW_ATTEMPTS,
};
pub use session::{
    build_session,
    build_session_with,
    selection_is_satisfiable,
    CardPhase,
    Score,
    Session,
    SessionState,
    DEFAULT_CARD_COUNT,
};
