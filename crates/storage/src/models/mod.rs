mod participant;
mod score;

pub use participant::{Participant, Sex};
pub use score::ScoreEvent;
