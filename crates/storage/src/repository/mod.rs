pub mod leaderboard;
pub mod participant;
pub mod score;
