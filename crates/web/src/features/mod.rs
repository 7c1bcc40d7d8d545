pub mod leaderboard;
pub mod participants;
pub mod scores;
