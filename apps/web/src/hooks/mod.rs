pub mod effects;
pub mod loading;
pub mod shortcuts;
