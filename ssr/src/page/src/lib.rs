pub mod duels;
pub mod root;
