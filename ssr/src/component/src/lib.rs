pub mod duel_list;
pub mod spinner;
