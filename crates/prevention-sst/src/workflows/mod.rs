pub mod prevention;
pub mod roster;
