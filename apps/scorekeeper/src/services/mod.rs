pub mod game_flow;
pub mod roster;
pub mod script;
