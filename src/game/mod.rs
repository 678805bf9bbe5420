// Game-side code: the entities the engine runs

pub mod entities;
