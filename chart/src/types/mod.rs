//! Domain types for type effectiveness

mod pokemon_type;
mod typing;

pub use pokemon_type::{TYPE_CHART, TYPE_COUNT, Type, multiplier};
pub use typing::{MAX_TYPES, Multipliers, Typing};
