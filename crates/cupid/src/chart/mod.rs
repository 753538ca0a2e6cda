pub mod assembler;
pub mod houses;
pub mod types;

pub use assembler::ChartAssembler;
pub use houses::{house_of, houses, House};
pub use types::{BirthData, NatalChart};
