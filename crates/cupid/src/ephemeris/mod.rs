pub mod angles;
pub mod bodies;
pub mod time;
pub mod types;

pub use angles::{culmination_angle, rising_angle, ASCENDANT_HOUSE, MIDHEAVEN_HOUSE};
pub use bodies::{approximate, approximate_all, mean_longitude};
pub use time::{parse_birth_date, parse_birth_time, to_time_reference, DEFAULT_BIRTH_TIME, J2000};
pub use types::{
    normalize_degrees, split_longitude, Angle, Body, BodyPosition, RawPosition, ZodiacSign,
};
