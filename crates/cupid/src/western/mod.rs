pub mod elements;

pub use elements::{aggregate, ChartPoint, Element, ElementalProfile};
