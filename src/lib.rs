pub mod coord;

pub use coord::{parse, GeodeticPoint, ParseResult};
