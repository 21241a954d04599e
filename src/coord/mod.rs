pub mod convert;
pub mod error;
pub mod formatter;
pub mod notation;
pub mod pipeline;
pub mod projection;
pub mod tokenizer;
pub mod types;


pub use error::{FieldKind, ParseError};
pub use notation::Notation;
pub use pipeline::parse;
pub use types::{DebugInfo, GeodeticPoint, ParseResult, Part};
