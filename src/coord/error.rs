use std::fmt;

/// Field whose value failed range validation. Each field knows its
/// human-readable label and the expected-range text used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Zone,
    Easting,
    Northing,
    LatitudeDegrees,
    LongitudeDegrees,
    LatitudeMinutes,
    LongitudeMinutes,
    LatitudeSeconds,
    LongitudeSeconds,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Zone => "Zone",
            FieldKind::Easting => "Easting",
            FieldKind::Northing => "Northing",
            FieldKind::LatitudeDegrees => "Latitude degrees",
            FieldKind::LongitudeDegrees => "Longitude degrees",
            FieldKind::LatitudeMinutes => "Latitude minutes",
            FieldKind::LongitudeMinutes => "Longitude minutes",
            FieldKind::LatitudeSeconds => "Latitude seconds",
            FieldKind::LongitudeSeconds => "Longitude seconds",
        }
    }

    // The easting label understates the real upper bound (1000000 is
    // accepted); kept for message compatibility with the original service.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Zone => "0,60",
            FieldKind::Easting => "100000,999999",
            FieldKind::Northing => "0,10000000",
            FieldKind::LatitudeDegrees => "-90,90",
            FieldKind::LongitudeDegrees => "-180,180",
            FieldKind::LatitudeMinutes
            | FieldKind::LongitudeMinutes
            | FieldKind::LatitudeSeconds
            | FieldKind::LongitudeSeconds => "0,60",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    EmptyQuery,
    UnknownNotation,
    OutOfBounds { field: FieldKind, value: f64 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyQuery => write!(f, "No query sent"),
            ParseError::UnknownNotation => write!(f, "Cannot determine coordinate type"),
            ParseError::OutOfBounds { field, value } => {
                write!(
                    f,
                    "{} out of bounds [Expected:{} Value: {}]",
                    field.label(),
                    field.expected(),
                    value
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
