use crate::coord::error::ParseError;
use std::fmt;

/// The four recognized coordinate notations. Which one applies is
/// decided purely by how many parts the tokenizer produced; hemisphere
/// letters and symbols never participate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    DecimalDegrees,
    DegreesMinutes,
    DegreesMinutesSeconds,
    Utm,
}

impl Notation {
    pub fn classify(part_count: usize) -> Result<Notation, ParseError> {
        match part_count {
            2 => Ok(Notation::DecimalDegrees),
            3 => Ok(Notation::Utm),
            4 => Ok(Notation::DegreesMinutes),
            6 => Ok(Notation::DegreesMinutesSeconds),
            _ => Err(ParseError::UnknownNotation),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Notation::DecimalDegrees => "DD",
            Notation::DegreesMinutes => "DM",
            Notation::DegreesMinutesSeconds => "DMS",
            Notation::Utm => "UTM",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_counts() {
        assert_eq!(Notation::classify(2).unwrap(), Notation::DecimalDegrees);
        assert_eq!(Notation::classify(3).unwrap(), Notation::Utm);
        assert_eq!(Notation::classify(4).unwrap(), Notation::DegreesMinutes);
        assert_eq!(
            Notation::classify(6).unwrap(),
            Notation::DegreesMinutesSeconds
        );
    }

    #[test]
    fn test_classify_rejects_other_counts() {
        for count in [0, 1, 5, 7, 12] {
            let err = Notation::classify(count).unwrap_err();
            assert_eq!(err.to_string(), "Cannot determine coordinate type");
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Notation::DecimalDegrees.to_string(), "DD");
        assert_eq!(Notation::Utm.to_string(), "UTM");
        assert_eq!(Notation::DegreesMinutes.to_string(), "DM");
        assert_eq!(Notation::DegreesMinutesSeconds.to_string(), "DMS");
    }
}
