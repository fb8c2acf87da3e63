//! Grid anchors for module regions.
//!
//! A position is a vertical × horizontal anchor pair, fixed at region
//! creation time. In config files it is written as a single string,
//! `"<vertical>:<horizontal>"` (e.g. `top:left`).

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Vertical grid anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    Top,
    Middle,
    Bottom,
}

impl Vertical {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vertical::Top => "top",
            Vertical::Middle => "middle",
            Vertical::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vertical {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Vertical::Top),
            "middle" => Ok(Vertical::Middle),
            "bottom" => Ok(Vertical::Bottom),
            other => Err(format!("unknown vertical anchor '{other}'")),
        }
    }
}

/// Horizontal grid anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizontal {
    Left,
    Center,
    Right,
}

impl Horizontal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Horizontal::Left => "left",
            Horizontal::Center => "center",
            Horizontal::Right => "right",
        }
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Horizontal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Horizontal::Left),
            "center" => Ok(Horizontal::Center),
            "right" => Ok(Horizontal::Right),
            other => Err(format!("unknown horizontal anchor '{other}'")),
        }
    }
}

/// Where in the grid a module's region is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl Position {
    pub fn new(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.vertical, self.horizontal)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (v, h) = s
            .split_once(':')
            .ok_or_else(|| format!("position '{s}' is not of the form vertical:horizontal"))?;
        Ok(Position {
            vertical: v.trim().parse()?,
            horizontal: h.trim().parse()?,
        })
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_anchor_pairs() {
        let pos: Position = "top:left".parse().unwrap();
        assert_eq!(pos, Position::new(Vertical::Top, Horizontal::Left));

        let pos: Position = "middle:center".parse().unwrap();
        assert_eq!(pos, Position::new(Vertical::Middle, Horizontal::Center));

        let pos: Position = "bottom:right".parse().unwrap();
        assert_eq!(pos, Position::new(Vertical::Bottom, Horizontal::Right));
    }

    #[test]
    fn parse_trims_whitespace_around_anchors() {
        let pos: Position = "top : right".parse().unwrap();
        assert_eq!(pos, Position::new(Vertical::Top, Horizontal::Right));
    }

    #[test]
    fn rejects_unknown_anchors() {
        let err = "sideways:left".parse::<Position>().unwrap_err();
        assert!(err.contains("sideways"));

        let err = "top:behind".parse::<Position>().unwrap_err();
        assert!(err.contains("behind"));
    }

    #[test]
    fn rejects_missing_separator() {
        let err = "top".parse::<Position>().unwrap_err();
        assert!(err.contains("vertical:horizontal"));
    }

    #[test]
    fn display_round_trips() {
        for s in ["top:left", "middle:center", "bottom:right", "top:center"] {
            let pos: Position = s.parse().unwrap();
            assert_eq!(pos.to_string(), s);
        }
    }

    #[test]
    fn serde_uses_string_form() {
        let pos = Position::new(Vertical::Bottom, Horizontal::Center);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, "\"bottom:center\"");

        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }

    #[test]
    fn anchor_words_match_script_call_surface() {
        assert_eq!(Vertical::Top.as_str(), "top");
        assert_eq!(Vertical::Middle.as_str(), "middle");
        assert_eq!(Vertical::Bottom.as_str(), "bottom");
        assert_eq!(Horizontal::Left.as_str(), "left");
        assert_eq!(Horizontal::Center.as_str(), "center");
        assert_eq!(Horizontal::Right.as_str(), "right");
    }
}
