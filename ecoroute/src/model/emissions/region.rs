use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// geographic region used to scale emissions factors, reflecting differences
/// in transit efficiency and electricity mix. names parse case-insensitively
/// and unrecognized names fall back to [`Region::Global`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    Europe,
    Usa,
    Asia,
    /// no regional adjustment
    #[default]
    Global,
}

impl Region {
    /// multiplier applied to a base emissions factor
    pub fn adjustment_factor(&self) -> f64 {
        match self {
            Region::Europe => 0.9,
            Region::Usa => 1.1,
            Region::Asia => 1.05,
            Region::Global => 1.0,
        }
    }
}

impl FromStr for Region {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region = match s.trim().to_lowercase().as_str() {
            "europe" => Region::Europe,
            "usa" => Region::Usa,
            "asia" => Region::Asia,
            "global" | "" => Region::Global,
            other => {
                log::warn!("unknown region '{other}', no regional adjustment applied");
                Region::Global
            }
        };
        Ok(region)
    }
}

impl From<String> for Region {
    fn from(value: String) -> Self {
        match Region::from_str(&value) {
            Ok(region) => region,
            Err(never) => match never {},
        }
    }
}

impl From<Region> for String {
    fn from(value: Region) -> Self {
        value.to_string()
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Region::Europe => "europe",
            Region::Usa => "usa",
            Region::Asia => "asia",
            Region::Global => "global",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::Region;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Europe".parse::<Region>(), Ok(Region::Europe));
        assert_eq!("USA".parse::<Region>(), Ok(Region::Usa));
        assert_eq!("asia".parse::<Region>(), Ok(Region::Asia));
        assert_eq!("antarctica".parse::<Region>(), Ok(Region::Global));
    }

    #[test]
    fn test_adjustment_factors() {
        assert_eq!(Region::Europe.adjustment_factor(), 0.9);
        assert_eq!(Region::Usa.adjustment_factor(), 1.1);
        assert_eq!(Region::Asia.adjustment_factor(), 1.05);
        assert_eq!(Region::Global.adjustment_factor(), 1.0);
    }

    #[test]
    fn test_serde_uses_names() {
        let region: Region =
            serde_json::from_value(serde_json::json!("Europe")).expect("should deserialize");
        assert_eq!(region, Region::Europe);
        let json = serde_json::to_value(Region::Usa).expect("should serialize");
        assert_eq!(json, serde_json::json!("usa"));
    }
}
