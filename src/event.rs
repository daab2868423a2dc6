use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display};

/// Defines a closed categorical vocabulary as it appears in the event table.
///
/// Strings outside the vocabulary become `Unknown`, which never matches any membership predicate.
macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
        #[serde(from = "String")]
        pub(crate) enum $name {
            $($variant,)*
            Unknown,
        }

        impl $name {
            #[allow(dead_code)]
            pub(crate) const KNOWN: &'static [$name] = &[$($name::$variant),*];

            pub(crate) fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)*
                    $name::Unknown => "Unknown",
                }
            }

            pub(crate) fn is_known(self) -> bool {
                self != $name::Unknown
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> $name {
                match s.trim() {
                    $(stringify!($variant) => $name::$variant,)*
                    _ => $name::Unknown,
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> $name {
                $name::from(s.as_str())
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    PitchCall {
        StrikeSwinging,
        StrikeCalled,
        BallCalled,
        InPlay,
        HitByPitch,
        FoulBall,
        FoulBallNotFieldable,
        FoulBallFieldable,
        BallinDirt,
        BallIntentional,
        Undefined,
    }
}

vocabulary! {
    PitchType {
        Fastball,
        Slider,
        Curveball,
        ChangeUp,
        Splitter,
        Sinker,
        Cutter,
        Knuckleball,
        Other,
        Undefined,
    }
}

vocabulary! {
    HitType {
        GroundBall,
        LineDrive,
        FlyBall,
        PopUp,
        Bunt,
        Undefined,
    }
}

vocabulary! {
    /// Terminal strikeout/walk state of a plate appearance.
    KorBB {
        Strikeout,
        Walk,
        HitByPitch,
        Undefined,
    }
}

vocabulary! {
    PlayResult {
        Undefined,
        Single,
        Double,
        Triple,
        HomeRun,
        Out,
        Error,
        FieldersChoice,
        Sacrifice,
        Walk,
        StolenBase,
        SacrificeFly,
        SacrificeHit,
        CatcherInterference,
    }
}

impl HitType {
    /// True for a tracked batted ball.
    pub(crate) fn is_batted_ball(self) -> bool {
        self.is_known() && self != HitType::Undefined
    }
}

impl PlayResult {
    pub(crate) fn is_hit(self) -> bool {
        matches!(
            self,
            PlayResult::Single | PlayResult::Double | PlayResult::Triple | PlayResult::HomeRun
        )
    }

    pub(crate) fn is_extra_base_hit(self) -> bool {
        matches!(
            self,
            PlayResult::Double | PlayResult::Triple | PlayResult::HomeRun
        )
    }
}

/// One row of play-by-play data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct EventRecord {
    pub(crate) batter: Option<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) date: Option<NaiveDate>,
    pub(crate) pitch_call: Option<PitchCall>,
    pub(crate) tagged_pitch_type: Option<PitchType>,
    pub(crate) tagged_hit_type: Option<HitType>,
    #[serde(rename = "KorBB")]
    pub(crate) kor_bb: Option<KorBB>,
    pub(crate) play_result: Option<PlayResult>,
    pub(crate) runs_scored: Option<u32>,
    pub(crate) distance: Option<f64>,
    pub(crate) direction: Option<f64>,
    pub(crate) plate_loc_side: Option<f64>,
    pub(crate) plate_loc_height: Option<f64>,
    pub(crate) exit_speed: Option<f64>,
}

impl EventRecord {
    /// Plate location, when pitch tracking succeeded.
    pub(crate) fn plate_location(&self) -> Option<(f64, f64)> {
        Some((self.plate_loc_side?, self.plate_loc_height?))
    }

    /// Polar batted-ball measurement, when both halves are present.
    pub(crate) fn polar(&self) -> Option<(f64, f64)> {
        Some((self.distance?, self.direction?))
    }
}

// two-digit years first, so "25" is never read as the year 25
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary() {
        assert_eq!(PlayResult::from("HomeRun"), PlayResult::HomeRun);
        assert_eq!(PlayResult::from(" Single "), PlayResult::Single);
        assert_eq!(PlayResult::from("homerun"), PlayResult::Unknown);
        assert_eq!(KorBB::from("Strikeout").to_string(), "Strikeout");
        assert_eq!(PitchCall::from("BallinDirt"), PitchCall::BallinDirt);
        assert!(!HitType::Undefined.is_batted_ball());
        assert!(!HitType::Unknown.is_batted_ball());
        assert!(HitType::Bunt.is_batted_ball());
        assert!(!PlayResult::KNOWN.contains(&PlayResult::Unknown));
    }

    #[test]
    fn deserialize_unknown() {
        let result: PlayResult = serde_json::from_str("\"Balk\"").unwrap();
        assert_eq!(result, PlayResult::Unknown);
        let call: PitchCall = serde_json::from_str("\"InPlay\"").unwrap();
        assert_eq!(call, PitchCall::InPlay);
    }

    #[test]
    fn dates() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 7);
        assert_eq!(parse_date("2025-06-07"), expected);
        assert_eq!(parse_date("6/7/2025"), expected);
        assert_eq!(parse_date("6/7/25"), expected);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn accessors() {
        let row = EventRecord {
            distance: Some(300.0),
            plate_loc_side: Some(0.5),
            ..Default::default()
        };
        assert_eq!(row.polar(), None);
        assert_eq!(row.plate_location(), None);

        let row = EventRecord {
            distance: Some(300.0),
            direction: Some(-12.5),
            ..row
        };
        assert_eq!(row.polar(), Some((300.0, -12.5)));
    }
}
