//! Category colors handed to whatever draws the report. Iteration order is legend order.

use indexmap::IndexMap;
use serde::Serialize;

pub(crate) type Palette = IndexMap<&'static str, &'static str>;

pub(crate) const RED: &str = "#AB0520";
pub(crate) const BLUE: &str = "#0C234B";

macro_rules! palette {
    ($($label:expr => $color:expr),* $(,)?) => {{
        let mut map = Palette::new();
        $(map.insert($label, $color);)*
        map
    }};
}

lazy_static::lazy_static! {
    /// Pitch result plot: called pitches plus hits.
    pub(crate) static ref PITCH_RESULT: Palette = palette! {
        "StrikeSwinging" => "red",
        "StrikeCalled" => "orange",
        "BallCalled" => "#ADD8E6",
        "Single" => "#56EB31",
        "Double" => "#03940C",
        "Triple" => "purple",
        "HomeRun" => "gold",
    };

    pub(crate) static ref PITCH_TYPE: Palette = palette! {
        "Fastball" => "darkred",
        "Slider" => "darkorange",
        "Curveball" => "#FFEE00",
        "ChangeUp" => "#88FF00",
        "Splitter" => "purple",
        "Sinker" => "brown",
        "Cutter" => "#FF00B3",
    };

    pub(crate) static ref HIT_RESULT: Palette = palette! {
        "Single" => "#56EB31",
        "Double" => "#03940C",
        "Triple" => "purple",
        "HomeRun" => "gold",
    };

    pub(crate) static ref AT_BAT_RESULT: Palette = palette! {
        "Strikeout" => "black",
        "Walk" => "blue",
        "GroundBall" => "orange",
        "LineDrive" => "green",
        "FlyBall" => "yellow",
        "PopUp" => "red",
    };
}

/// Every palette, as serialized into the report.
#[derive(Debug, Serialize)]
pub(crate) struct Palettes {
    pub(crate) pitch_result: &'static Palette,
    pub(crate) pitch_type: &'static Palette,
    pub(crate) hit_result: &'static Palette,
    pub(crate) at_bat_result: &'static Palette,
    pub(crate) title: [&'static str; 2],
}

impl Palettes {
    pub(crate) fn get() -> Palettes {
        Palettes {
            pitch_result: &PITCH_RESULT,
            pitch_type: &PITCH_TYPE,
            hit_result: &HIT_RESULT,
            at_bat_result: &AT_BAT_RESULT,
            title: [RED, BLUE],
        }
    }
}

#[cfg(test)]
#[test]
fn test() {
    assert_eq!(PITCH_TYPE.len(), 7);
    assert_eq!(PITCH_TYPE.get_index(0), Some((&"Fastball", &"darkred")));
    for (label, color) in HIT_RESULT.iter() {
        assert_eq!(PITCH_RESULT.get(label), Some(color));
    }
    let json = serde_json::to_value(Palettes::get()).unwrap();
    assert_eq!(json["at_bat_result"]["Walk"], "blue");
    assert_eq!(json["title"][0], RED);
}
