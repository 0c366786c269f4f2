//! German federal states.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HolidayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    BW,
    BY,
    BE,
    BB,
    HB,
    HH,
    HE,
    MV,
    NI,
    NW,
    RP,
    SL,
    #[default]
    SN,
    ST,
    SH,
    TH,
}

impl Region {
    pub const ALL: [Region; 16] = [
        Region::BW,
        Region::BY,
        Region::BE,
        Region::BB,
        Region::HB,
        Region::HH,
        Region::HE,
        Region::MV,
        Region::NI,
        Region::NW,
        Region::RP,
        Region::SL,
        Region::SN,
        Region::ST,
        Region::SH,
        Region::TH,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Region::BW => "BW",
            Region::BY => "BY",
            Region::BE => "BE",
            Region::BB => "BB",
            Region::HB => "HB",
            Region::HH => "HH",
            Region::HE => "HE",
            Region::MV => "MV",
            Region::NI => "NI",
            Region::NW => "NW",
            Region::RP => "RP",
            Region::SL => "SL",
            Region::SN => "SN",
            Region::ST => "ST",
            Region::SH => "SH",
            Region::TH => "TH",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::BW => "Baden-Württemberg",
            Region::BY => "Bayern",
            Region::BE => "Berlin",
            Region::BB => "Brandenburg",
            Region::HB => "Bremen",
            Region::HH => "Hamburg",
            Region::HE => "Hessen",
            Region::MV => "Mecklenburg-Vorpommern",
            Region::NI => "Niedersachsen",
            Region::NW => "Nordrhein-Westfalen",
            Region::RP => "Rheinland-Pfalz",
            Region::SL => "Saarland",
            Region::SN => "Sachsen",
            Region::ST => "Sachsen-Anhalt",
            Region::SH => "Schleswig-Holstein",
            Region::TH => "Thüringen",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Region::ALL
            .into_iter()
            .find(|r| r.code() == code)
            .ok_or_else(|| HolidayError::UnknownRegion(s.to_string()))
    }
}
