use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::ValueEnum;
use strum_macros::Display;

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, ValueEnum)]
#[strum(serialize_all = "UPPERCASE")]
#[value(rename_all = "UPPER")]
pub enum Exchange {
    #[default]
    Xnys,
    Xnas,
}

impl Exchange {
    pub fn mic(&self) -> &'static str {
        match self {
            Exchange::Xnys => "XNYS",
            Exchange::Xnas => "XNAS",
        }
    }

    pub fn timezone(&self) -> Tz {
        match self {
            Exchange::Xnys | Exchange::Xnas => chrono_tz::America::New_York,
        }
    }

    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone()).date_naive()
    }
}
