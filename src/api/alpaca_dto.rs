use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters, new)]
pub struct AlpacaCalendarDayDto {
    date: NaiveDate,
    open: String,
    close: String,
    session_open: Option<String>,
    session_close: Option<String>,
    settlement_date: Option<NaiveDate>,
}
