#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    state: web::Data<AppState>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](state, info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use anyhow::{bail, Context};
use chrono::NaiveDate;

use crate::models::appointments::Status;
use crate::models::slots::TimeSlot;

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn parse_date_str(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).context("Wrong format on 'date'")
}

pub fn format_date_str(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub fn parse_slot_str(s: &str) -> anyhow::Result<TimeSlot> {
    match TimeSlot::from_label(s) {
        Some(slot) => Ok(slot),
        None => bail!("Unknown time slot"),
    }
}

pub fn parse_status_opt(s: Option<String>) -> anyhow::Result<Option<Status>> {
    match s {
        Some(s) => match Status::from_label(&s) {
            Some(status) => Ok(Some(status)),
            None => bail!("Unknown status"),
        },
        None => Ok(None),
    }
}

pub fn parse_kind_opt(s: Option<String>) -> anyhow::Result<Option<&'static str>> {
    match s.as_deref() {
        None => Ok(None),
        Some("counseling") => Ok(Some("counseling")),
        Some("advisory") => Ok(Some("advisory")),
        Some(_) => bail!("Unknown appointment kind"),
    }
}

pub fn parse_date_opt(s: Option<String>) -> anyhow::Result<Option<NaiveDate>> {
    match s {
        Some(s) => Ok(Some(parse_date_str(&s)?)),
        None => Ok(None),
    }
}

// Forms reject blank required fields before the store is touched.
pub fn assert_filled(fields: &[(&str, &str)]) -> anyhow::Result<()> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            bail!("Missing required field '{}'", name);
        }
    }
    Ok(())
}

pub fn match_pattern_opt(field: &str, pattern: &Option<String>) -> bool {
    match pattern {
        Some(pattern) => field.to_lowercase().contains(&pattern.to_lowercase()),
        None => true,
    }
}

pub fn page<T>(items: Vec<T>, first_index: Option<i64>, limit: Option<i64>) -> Vec<T> {
    let first_index = first_index.unwrap_or(0).max(0) as usize;
    let limit = limit.unwrap_or(30).max(0) as usize;
    items.into_iter().skip(first_index).take(limit).collect()
}
