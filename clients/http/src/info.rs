use actix_web::{get, web};
use actix_web_lab::respond::Html;
use chrono::{DateTime, Duration, Utc};
use database::persistence::PersonStore;

use crate::error::ApiError;

/// Philippine Standard Time, UTC+08:00 all year
const PST_OFFSET_HOURS: i64 = 8;

/// Placeholder page, the front-end is served separately
#[get("/")]
pub async fn home() -> Html {
    Html("<h1>Phonebook</h1>".to_string())
}

#[get("/info")]
pub async fn info(store: web::Data<dyn PersonStore>) -> Result<Html, ApiError> {
    let count = store.count().await?;

    Ok(Html(render_info(count, Utc::now())))
}

pub fn render_info(count: u64, now: DateTime<Utc>) -> String {
    let local = now.naive_utc() + Duration::hours(PST_OFFSET_HOURS);

    format!(
        "<p>Phonebook has info for {} people</p>\n<p>{} Philippine Standard Time</p>",
        count,
        local.format("%a, %b %-d, %Y, %H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn renders_count_and_manila_time() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 6, 3, 22).unwrap();

        assert_eq!(
            render_info(4, now),
            "<p>Phonebook has info for 4 people</p>\n<p>Sun, Oct 18, 2026, 14:03:22 Philippine Standard Time</p>"
        );
    }

    #[test]
    fn rolls_over_to_the_next_day() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 20, 0, 0).unwrap();

        assert!(render_info(0, now).contains("Mon, Oct 19, 2026, 04:00:00"));
    }
}
