//! Client-side data shaping for the dashboards.
//!
//! All functions take `today` explicitly so they are deterministic; callers
//! pass `chrono::Local::now().date_naive()`. Timestamps are compared on the
//! local calendar.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::client::models::{
    Appointment, Notification, PatientRequest, Payment, PaymentStatus, PracticeRecords,
    ScheduleEntry,
};

/// Parse a backend timestamp into a local wall-clock time.
///
/// Accepts RFC 3339 (converted to local time), naive ISO datetimes with `T`
/// or a space, and bare dates (midnight).
pub fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    let timestamp = timestamp.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Calendar day of a backend timestamp
pub fn local_date(timestamp: &str) -> Option<NaiveDate> {
    parse_timestamp(timestamp).map(|dt| dt.date())
}

pub fn is_today(timestamp: &str, today: NaiveDate) -> bool {
    local_date(timestamp) == Some(today)
}

pub fn is_this_month(timestamp: &str, today: NaiveDate) -> bool {
    local_date(timestamp)
        .is_some_and(|d| d.year() == today.year() && d.month() == today.month())
}

/// Monday and Sunday of the week containing `today`
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let since_monday = u64::from(today.weekday().num_days_from_monday());
    let monday = today - Days::new(since_monday);
    (monday, monday + Days::new(6))
}

/// True when `date` falls in the Monday-Sunday week containing `today`
pub fn is_in_current_week(date: NaiveDate, today: NaiveDate) -> bool {
    let (monday, sunday) = week_bounds(today);
    date >= monday && date <= sunday
}

/// Keep payments created within `[from, to]`, both whole days and inclusive.
/// Payments with unparseable timestamps are dropped when any bound is set.
pub fn filter_payments_by_range(
    payments: &[Payment],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<Payment> {
    if from.is_none() && to.is_none() {
        return payments.to_vec();
    }

    payments
        .iter()
        .filter(|p| match local_date(&p.created_at) {
            Some(day) => from.is_none_or(|f| day >= f) && to.is_none_or(|t| day <= t),
            None => false,
        })
        .cloned()
        .collect()
}

/// Earnings card figures derived from a payment list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EarningsBreakdown {
    /// Completed payments created today
    pub today_amount: i64,
    /// Completed payments created this calendar month
    pub month_amount: i64,
    pub pending_count: usize,
    pub pending_amount: i64,
}

pub fn earnings_breakdown(payments: &[Payment], today: NaiveDate) -> EarningsBreakdown {
    payments
        .iter()
        .fold(EarningsBreakdown::default(), |mut acc, p| {
            match p.status {
                PaymentStatus::Completed => {
                    if is_today(&p.created_at, today) {
                        acc.today_amount += p.amount;
                    }
                    if is_this_month(&p.created_at, today) {
                        acc.month_amount += p.amount;
                    }
                }
                PaymentStatus::Pending => {
                    acc.pending_count += 1;
                    acc.pending_amount += p.amount;
                }
                PaymentStatus::Unknown => {}
            }
            acc
        })
}

/// Appointments split around `today`
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppointmentSplit {
    /// Today and later, soonest first
    pub upcoming: Vec<Appointment>,
    /// Before today, most recent first
    pub past: Vec<Appointment>,
}

pub fn split_appointments(appointments: Vec<Appointment>, today: NaiveDate) -> AppointmentSplit {
    let (mut upcoming, mut past): (Vec<_>, Vec<_>) = appointments
        .into_iter()
        .partition(|a| a.appointment_date >= today);

    upcoming.sort_by(|a, b| slot(a).cmp(&slot(b)));
    past.sort_by(|a, b| slot(b).cmp(&slot(a)));

    AppointmentSplit { upcoming, past }
}

/// Where a [`PatientRecord`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSource {
    Appointment,
    Request,
}

/// One row of the doctor's patient list, merged from the schedule and the
/// request history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientRecord {
    pub id: i64,
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub reason: String,
    pub status: String,
    pub source: RecordSource,
}

const DEFAULT_TIME: &str = "09:00 AM";

impl PatientRecord {
    /// `None` when the entry carries a date that cannot be read
    fn from_schedule(entry: &ScheduleEntry, today: NaiveDate) -> Option<Self> {
        Some(Self {
            id: entry.id,
            patient_name: name_or_unknown(entry.patient_name.as_deref()),
            date: record_date(entry.date.as_deref(), today)?,
            time: entry.time_slot.clone().unwrap_or_else(|| DEFAULT_TIME.to_string()),
            reason: entry.kind.clone().unwrap_or_else(|| "Consultation".to_string()),
            status: entry.status.clone().unwrap_or_else(|| "Pending".to_string()),
            source: RecordSource::Appointment,
        })
    }

    /// Requests carry no date and count as today
    fn from_request(request: &PatientRequest, today: NaiveDate) -> Self {
        Self {
            id: request.id,
            patient_name: name_or_unknown(request.patient_name.as_deref()),
            date: today,
            time: request.time.clone().unwrap_or_else(|| DEFAULT_TIME.to_string()),
            reason: request.issue.clone().unwrap_or_else(|| "Consultation".to_string()),
            status: request.status.clone().unwrap_or_else(|| "Pending".to_string()),
            source: RecordSource::Request,
        }
    }

    fn sort_key(&self) -> (NaiveDate, Option<NaiveTime>) {
        (self.date, NaiveTime::parse_from_str(&self.time, "%I:%M %p").ok())
    }
}

fn name_or_unknown(name: Option<&str>) -> String {
    name.filter(|n| !n.is_empty()).unwrap_or("Unknown").to_string()
}

// Missing dates and anything mentioning "today" mean today
fn record_date(date: Option<&str>, today: NaiveDate) -> Option<NaiveDate> {
    match date {
        None => Some(today),
        Some(d) if d.is_empty() || d.to_lowercase().contains("today") => Some(today),
        Some(d) => local_date(d),
    }
}

/// Schedule entries and decided requests that fall in the current
/// Monday-Sunday week, in chronological order
pub fn weekly_patients(records: &PracticeRecords, today: NaiveDate) -> Vec<PatientRecord> {
    let schedule = records
        .appointments
        .iter()
        .filter_map(|entry| PatientRecord::from_schedule(entry, today));
    let requests = records
        .request_history
        .iter()
        .map(|request| PatientRecord::from_request(request, today));

    let mut week: Vec<PatientRecord> = schedule
        .chain(requests)
        .filter(|record| is_in_current_week(record.date, today))
        .collect();
    week.sort_by_key(PatientRecord::sort_key);
    week
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

// "HH:MM" sorts lexically
fn slot(a: &Appointment) -> (NaiveDate, &str) {
    (a.appointment_date, a.appointment_time.as_str())
}
