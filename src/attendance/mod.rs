// src/attendance/mod.rs - Attendance page view composition
use crate::core::prelude::*;
use crate::i18n::catalog;
use chrono::NaiveDate;

pub mod reveal;

pub use reveal::{reveal_duration_ms, reveal_frames, RevealFrame};

/// Input for the attendance page: a greeting supplied by the host
/// (usually addressed to the signed-in staff member) and the page date.
#[derive(Debug, Clone)]
pub struct AttendancePage {
    pub greeting: BilingualText,
    pub date: NaiveDate,
}

/// The page already resolved for one language, with the greeting broken
/// into its reveal schedule.
#[derive(Debug, Clone)]
pub struct AttendanceView {
    pub heading: String,
    pub date_line: String,
    pub greeting: String,
    pub frames: Vec<RevealFrame>,
}

impl AttendancePage {
    pub fn new(greeting: BilingualText, date: NaiveDate) -> Self {
        Self { greeting, date }
    }

    pub fn for_today(greeting: BilingualText) -> Self {
        Self::new(greeting, chrono::Local::now().date_naive())
    }

    pub fn render(&self, lang: Language, step_ms: u64) -> AttendanceView {
        let greeting = self.greeting.resolve(lang).to_string();
        let date = match lang {
            Language::En => self.date.format("%B %e, %Y").to_string(),
            // No Gregorian month names in the Amharic table; the numeric
            // form is what the source pages show.
            Language::Am => self.date.format("%d/%m/%Y").to_string(),
        };
        AttendanceView {
            heading: catalog::tr_in(lang, "attendance.heading", &[]),
            date_line: catalog::tr_in(lang, "attendance.date", &[&date]),
            frames: reveal_frames(&greeting, step_ms),
            greeting,
        }
    }
}
