use chrono::{NaiveDate, Utc};

/// Source of "today". The calculator never reads the wall clock directly.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// 使用系統時間 (UTC 日期)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
