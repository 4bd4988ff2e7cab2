use chrono::{Local, NaiveDateTime};

/// Current local wall-clock time, the reference point for booking windows.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
