// src/application/ports/time.rs
use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Today's date in the fixed-width `yyyy-mm-dd` form the publication
    /// date rules compare against.
    fn today(&self) -> String {
        self.now().format("%Y-%m-%d").to_string()
    }
}
