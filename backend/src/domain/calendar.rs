//! Calendar domain logic for the payment tracker.
//!
//! This module contains all business logic related to calendar operations,
//! date calculations, and payment organization by date. Callers only handle
//! presentation concerns, while all calendar computations and the heat
//! classification are handled here.

use anyhow::{bail, Result};
use shared::{CalendarDayCell, CalendarFocusDate, CalendarMonth, VendorCategory};
use std::sync::{Arc, Mutex};

use crate::domain::models::payment::Payment;

/// Calendar service that handles all calendar-related business logic
#[derive(Clone)]
pub struct CalendarService {
    /// Current focus date for calendar navigation (month/year only).
    /// Kept in memory and never persisted.
    current_focus_date: Arc<Mutex<CalendarFocusDate>>,
}

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self {
            current_focus_date: Arc::new(Mutex::new(CalendarFocusDate::default())),
        }
    }

    /// Generate a calendar month view with per-day category totals and
    /// heat levels.
    ///
    /// The view always contains exactly one cell per real day of the month,
    /// day 1 first; leading blanks are the caller's concern and are derived
    /// from `first_day_of_week`. Payments outside the focus month are
    /// ignored, as are records whose day component does not name a real day.
    pub fn generate_calendar_month(
        &self,
        month: u32,
        year: u32,
        payments: &[Payment],
    ) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);

        log::debug!(
            "Generating calendar for {}/{}: {} days, first weekday {}",
            month,
            year,
            days_in_month,
            first_day
        );

        let mut days: Vec<CalendarDayCell> = (1..=days_in_month)
            .map(|day| CalendarDayCell {
                day,
                fmcg: 0.0,
                homeware: 0.0,
                total: 0.0,
                heat_level: 0,
            })
            .collect();

        for payment in payments {
            if let Some((p_year, p_month, p_day)) = self.parse_payment_date(&payment.date) {
                if p_year == year && p_month == month && p_day >= 1 && p_day <= days_in_month {
                    let cell = &mut days[(p_day - 1) as usize];
                    match payment.vendor_category {
                        VendorCategory::Fmcg => cell.fmcg += payment.amount,
                        VendorCategory::Homeware => cell.homeware += payment.amount,
                    }
                    cell.total += payment.amount;
                }
            }
        }

        let max_total = days.iter().map(|cell| cell.total).fold(0.0_f64, f64::max);
        for cell in &mut days {
            cell.heat_level = self.heat_level(cell.total, max_total);
        }

        CalendarMonth {
            month,
            year,
            first_day_of_week: first_day,
            header: format!("{} {}", self.month_name(month), year),
            days,
        }
    }

    /// Classify a day's total against the month's busiest day.
    ///
    /// Level 0 means no spending (or an empty month); levels 1 through 7
    /// band the day's share of the maximum, with the busiest day always
    /// landing on 7.
    pub fn heat_level(&self, total: f64, max_total: f64) -> u8 {
        if max_total <= 0.0 || total <= 0.0 {
            return 0;
        }
        let share = total / max_total;
        if share <= 0.10 {
            1
        } else if share <= 0.25 {
            2
        } else if share <= 0.40 {
            3
        } else if share <= 0.60 {
            4
        } else if share <= 0.80 {
            5
        } else if share <= 0.95 {
            6
        } else {
            7
        }
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: u32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the weekday of the first day of a month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: u32) -> u32 {
        use chrono::{Datelike, NaiveDate};

        if let Some(date) = NaiveDate::from_ymd_opt(year as i32, month, 1) {
            date.weekday().num_days_from_sunday()
        } else {
            0
        }
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Parse a YYYY-MM-DD date string into its literal year, month and day
    /// parts. No calendar validation happens here; a record carrying
    /// "2024-13-40" parses and simply matches no focus month.
    pub fn parse_payment_date(&self, date_str: &str) -> Option<(u32, u32, u32)> {
        let parts: Vec<&str> = date_str.split('-').collect();
        if parts.len() == 3 {
            if let (Ok(year), Ok(month), Ok(day)) = (
                parts[0].parse::<u32>(),
                parts[1].parse::<u32>(),
                parts[2].parse::<u32>(),
            ) {
                return Some((year, month, day));
            }
        }
        None
    }

    /// Compute the month before the given one, wrapping the year
    pub fn previous_month(&self, current_month: u32, current_year: u32) -> (u32, u32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Compute the month after the given one, wrapping the year
    pub fn next_month(&self, current_month: u32, current_year: u32) -> (u32, u32) {
        if current_month == 12 {
            (1, current_year + 1)
        } else {
            (current_month + 1, current_year)
        }
    }

    /// Get the current focus date for calendar navigation
    pub fn get_focus_date(&self) -> CalendarFocusDate {
        self.current_focus_date.lock().unwrap().clone()
    }

    /// Set the focus date for calendar navigation
    pub fn set_focus_date(&self, month: u32, year: u32) -> Result<CalendarFocusDate> {
        if !(1..=12).contains(&month) {
            bail!("Invalid month: {}. Must be between 1 and 12", month);
        }

        let new_focus_date = CalendarFocusDate { month, year };

        {
            let mut focus_date = self.current_focus_date.lock().unwrap();
            *focus_date = new_focus_date.clone();
        }

        Ok(new_focus_date)
    }

    /// Move the focus one month back
    pub fn navigate_previous_month(&self) -> CalendarFocusDate {
        let current = self.get_focus_date();
        let (month, year) = self.previous_month(current.month, current.year);
        let new_focus_date = CalendarFocusDate { month, year };

        let mut focus_date = self.current_focus_date.lock().unwrap();
        *focus_date = new_focus_date.clone();
        new_focus_date
    }

    /// Move the focus one month forward
    pub fn navigate_next_month(&self) -> CalendarFocusDate {
        let current = self.get_focus_date();
        let (month, year) = self.next_month(current.month, current.year);
        let new_focus_date = CalendarFocusDate { month, year };

        let mut focus_date = self.current_focus_date.lock().unwrap();
        *focus_date = new_focus_date.clone();
        new_focus_date
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
