//! iCalendar export of a vacation schedule.

use brueckentag_core::VacationEntry;

/// One all-day VEVENT per entry. DTEND is exclusive, so it lands on the day
/// after the entry ends.
pub fn schedule_to_ics(schedule: &[VacationEntry]) -> String {
    let mut s = String::new();
    s.push_str("BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//Brueckentag//EN\n");

    for e in schedule {
        let dtstart = e.start.format("%Y%m%d");
        let dtend = e.end.succ_opt().unwrap_or(e.end).format("%Y%m%d");

        s.push_str("BEGIN:VEVENT\n");
        s.push_str(&format!("UID:brueckentag-{}@brueckentag\n", dtstart));
        s.push_str(&format!("DTSTART;VALUE=DATE:{}\n", dtstart));
        s.push_str(&format!("DTEND;VALUE=DATE:{}\n", dtend));
        s.push_str(&format!(
            "SUMMARY:{}\n",
            escape_ics(&format!("Urlaub ({} Tage)", e.duration_days))
        ));
        if !e.holidays_used.is_empty() {
            let names: Vec<&str> = e.holidays_used.iter().map(|h| h.name.as_str()).collect();
            s.push_str(&format!(
                "DESCRIPTION:{}\n",
                escape_ics(&format!("Feiertage: {}", names.join(", ")))
            ));
        }
        s.push_str("TRANSP:TRANSPARENT\n");
        s.push_str("END:VEVENT\n");
    }

    s.push_str("END:VCALENDAR\n");
    s
}

fn escape_ics(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use brueckentag_core::HolidayRef;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_ics("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
    }

    #[test]
    fn test_empty_schedule() {
        assert_eq!(
            schedule_to_ics(&[]),
            "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//Brueckentag//EN\nEND:VCALENDAR\n"
        );
    }

    #[test]
    fn test_all_day_event() {
        let entry = VacationEntry {
            start: date(2025, 5, 29),
            end: date(2025, 6, 1),
            duration_days: 4,
            holidays_used: vec![HolidayRef {
                date: date(2025, 5, 29),
                name: "Christi Himmelfahrt".into(),
            }],
        };
        let ics = schedule_to_ics(&[entry]);
        assert!(ics.contains("DTSTART;VALUE=DATE:20250529\n"));
        assert!(ics.contains("DTEND;VALUE=DATE:20250602\n"));
        assert!(ics.contains("SUMMARY:Urlaub (4 Tage)\n"));
        assert!(ics.contains("DESCRIPTION:Feiertage: Christi Himmelfahrt\n"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    }

    #[test]
    fn test_year_end_event_crosses_into_next_year() {
        let entry = VacationEntry {
            start: date(2025, 12, 20),
            end: date(2025, 12, 31),
            duration_days: 12,
            holidays_used: Vec::new(),
        };
        let ics = schedule_to_ics(&[entry]);
        assert!(ics.contains("DTEND;VALUE=DATE:20260101\n"));
        assert!(!ics.contains("DESCRIPTION"));
    }
}
