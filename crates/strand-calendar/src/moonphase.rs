//! Moon phase approximation for event annotation.
//!
//! Uses John Conway's "do it in your head" algorithm; only valid for the
//! 20th and 21st centuries. See <http://www.ben-daglish.net/moon.shtml>.

use chrono::{Datelike, NaiveDate};

/// Phase day for the given date, 0 to 29 (0 = new moon, 15 = full).
pub fn phase_day(date: NaiveDate) -> u8 {
    let year = date.year();
    let mut r = (year % 100) % 19;
    if r > 9 {
        r -= 19;
    }
    let mut phase = ((r * 11) % 30 + date.month() as i32 + date.day() as i32) as f64;
    if date.month() < 3 {
        phase += 2.0;
    }
    phase -= if year < 2000 { 4.0 } else { 8.3 };
    let mut day = (phase + 0.5).floor() as i32 % 30;
    if day < 0 {
        day += 30;
    }
    day as u8
}

/// Phase day plus a pseudo-graphic display, e.g. `"15 [  O  ] 1"`.
pub fn phase_display(date: NaiveDate) -> String {
    const SHAPES: &str = "  ))))))))))))OOO(((((((((((( ";
    const FRACTIONS: &str = "00\u{bc}\u{bc}\u{bc}\u{bc}\u{bd}\u{bd}\u{bd}\u{bd}\u{be}\u{be}\u{be}\u{be}111\u{be}\u{be}\u{be}\u{be}\u{bd}\u{bd}\u{bd}\u{bd}\u{bc}\u{bc}\u{bc}\u{bc}0";
    let day = phase_day(date) as usize;
    let shape = SHAPES.chars().nth(day).unwrap_or(' ');
    let fraction = FRACTIONS.chars().nth(day).unwrap_or('0');
    format!("{day} [  {shape}  ] {fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn phase_day_stays_in_cycle() {
        for day in 1..=28 {
            let phase = phase_day(date(2023, 6, day));
            assert!(phase <= 29);
        }
    }

    #[test]
    fn known_new_moon() {
        // 2000-01-06 was a new moon.
        let phase = phase_day(date(2000, 1, 6));
        assert!(phase <= 1 || phase >= 29, "got phase {phase}");
    }

    #[test]
    fn known_full_moon() {
        // 2023-01-06 was a full moon.
        let phase = phase_day(date(2023, 1, 6));
        assert!((13..=17).contains(&phase), "got phase {phase}");
    }

    #[test]
    fn display_includes_phase_day() {
        let line = phase_display(date(2023, 1, 6));
        assert!(line.starts_with(&phase_day(date(2023, 1, 6)).to_string()));
        assert!(line.contains('['));
    }

    #[test]
    fn twentieth_century_correction() {
        // The pre-2000 branch subtracts 4 instead of 8.3.
        let a = phase_day(date(1999, 6, 1));
        let b = phase_day(date(2001, 6, 1));
        assert!(a <= 29 && b <= 29);
    }
}
