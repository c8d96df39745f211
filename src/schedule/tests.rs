//! Test suite for schedule records and pagination.

use super::*;

/// Helper to build a section meeting on the given days at one time block.
fn sec(code: &str, section: &str, faculty: (&str, &str), days: &[&str], time: &str) -> CourseSection {
    days.iter().fold(
        CourseSection::new("BSCSE", code, code, section)
            .with_faculty(faculty.0, faculty.1)
            .with_credit("3"),
        |s, d| s.with_meeting(*d, time),
    )
}

fn prefs(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod schedule_record {
    use super::*;

    fn sample() -> Schedule {
        let courses = vec![
            sec("CSE101", "1", ("Dr. A", "A"), &["Sun", "Tue"], "11:00 AM - 12:30 PM"),
            sec("MAT101", "2", ("Dr. B", "B"), &["Sun"], "8:00 AM - 9:30 AM"),
            sec("PHY101", "1", ("TBA", "TBA"), &["Wed"], "TBA"),
        ];
        Schedule::from_courses(3, courses, &prefs(&["Dr. B (B)", "Dr. Z (Z)"]))
    }

    #[test]
    fn test_rank_and_id() {
        let s = sample();
        assert_eq!(s.rank(), 3);
        assert_eq!(s.id(), "schedule-3");
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_preferred_faculties_split() {
        let s = sample();
        assert_eq!(s.matched_preferred_faculties(), ["Dr. B (B)".to_string()]);
        assert_eq!(s.missing_preferred_faculties(), ["Dr. Z (Z)".to_string()]);
        assert!(!s.meets_all_preferences());
    }

    #[test]
    fn test_no_preferences_means_all_met() {
        let courses = vec![sec("CSE101", "1", ("Dr. A", "A"), &["Sun"], "8:00 AM - 9:00 AM")];
        let s = Schedule::from_courses(1, courses, &[]);
        assert!(s.meets_all_preferences());
        assert!(s.matched_preferred_faculties().is_empty());
    }

    #[test]
    fn test_repeated_preference_is_reported_once() {
        let courses = vec![sec("CSE101", "1", ("Dr. A", "A"), &["Sun"], "8:00 AM - 9:00 AM")];
        let s = Schedule::from_courses(1, courses, &prefs(&["Dr. Q (Q)", "Dr. Q (Q)"]));
        assert_eq!(s.missing_preferred_faculties().len(), 1);
    }

    #[test]
    fn test_days_and_credits() {
        let s = sample();
        assert_eq!(s.days(), [Weekday::Sun, Weekday::Tue, Weekday::Wed]);
        assert_eq!(s.days_used(), 3);
        assert_eq!(s.total_credits(), 9);
    }
}

#[cfg(test)]
mod daily_view {
    use super::*;

    fn codes(sections: &[CourseSection]) -> Vec<&str> {
        sections.iter().map(|s| s.course_code.as_str()).collect()
    }

    #[test]
    fn test_sections_listed_under_every_meeting_day() {
        let courses = vec![
            sec("CSE101", "1", ("Dr. A", "A"), &["Sun", "Tue"], "11:00 AM - 12:30 PM"),
            sec("MAT101", "2", ("Dr. B", "B"), &["Sun"], "8:00 AM - 9:30 AM"),
        ];
        let s = Schedule::from_courses(1, courses, &[]);
        assert_eq!(codes(s.sections_on(Weekday::Sun)), vec!["MAT101", "CSE101"]);
        assert_eq!(codes(s.sections_on(Weekday::Tue)), vec!["CSE101"]);
        assert!(s.sections_on(Weekday::Mon).is_empty());
        assert_eq!(s.daily_schedule().len(), 2);
    }

    #[test]
    fn test_unparseable_times_go_last() {
        let courses = vec![
            sec("PHY101", "1", ("TBA", "TBA"), &["Mon"], "TBA"),
            sec("CSE101", "1", ("Dr. A", "A"), &["Mon"], "2:00 PM - 3:00 PM"),
            sec("MAT101", "1", ("Dr. B", "B"), &["Mon"], "9:00 AM - 10:00 AM"),
        ];
        let s = Schedule::from_courses(1, courses, &[]);
        assert_eq!(codes(s.sections_on(Weekday::Mon)), vec!["MAT101", "CSE101", "PHY101"]);
    }

    #[test]
    fn test_second_day_uses_its_own_time() {
        let split = CourseSection::new("BSCSE", "CSE201", "Lab", "1")
            .with_meeting("Sun", "8:00 AM - 9:00 AM")
            .with_meeting("Thu", "2:00 PM - 5:00 PM");
        let other = sec("MAT101", "1", ("Dr. B", "B"), &["Thu"], "11:00 AM - 12:00 PM");
        let s = Schedule::from_courses(1, vec![split, other], &[]);
        assert_eq!(codes(s.sections_on(Weekday::Thu)), vec!["MAT101", "CSE201"]);
        assert_eq!(codes(s.sections_on(Weekday::Sun)), vec!["CSE201"]);
    }
}

#[cfg(test)]
mod pagination {
    use super::*;

    #[test]
    fn test_batches_in_order() {
        let items: Vec<u32> = (1..=25).collect();
        let mut pages = Paginator::new(&items, 10);
        assert_eq!(pages.next_page(), &items[..10]);
        assert_eq!(pages.remaining(), 15);
        assert_eq!(pages.next_batch(3), &[11, 12, 13]);
        assert_eq!(pages.shown().len(), 13);
        assert_eq!(pages.next_page(), &items[13..23]);
        assert_eq!(pages.next_page(), &[24, 25]);
        assert!(pages.is_exhausted());
        assert!(pages.next_page().is_empty());
    }

    #[test]
    fn test_reset_starts_over() {
        let items = vec!["a", "b", "c"];
        let mut pages = Paginator::new(&items, 2);
        pages.next_page();
        pages.reset();
        assert_eq!(pages.remaining(), 3);
        assert_eq!(pages.next_batch(1), &["a"]);
    }

    #[test]
    fn test_iterates_pages() {
        let items: Vec<u32> = (0..5).collect();
        let pages: Vec<&[u32]> = Paginator::new(&items, 2).collect();
        assert_eq!(pages, vec![&[0, 1][..], &[2, 3][..], &[4][..]]);
        assert!(Paginator::new(&Vec::<u32>::new(), 2).next().is_none());
    }

    #[test]
    fn test_zero_batch_size_is_clamped() {
        let items = vec![1, 2];
        let pages = Paginator::new(&items, 0);
        assert_eq!(pages.batch_size(), 1);
        assert_eq!(pages.total(), 2);
    }
}
