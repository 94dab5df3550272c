#[cfg(test)]
mod tests {
    use chrono::{
        DateTime, Duration, FixedOffset, MappedLocalTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
    };
    use eisen::libs::stats::aggregate;
    use eisen::libs::task::{Quadrant, Task, TaskStatus};
    use eisen::libs::window::{filter, start_of_day, Window};

    /// Zone at UTC-3 that springs forward to UTC-2 at local midnight on
    /// 2024-03-10, so 00:00..01:00 that day does not exist.
    #[derive(Debug, Clone, Copy)]
    struct MidnightDstZone;

    impl MidnightDstZone {
        fn switch_local() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_time(NaiveTime::MIN)
        }

        fn before() -> FixedOffset {
            FixedOffset::west_opt(3 * 3600).unwrap()
        }

        fn after() -> FixedOffset {
            FixedOffset::west_opt(2 * 3600).unwrap()
        }
    }

    impl TimeZone for MidnightDstZone {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            MidnightDstZone
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> MappedLocalTime<FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> MappedLocalTime<FixedOffset> {
            let switch = Self::switch_local();
            if *local < switch {
                MappedLocalTime::Single(Self::before())
            } else if *local < switch + Duration::hours(1) {
                MappedLocalTime::None
            } else {
                MappedLocalTime::Single(Self::after())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            // local midnight at UTC-3 is 03:00 UTC
            if *utc < Self::switch_local() + Duration::hours(3) {
                Self::before()
            } else {
                Self::after()
            }
        }
    }

    fn task_at(id: &str, created_at: DateTime<Utc>) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: None,
            quadrant: Quadrant::Important,
            created_at,
            completed_at: None,
            status: TaskStatus::Pending,
            tags: vec![],
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_excludes_older_tasks() {
        let day0 = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let tasks = vec![task_at("today", day0), task_at("old", day0 - Duration::days(10))];

        let filtered = filter(&tasks, &Window::Week, &day0);
        assert_eq!(aggregate(&filtered).total, 1);
        assert_eq!(filtered[0].id, "today");
    }

    #[test]
    fn test_preset_lower_bounds() {
        let reference = Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 0).unwrap();

        assert_eq!(
            Window::Day.lower_bound(&reference),
            Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()
        );
        assert_eq!(
            Window::Week.lower_bound(&reference),
            Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap()
        );
        assert_eq!(
            Window::Month.lower_bound(&reference),
            Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap()
        );
        assert_eq!(
            Window::Year.lower_bound(&reference),
            Utc.with_ymd_and_hms(2023, 3, 12, 0, 0, 0).unwrap()
        );
        assert!(Window::Week.upper_bound(&reference).is_none());
    }

    #[test]
    fn test_week_boundary_is_inclusive() {
        let reference = Utc.with_ymd_and_hms(2024, 3, 10, 15, 30, 0).unwrap();
        let tasks = vec![
            task_at("edge", Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap()),
            task_at("before", Utc.with_ymd_and_hms(2024, 3, 3, 23, 59, 59).unwrap()),
        ];

        let filtered = filter(&tasks, &Window::Week, &reference);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "edge");
    }

    #[test]
    fn test_custom_window_end_of_day() {
        let window = Window::Custom {
            start: date(2024, 1, 1),
            end: date(2024, 1, 31),
        };
        let reference = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let tasks = vec![
            task_at("last-second", Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap()),
            task_at("next-day", Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
            task_at("first", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            task_at("too-early", Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap()),
        ];

        let ids: Vec<_> = filter(&tasks, &window, &reference).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["last-second", "first"]);
    }

    #[test]
    fn test_custom_window_ignores_reference() {
        let window = Window::Custom {
            start: date(2024, 1, 1),
            end: date(2024, 1, 1),
        };
        let task = task_at("a", Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());

        let early = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert!(window.contains(&task, &early));
        assert!(window.contains(&task, &late));
    }

    #[test]
    fn test_from_kind_fallbacks() {
        assert_eq!(Window::from_kind("day", None), Window::Day);
        assert_eq!(Window::from_kind("MONTH", None), Window::Month);
        assert_eq!(Window::from_kind("fortnight", None), Window::Week);
        assert_eq!(Window::from_kind("custom", None), Window::Week);
        assert_eq!(
            Window::from_kind("custom", Some((date(2024, 1, 1), date(2024, 1, 2)))),
            Window::Custom {
                start: date(2024, 1, 1),
                end: date(2024, 1, 2)
            }
        );
    }

    #[test]
    fn test_filter_keeps_input_order() {
        let reference = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let tasks = vec![
            task_at("b", reference - Duration::hours(1)),
            task_at("a", reference - Duration::hours(5)),
            task_at("c", reference - Duration::hours(3)),
        ];

        let ids: Vec<_> = filter(&tasks, &Window::Day, &reference).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_skipped_midnight_starts_at_first_valid_hour() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        // 01:00 local at UTC-2
        assert_eq!(
            start_of_day(day, &MidnightDstZone),
            Utc.with_ymd_and_hms(2024, 3, 10, 3, 0, 0).unwrap()
        );
        // An ordinary midnight is unaffected
        assert_eq!(
            start_of_day(day.pred_opt().unwrap(), &MidnightDstZone),
            Utc.with_ymd_and_hms(2024, 3, 9, 3, 0, 0).unwrap()
        );

        let reference = MidnightDstZone.from_utc_datetime(&day.and_hms_opt(15, 0, 0).unwrap());
        assert_eq!(
            Window::Day.lower_bound(&reference),
            Utc.with_ymd_and_hms(2024, 3, 10, 3, 0, 0).unwrap()
        );
        let tasks = vec![
            task_at("before", Utc.with_ymd_and_hms(2024, 3, 10, 2, 30, 0).unwrap()),
            task_at("after", Utc.with_ymd_and_hms(2024, 3, 10, 4, 0, 0).unwrap()),
        ];
        let kept = filter(&tasks, &Window::Day, &reference);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "after");
    }
}
