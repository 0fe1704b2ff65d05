use chrono::{Duration, NaiveDate};

use crate::evaluation::domain::{
    CommunityLog, DietLog, ExerciseLog, HabitEntry, SleepLog, StudentId, StudyLog, WakeUpLog,
    WorshipLog,
};

pub(super) fn month_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

pub(super) fn blank_entry(day: i64) -> HabitEntry {
    HabitEntry::new(StudentId::new("S-001"), month_start() + Duration::days(day))
}

/// `count` consecutive days starting on the first of the month, each shaped by `fill`.
pub(super) fn days<F>(count: usize, mut fill: F) -> Vec<HabitEntry>
where
    F: FnMut(&mut HabitEntry),
{
    (0..count)
        .map(|day| {
            let mut entry = blank_entry(day as i64);
            fill(&mut entry);
            entry
        })
        .collect()
}

pub(super) fn wake_up(time: &str, recited_prayer: bool) -> impl FnMut(&mut HabitEntry) + '_ {
    move |entry| {
        entry.habits.wake_up = Some(WakeUpLog {
            time: time.to_string(),
            recited_prayer,
        })
    }
}

pub(super) fn sleep(time: &str, recited_prayer: bool) -> impl FnMut(&mut HabitEntry) + '_ {
    move |entry| {
        entry.habits.sleep = Some(SleepLog {
            time: time.to_string(),
            recited_prayer,
        })
    }
}

pub(super) fn exercise(duration: &str) -> impl FnMut(&mut HabitEntry) + '_ {
    move |entry| {
        entry.habits.exercise = Some(ExerciseLog {
            duration_minutes: duration.to_string(),
        })
    }
}

pub(super) fn study(did_study: bool, category: &str) -> impl FnMut(&mut HabitEntry) + '_ {
    move |entry| {
        entry.habits.study = Some(StudyLog {
            did_study,
            category: category.to_string(),
        })
    }
}

pub(super) fn community(witnessed: bool) -> impl FnMut(&mut HabitEntry) {
    move |entry| entry.habits.community = Some(CommunityLog { witnessed })
}

pub(super) fn diet(log: DietLog) -> impl FnMut(&mut HabitEntry) {
    move |entry| entry.habits.diet = Some(log.clone())
}

pub(super) fn worship(log: WorshipLog) -> impl FnMut(&mut HabitEntry) {
    move |entry| entry.habits.worship = Some(log.clone())
}

pub(super) fn devout_day() -> WorshipLog {
    WorshipLog {
        fajr_prayer: true,
        five_daily_prayers: true,
        dhikr: true,
        dhuha: true,
        rawatib: true,
        personal_prayer: true,
        charity_amount: "Rp 2.000".to_string(),
    }
}

/// A day with every indicator reported and every habit kept.
pub(super) fn full_day(entry: &mut HabitEntry) {
    wake_up("04:00", true)(entry);
    worship(devout_day())(entry);
    exercise("45")(entry);
    diet(DietLog {
        main_food: "Nasi".to_string(),
        side_dish: "Tempe".to_string(),
        ate_veg_fruit: true,
        took_supplement: false,
    })(entry);
    study(true, "mengerjakan_tugas")(entry);
    community(true)(entry);
    sleep("21:00", true)(entry);
}
