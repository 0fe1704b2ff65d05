use crate::evaluation::{
    CommunityLog, DailyHabits, DietLog, ExerciseLog, HabitEntry, SleepLog, StudentId, StudyLog,
    WakeUpLog, WorshipLog,
};
use crate::normalize::parse_date;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<HabitLogRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<HabitLogRow>().collect()
}

/// One row of the flat habit-log export. Every column is optional; a
/// sub-record exists when any of its columns is filled in.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct HabitLogRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) student_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) student_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    wake_up_time: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    wake_up_prayer: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    fajr_prayer: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    five_daily_prayers: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    dhikr: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    dhuha: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rawatib: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    personal_prayer: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    charity_amount: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    exercise_minutes: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    main_food: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    side_dish: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    ate_veg_fruit: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    took_supplement: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    did_study: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    study_category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    community_witnessed: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sleep_time: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sleep_prayer: Option<String>,
}

impl HabitLogRow {
    /// `None` when the row has no student or no recognisable date.
    pub(crate) fn to_entry(&self) -> Option<HabitEntry> {
        let date = self.date.as_deref().and_then(parse_date)?;
        let student_id = StudentId::new(self.student_id.as_deref()?);

        Some(HabitEntry {
            date,
            student_id,
            habits: self.habits(),
        })
    }

    fn habits(&self) -> DailyHabits {
        DailyHabits {
            wake_up: any_present(&[&self.wake_up_time, &self.wake_up_prayer]).then(|| WakeUpLog {
                time: text(&self.wake_up_time),
                recited_prayer: flag(&self.wake_up_prayer),
            }),
            worship: any_present(&[
                &self.fajr_prayer,
                &self.five_daily_prayers,
                &self.dhikr,
                &self.dhuha,
                &self.rawatib,
                &self.personal_prayer,
                &self.charity_amount,
            ])
            .then(|| WorshipLog {
                fajr_prayer: flag(&self.fajr_prayer),
                five_daily_prayers: flag(&self.five_daily_prayers),
                dhikr: flag(&self.dhikr),
                dhuha: flag(&self.dhuha),
                rawatib: flag(&self.rawatib),
                personal_prayer: flag(&self.personal_prayer),
                charity_amount: text(&self.charity_amount),
            }),
            exercise: self.exercise_minutes.as_ref().map(|minutes| ExerciseLog {
                duration_minutes: minutes.clone(),
            }),
            diet: any_present(&[
                &self.main_food,
                &self.side_dish,
                &self.ate_veg_fruit,
                &self.took_supplement,
            ])
            .then(|| DietLog {
                main_food: text(&self.main_food),
                side_dish: text(&self.side_dish),
                ate_veg_fruit: flag(&self.ate_veg_fruit),
                took_supplement: flag(&self.took_supplement),
            }),
            study: any_present(&[&self.did_study, &self.study_category]).then(|| StudyLog {
                did_study: flag(&self.did_study),
                category: text(&self.study_category),
            }),
            community: self
                .community_witnessed
                .as_ref()
                .map(|_| CommunityLog {
                    witnessed: flag(&self.community_witnessed),
                }),
            sleep: any_present(&[&self.sleep_time, &self.sleep_prayer]).then(|| SleepLog {
                time: text(&self.sleep_time),
                recited_prayer: flag(&self.sleep_prayer),
            }),
        }
    }
}

fn any_present(columns: &[&Option<String>]) -> bool {
    columns.iter().any(|column| column.is_some())
}

fn text(column: &Option<String>) -> String {
    column.clone().unwrap_or_default()
}

/// Spreadsheet booleans. Anything not spelled as a yes (`true`, `1`, `ya`,
/// `yes`, `v`, `sudah`) is false.
pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "ya" | "y" | "yes" | "v" | "sudah"
    )
}

fn flag(column: &Option<String>) -> bool {
    column.as_deref().map(parse_flag).unwrap_or(false)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
