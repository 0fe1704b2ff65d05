use crate::normalize::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque external identifier of a student.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One calendar day's habit submission for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitEntry {
    #[serde(deserialize_with = "deserialize_lenient_date")]
    pub date: NaiveDate,
    pub student_id: StudentId,
    #[serde(flatten)]
    pub habits: DailyHabits,
}

impl HabitEntry {
    pub fn new(student_id: StudentId, date: NaiveDate) -> Self {
        Self {
            date,
            student_id,
            habits: DailyHabits::default(),
        }
    }
}

/// The per-indicator sub-records of an entry. `None` means "not reported".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyHabits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wake_up: Option<WakeUpLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worship: Option<WorshipLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<ExerciseLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<DietLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study: Option<StudyLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<CommunityLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep: Option<SleepLog>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WakeUpLog {
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub time: String,
    #[serde(default)]
    pub recited_prayer: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorshipLog {
    #[serde(default)]
    pub fajr_prayer: bool,
    #[serde(default)]
    pub five_daily_prayers: bool,
    #[serde(default)]
    pub dhikr: bool,
    #[serde(default)]
    pub dhuha: bool,
    #[serde(default)]
    pub rawatib: bool,
    #[serde(default)]
    pub personal_prayer: bool,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub charity_amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub duration_minutes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietLog {
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub main_food: String,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub side_dish: String,
    #[serde(default)]
    pub ate_veg_fruit: bool,
    #[serde(default)]
    pub took_supplement: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyLog {
    #[serde(default)]
    pub did_study: bool,
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityLog {
    #[serde(default)]
    pub witnessed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepLog {
    #[serde(default, deserialize_with = "deserialize_loose_text")]
    pub time: String,
    #[serde(default)]
    pub recited_prayer: bool,
}

/// The seven evaluated habits, in canonical presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    WakeUp,
    Worship,
    Exercise,
    Diet,
    Study,
    Community,
    Sleep,
}

impl Indicator {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::WakeUp,
            Self::Worship,
            Self::Exercise,
            Self::Diet,
            Self::Study,
            Self::Community,
            Self::Sleep,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::WakeUp => "wake_up",
            Self::Worship => "worship",
            Self::Exercise => "exercise",
            Self::Diet => "diet",
            Self::Study => "study",
            Self::Community => "community",
            Self::Sleep => "sleep",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WakeUp => "Bangun Pagi",
            Self::Worship => "Beribadah",
            Self::Exercise => "Berolahraga",
            Self::Diet => "Makan Sehat dan Bergizi",
            Self::Study => "Gemar Belajar",
            Self::Community => "Bermasyarakat",
            Self::Sleep => "Tidur Cepat",
        }
    }

    /// Phrase used in "no data" notes.
    pub(crate) const fn activity(self) -> &'static str {
        match self {
            Self::WakeUp => "bangun pagi",
            Self::Worship => "ibadah",
            Self::Exercise => "olahraga",
            Self::Diet => "makan sehat",
            Self::Study => "belajar",
            Self::Community => "kegiatan bermasyarakat",
            Self::Sleep => "tidur",
        }
    }

    pub(crate) fn no_data_note(self) -> String {
        format!("Belum ada data {} pada periode ini", self.activity())
    }
}

/// A 1–5 score. Serialized as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    Poor = 1,
    Fair = 2,
    Good = 3,
    VeryGood = 4,
    Excellent = 5,
}

impl Rating {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Poor,
            Self::Fair,
            Self::Good,
            Self::VeryGood,
            Self::Excellent,
        ]
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Poor),
            2 => Some(Self::Fair),
            3 => Some(Self::Good),
            4 => Some(Self::VeryGood),
            5 => Some(Self::Excellent),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Istimewa",
            Self::VeryGood => "Sangat baik",
            Self::Good => "Baik",
            Self::Fair => "Cukup",
            Self::Poor => "Kurang baik",
        }
    }

    /// How often the habit was kept, as used in the ratio-based notes.
    pub const fn frequency(self) -> &'static str {
        match self {
            Self::Excellent => "Selalu",
            Self::VeryGood => "Sering",
            Self::Good => "Kadang-kadang",
            Self::Fair => "Jarang",
            Self::Poor => "Pernah",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Self::from_value(value)
            .ok_or_else(|| serde::de::Error::custom(format!("rating {value} outside 1..=5")))
    }
}

fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognised date '{raw}'")))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseText {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Form fields arrive as strings or numbers depending on the client.
fn deserialize_loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseText>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseText::Text(text)) => text,
        Some(LooseText::Integer(number)) => number.to_string(),
        Some(LooseText::Float(number)) => number.to_string(),
        None => String::new(),
    })
}
