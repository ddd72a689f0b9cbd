use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::ValidationError, model::api::SubmitApplicationDto};

/// Identifier assigned to an application by the backend.
pub type ApplicationId = i64;

/// Review status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Capitalised form used for status badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An application record as returned by the housing API.
///
/// Staff listings additionally carry the applicant's name and email and may leave out
/// `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDto {
    pub id: ApplicationId,
    pub student_id: i64,
    pub year: i32,
    pub major: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub room_preference: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub additional_info: Option<String>,
    pub status: ApplicationStatus,
    #[serde(with = "timestamp")]
    pub submitted_at: DateTime<Utc>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Raw, unvalidated contents of the application form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub year: String,
    pub major: String,
    pub gender: String,
    pub room_preference: String,
    pub additional_info: String,
}

/// A validated application ready to be submitted.
///
/// Construction guarantees a positive year and a non-empty major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDraft {
    year: i32,
    major: String,
    gender: String,
    room_preference: Option<String>,
    additional_info: Option<String>,
}

impl ApplicationDraft {
    /// Creates a draft without optional details.
    ///
    /// # Returns
    /// - `Ok(ApplicationDraft)` - year is positive and major is not blank
    /// - `Err(ValidationError::YearNotPositive)` - year is zero or negative
    /// - `Err(ValidationError::MissingMajor)` - major is blank
    pub fn new(
        year: i32,
        major: impl Into<String>,
        gender: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if year <= 0 {
            return Err(ValidationError::YearNotPositive(year));
        }

        let major = major.into().trim().to_string();
        if major.is_empty() {
            return Err(ValidationError::MissingMajor);
        }

        Ok(Self {
            year,
            major,
            gender: gender.into().trim().to_string(),
            room_preference: None,
            additional_info: None,
        })
    }

    /// Validates raw form input into a draft.
    pub fn from_form(form: &ApplicationForm) -> Result<Self, ValidationError> {
        let year_input = form.year.trim();
        let year = year_input
            .parse::<i32>()
            .map_err(|_| ValidationError::YearNotNumeric(year_input.to_string()))?;

        Ok(Self::new(year, form.major.as_str(), form.gender.as_str())?
            .with_room_preference(non_blank(&form.room_preference))
            .with_additional_info(non_blank(&form.additional_info)))
    }

    pub fn with_room_preference(mut self, room_preference: Option<String>) -> Self {
        self.room_preference = room_preference;
        self
    }

    pub fn with_additional_info(mut self, additional_info: Option<String>) -> Self {
        self.additional_info = additional_info;
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn room_preference(&self) -> Option<&str> {
        self.room_preference.as_deref()
    }

    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info.as_deref()
    }

    pub(crate) fn to_request(&self) -> SubmitApplicationDto {
        SubmitApplicationDto {
            year: self.year,
            major: self.major.clone(),
            gender: self.gender.clone(),
            room_preference: self.room_preference.clone().unwrap_or_default(),
            additional_info: self.additional_info.clone().unwrap_or_default(),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Timestamp (de)serialisation accepting RFC 3339 as well as offset-less ISO strings.
///
/// Offset-less values are interpreted as UTC. Timestamps are always written as RFC 3339.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn parse(value: &str) -> Option<DateTime<Utc>> {
        let value = value.trim();

        if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
            return Some(datetime.with_timezone(&Utc));
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .map(|naive| naive.and_utc())
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp {:?}", raw)))
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => serializer.serialize_str(&value.to_rfc3339()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| {
                    super::parse(&raw)
                        .ok_or_else(|| D::Error::custom(format!("invalid timestamp {:?}", raw)))
                })
                .transpose()
        }
    }
}
