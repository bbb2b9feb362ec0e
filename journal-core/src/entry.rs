use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Deserializer, Serialize};

/// A single journal record.
///
/// Serialized verbatim to one file and never rewritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub publish_time: DateTime<Local>,
    pub writing_start_time: DateTime<Local>,
    pub content: String,
}

impl Entry {
    /// Creates an entry stamped with the current time for both timestamps.
    pub fn new(content: impl Into<String>, tags: Vec<String>) -> Self {
        let now = Local::now();
        Self::with_times(content, tags, now, now)
    }

    /// Creates an entry with caller-supplied timestamps. No ordering check is made.
    pub fn with_times(
        content: impl Into<String>,
        tags: Vec<String>,
        writing_start_time: DateTime<Local>,
        publish_time: DateTime<Local>,
    ) -> Self {
        Self {
            tags,
            publish_time,
            writing_start_time,
            content: content.into(),
        }
    }

    /// Time spent between starting to write and publishing.
    pub fn writing_duration(&self) -> Duration {
        self.publish_time - self.writing_start_time
    }
}

// Older files may carry `"tags": null`.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
