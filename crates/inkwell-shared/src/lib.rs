use std::fmt;

use chrono::{
  DateTime,
  Utc
};
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

pub const TITLE_MAX_CHARS: usize = 80;
pub const BODY_MAX_CHARS: usize = 5000;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub enum Mood {
  Happy,
  #[default]
  Calm,
  Tired,
  Sad,
  Angry
}

impl Mood {
  pub const ALL: [Mood; 5] = [
    Mood::Happy,
    Mood::Calm,
    Mood::Tired,
    Mood::Sad,
    Mood::Angry
  ];

  pub fn label(self) -> &'static str {
    match self {
      | Mood::Happy => "Happy",
      | Mood::Calm => "Calm",
      | Mood::Tired => "Tired",
      | Mood::Sad => "Sad",
      | Mood::Angry => "Angry"
    }
  }

  pub fn key(self) -> &'static str {
    match self {
      | Mood::Happy => "happy",
      | Mood::Calm => "calm",
      | Mood::Tired => "tired",
      | Mood::Sad => "sad",
      | Mood::Angry => "angry"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|mood| mood.key() == key)
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct DiaryEntry {
  pub id:         Uuid,
  pub title:      String,
  #[serde(default)]
  pub body:       String,
  #[serde(default)]
  pub mood:       Mood,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>
}

impl DiaryEntry {
  /// Builds a new entry from a draft
  /// that already passed validation.
  pub fn from_draft(
    draft: &DiaryDraft,
    now: DateTime<Utc>
  ) -> Self {
    Self {
      id:         Uuid::new_v4(),
      title:      draft.title.trim().to_string(),
      body:       draft.body.trim().to_string(),
      mood:       draft.mood,
      created_at: now,
      updated_at: now
    }
  }

  pub fn apply_draft(
    &mut self,
    draft: &DiaryDraft,
    now: DateTime<Utc>
  ) {
    self.title =
      draft.title.trim().to_string();
    self.body = draft.body.trim().to_string();
    self.mood = draft.mood;
    self.updated_at = now;
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct DiaryDraft {
  pub title: String,
  pub body:  String,
  pub mood:  Mood
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DraftError {
  TitleMissing,
  TitleTooLong,
  BodyMissing,
  BodyTooLong
}

impl fmt::Display for DraftError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | DraftError::TitleMissing => {
        f.write_str("Title is required.")
      }
      | DraftError::TitleTooLong => {
        write!(
          f,
          "Title must be at most \
           {TITLE_MAX_CHARS} characters."
        )
      }
      | DraftError::BodyMissing => {
        f.write_str(
          "Write something before \
           saving."
        )
      }
      | DraftError::BodyTooLong => {
        write!(
          f,
          "Entry must be at most \
           {BODY_MAX_CHARS} characters."
        )
      }
    }
  }
}

impl std::error::Error for DraftError {}

impl DiaryDraft {
  pub fn from_entry(
    entry: &DiaryEntry
  ) -> Self {
    Self {
      title: entry.title.clone(),
      body:  entry.body.clone(),
      mood:  entry.mood
    }
  }

  /// True when nothing was typed yet.
  pub fn is_blank(&self) -> bool {
    self.title.trim().is_empty()
      && self.body.trim().is_empty()
  }

  pub fn validate(
    &self
  ) -> Result<(), Vec<DraftError>> {
    let mut errors = Vec::new();
    let title = self.title.trim();
    let body = self.body.trim();

    if title.is_empty() {
      errors.push(DraftError::TitleMissing);
    } else if title.chars().count()
      > TITLE_MAX_CHARS
    {
      errors.push(DraftError::TitleTooLong);
    }

    if body.is_empty() {
      errors.push(DraftError::BodyMissing);
    } else if body.chars().count()
      > BODY_MAX_CHARS
    {
      errors.push(DraftError::BodyTooLong);
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(errors)
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  fn draft(
    title: &str,
    body: &str
  ) -> DiaryDraft {
    DiaryDraft {
      title: title.to_string(),
      body:  body.to_string(),
      mood:  Mood::Happy
    }
  }

  #[test]
  fn validate_reports_every_missing_field()
  {
    let errors = draft("  ", "")
      .validate()
      .expect_err("blank draft");
    assert_eq!(
      errors,
      vec![
        DraftError::TitleMissing,
        DraftError::BodyMissing
      ]
    );
  }

  #[test]
  fn validate_counts_characters_not_bytes()
  {
    let title = "일".repeat(TITLE_MAX_CHARS);
    assert!(
      draft(&title, "body")
        .validate()
        .is_ok()
    );

    let long = "a".repeat(TITLE_MAX_CHARS + 1);
    assert_eq!(
      draft(&long, "body").validate(),
      Err(vec![DraftError::TitleTooLong])
    );
  }

  #[test]
  fn entry_from_draft_trims_fields() {
    let now = Utc
      .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
      .single()
      .expect("valid timestamp");
    let entry = DiaryEntry::from_draft(
      &draft("  Walk  ", " sunny\n"),
      now
    );

    assert_eq!(entry.title, "Walk");
    assert_eq!(entry.body, "sunny");
    assert_eq!(entry.created_at, now);
    assert_eq!(entry.updated_at, now);
  }

  #[test]
  fn apply_draft_keeps_identity_and_creation_time()
  {
    let created = Utc
      .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
      .single()
      .expect("valid timestamp");
    let later = Utc
      .with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
      .single()
      .expect("valid timestamp");
    let mut entry = DiaryEntry::from_draft(
      &draft("Walk", "sunny"),
      created
    );
    let id = entry.id;

    entry.apply_draft(
      &DiaryDraft {
        title: "Run".to_string(),
        body:  "rainy".to_string(),
        mood:  Mood::Tired
      },
      later
    );

    assert_eq!(entry.id, id);
    assert_eq!(entry.created_at, created);
    assert_eq!(entry.updated_at, later);
    assert_eq!(entry.mood, Mood::Tired);
  }

  #[test]
  fn entry_decodes_without_optional_fields()
  {
    let raw = r#"{
      "id": "5f0c8c0e-2f4b-4d59-9b39-3f0d2f7b6a11",
      "title": "Old entry",
      "created_at": "2026-01-01T00:00:00Z",
      "updated_at": "2026-01-01T00:00:00Z"
    }"#;
    let entry: DiaryEntry =
      serde_json::from_str(raw)
        .expect("decode entry");
    assert_eq!(entry.mood, Mood::Calm);
    assert!(entry.body.is_empty());
  }

  #[test]
  fn mood_keys_round_trip() {
    for mood in Mood::ALL {
      assert_eq!(
        Mood::from_key(mood.key()),
        Some(mood)
      );
    }
    assert_eq!(Mood::from_key("meh"), None);
  }
}
