use chrono::Utc;
use inkwell_shared::{
  DiaryDraft,
  DiaryEntry
};
use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;
use web_sys::Storage;

use crate::app::ThemeMode;

const DIARY_STORAGE_KEY: &str =
  "inkwell.diary.entries.v1";
const SESSION_STORAGE_KEY: &str =
  "inkwell.session.v1";
const THEME_STORAGE_KEY: &str =
  "inkwell.theme";

#[derive(Serialize, Deserialize)]
struct StoredSession {
  name:         String,
  signed_in_at: String
}

fn local_storage() -> Option<Storage> {
  web_sys::window().and_then(|window| {
    window
      .local_storage()
      .ok()
      .flatten()
  })
}

fn read_item(key: &str) -> Option<String> {
  local_storage().and_then(|storage| {
    storage
      .get_item(key)
      .ok()
      .flatten()
  })
}

fn write_item(
  key: &str,
  value: &str
) -> Result<(), String> {
  let storage = local_storage()
    .ok_or_else(|| {
      "local storage is unavailable"
        .to_string()
    })?;
  storage.set_item(key, value).map_err(
    |error| {
      format!(
        "failed writing {key}: \
         {error:?}"
      )
    }
  )
}

pub fn load_theme_mode() -> ThemeMode {
  match read_item(THEME_STORAGE_KEY)
    .as_deref()
  {
    | Some("night") => ThemeMode::Night,
    | _ => ThemeMode::Day
  }
}

pub fn save_theme_mode(theme: ThemeMode) {
  if let Err(error) = write_item(
    THEME_STORAGE_KEY,
    theme.storage_value()
  ) {
    tracing::warn!(%error, "failed saving theme");
  }
}

pub fn load_session() -> Option<String> {
  let raw = read_item(SESSION_STORAGE_KEY)?;
  match serde_json::from_str::<
    StoredSession
  >(&raw)
  {
    | Ok(session)
      if !session.name.trim().is_empty() =>
    {
      Some(session.name)
    }
    | Ok(_) => None,
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing session from \
         local storage"
      );
      None
    }
  }
}

pub fn save_session(
  name: &str
) -> Result<(), String> {
  let session = StoredSession {
    name:         name.trim().to_string(),
    signed_in_at: Utc::now().to_rfc3339()
  };
  let raw = serde_json::to_string(&session)
    .map_err(|error| {
      format!(
        "failed encoding session: {error}"
      )
    })?;
  write_item(SESSION_STORAGE_KEY, &raw)
}

pub fn clear_session() {
  if let Some(storage) = local_storage() {
    let _ = storage
      .remove_item(SESSION_STORAGE_KEY);
  }
}

/// Entries newest first.
pub fn load_entries() -> Vec<DiaryEntry> {
  read_item(DIARY_STORAGE_KEY)
    .map(|raw| decode_entries(&raw))
    .unwrap_or_default()
}

pub fn find_entry(
  id: Uuid
) -> Option<DiaryEntry> {
  load_entries()
    .into_iter()
    .find(|entry| entry.id == id)
}

pub fn create_entry(
  draft: &DiaryDraft
) -> Result<DiaryEntry, String> {
  let mut entries = load_entries();
  let entry =
    DiaryEntry::from_draft(draft, Utc::now());
  entries.insert(0, entry.clone());
  save_entries(&entries)?;
  tracing::info!(id = %entry.id, "created diary entry");
  Ok(entry)
}

pub fn update_entry(
  id: Uuid,
  draft: &DiaryDraft
) -> Result<DiaryEntry, String> {
  let mut entries = load_entries();
  let updated = apply_update(
    &mut entries,
    id,
    draft
  )?;
  save_entries(&entries)?;
  tracing::info!(%id, "updated diary entry");
  Ok(updated)
}

pub fn delete_entry(
  id: Uuid
) -> Result<(), String> {
  let mut entries = load_entries();
  remove_entry(&mut entries, id)?;
  save_entries(&entries)?;
  tracing::info!(%id, "deleted diary entry");
  Ok(())
}

fn save_entries(
  entries: &[DiaryEntry]
) -> Result<(), String> {
  let raw = serde_json::to_string(entries)
    .map_err(|error| {
      format!(
        "failed encoding diary: {error}"
      )
    })?;
  write_item(DIARY_STORAGE_KEY, &raw)
}

fn decode_entries(
  raw: &str
) -> Vec<DiaryEntry> {
  match serde_json::from_str::<
    Vec<DiaryEntry>
  >(raw)
  {
    | Ok(mut entries) => {
      sort_newest_first(&mut entries);
      entries
    }
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing diary entries \
         from local storage"
      );
      Vec::new()
    }
  }
}

fn sort_newest_first(
  entries: &mut [DiaryEntry]
) {
  entries.sort_by(|a, b| {
    b.created_at.cmp(&a.created_at)
  });
}

fn apply_update(
  entries: &mut [DiaryEntry],
  id: Uuid,
  draft: &DiaryDraft
) -> Result<DiaryEntry, String> {
  let entry = entries
    .iter_mut()
    .find(|entry| entry.id == id)
    .ok_or_else(|| {
      "This entry no longer exists."
        .to_string()
    })?;
  entry.apply_draft(draft, Utc::now());
  Ok(entry.clone())
}

fn remove_entry(
  entries: &mut Vec<DiaryEntry>,
  id: Uuid
) -> Result<(), String> {
  let before = entries.len();
  entries.retain(|entry| entry.id != id);
  if entries.len() == before {
    return Err(
      "This entry was already deleted."
        .to_string()
    );
  }
  Ok(())
}

#[cfg(test)]
mod storage_tests {
  use chrono::TimeZone;
  use inkwell_shared::Mood;

  use super::*;

  fn entry_at(
    title: &str,
    day: u32
  ) -> DiaryEntry {
    let at = Utc
      .with_ymd_and_hms(2026, 5, day, 8, 0, 0)
      .single()
      .expect("valid timestamp");
    DiaryEntry::from_draft(
      &DiaryDraft {
        title: title.to_string(),
        body:  "body".to_string(),
        mood:  Mood::Calm
      },
      at
    )
  }

  #[test]
  fn decode_sorts_newest_first() {
    let entries = vec![
      entry_at("older", 1),
      entry_at("newer", 3),
      entry_at("middle", 2),
    ];
    let raw = serde_json::to_string(&entries)
      .expect("encode entries");

    let titles: Vec<_> = decode_entries(&raw)
      .into_iter()
      .map(|entry| entry.title)
      .collect();

    assert_eq!(
      titles,
      vec!["newer", "middle", "older"]
    );
  }

  #[test]
  fn corrupted_storage_yields_empty_list() {
    assert!(
      decode_entries("{not json").is_empty()
    );
  }

  #[test]
  fn update_touches_only_the_target() {
    let mut entries = vec![
      entry_at("keep", 1),
      entry_at("edit", 2),
    ];
    let target = entries[1].id;
    let created = entries[1].created_at;
    let untouched = entries[0].clone();

    let updated = apply_update(
      &mut entries,
      target,
      &DiaryDraft {
        title: "edited".to_string(),
        body:  "new body".to_string(),
        mood:  Mood::Happy
      }
    )
    .expect("entry exists");

    assert_eq!(updated.title, "edited");
    assert_eq!(updated.created_at, created);
    assert_eq!(updated.mood, Mood::Happy);
    assert_eq!(entries[0], untouched);
  }

  #[test]
  fn update_and_remove_report_missing_entries()
  {
    let mut entries = vec![entry_at("a", 1)];
    let missing = Uuid::new_v4();

    assert!(
      apply_update(
        &mut entries,
        missing,
        &DiaryDraft::default()
      )
      .is_err()
    );
    assert!(
      remove_entry(&mut entries, missing)
        .is_err()
    );
    let id = entries[0].id;
    assert!(
      remove_entry(&mut entries, id).is_ok()
    );
    assert!(entries.is_empty());
  }
}
