use payroll_core::diagnostics::Diagnostics;
use payroll_core::models::{Parameters, Schedule};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::{SessionStore, StoreError};

/// Store keys for the session state. One key per piece of state, each
/// holding the JSON serialization of the in-memory structure.
pub mod keys {
    pub const PARAMETERS: &str = "salaryParameters";
    pub const WEEKS: &str = "salaryWeeks";
    pub const ACTIVE_WEEK: &str = "activeWeek";
    pub const SHOW_SETTINGS: &str = "showSettings";
    pub const DARK_MODE: &str = "darkMode";
    pub const RATE_TABLES: &str = "overtimeRateTables";
}

/// The whole persisted application session: pay parameters, the four-week
/// schedule and the presentational toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub parameters: Parameters,
    pub schedule: Schedule,
    pub active_week: usize,
    pub show_settings: bool,
    pub dark_mode: bool,
}

impl Session {
    fn initial() -> Self {
        Self {
            show_settings: true,
            ..Default::default()
        }
    }

    /// Loads the session from the store. A missing key falls back to its
    /// default and the default is written back; a malformed or unreadable
    /// value is reported through `diagnostics` and replaced. Loading never
    /// fails.
    pub async fn load(
        store: &dyn SessionStore,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let initial = Self::initial();

        Self {
            parameters: load_key(store, diagnostics, keys::PARAMETERS, initial.parameters).await,
            schedule: load_key(store, diagnostics, keys::WEEKS, initial.schedule).await,
            active_week: load_key(store, diagnostics, keys::ACTIVE_WEEK, initial.active_week).await,
            show_settings: load_key(
                store,
                diagnostics,
                keys::SHOW_SETTINGS,
                initial.show_settings,
            )
            .await,
            dark_mode: load_key(store, diagnostics, keys::DARK_MODE, initial.dark_mode).await,
        }
    }

    /// Writes every key back to the store, synchronously with the mutation
    /// that triggered it.
    pub async fn save(
        &self,
        store: &dyn SessionStore,
    ) -> Result<(), StoreError> {
        put_json(store, keys::PARAMETERS, &self.parameters).await?;
        put_json(store, keys::WEEKS, &self.schedule).await?;
        put_json(store, keys::ACTIVE_WEEK, &self.active_week).await?;
        put_json(store, keys::SHOW_SETTINGS, &self.show_settings).await?;
        put_json(store, keys::DARK_MODE, &self.dark_mode).await?;
        Ok(())
    }
}

async fn put_json<T: Serialize>(
    store: &dyn SessionStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.put(key, &raw).await
}

async fn load_key<T>(
    store: &dyn SessionStore,
    diagnostics: &mut Diagnostics,
    key: &str,
    default: T,
) -> T
where
    T: Serialize + DeserializeOwned,
{
    match store.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(error) => {
                diagnostics.warning_with(
                    format!("discarding malformed value for '{key}'"),
                    serde_json::json!({ "key": key, "error": error.to_string() }),
                );
                write_default(store, diagnostics, key, &default).await;
                default
            }
        },
        Ok(None) => {
            write_default(store, diagnostics, key, &default).await;
            default
        }
        Err(error) => {
            diagnostics.error_with(
                format!("failed to read '{key}' from store"),
                serde_json::json!({ "key": key, "error": error.to_string() }),
            );
            default
        }
    }
}

async fn write_default<T: Serialize>(
    store: &dyn SessionStore,
    diagnostics: &mut Diagnostics,
    key: &str,
    default: &T,
) {
    if let Err(error) = put_json(store, key, default).await {
        diagnostics.warning_with(
            format!("failed to write default for '{key}'"),
            serde_json::json!({ "key": key, "error": error.to_string() }),
        );
    }
}

#[cfg(test)]
mod tests {
    use payroll_core::models::{DayEntry, MealBonus, OvertimeInput};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::memory::MemoryStore;

    fn populated_session() -> Session {
        let mut session = Session::initial();
        session.parameters.base_hourly_rate = "10.5".to_string();
        session.parameters.on_call_holiday = "25".to_string();
        session.schedule.weeks[1][4] = DayEntry {
            present: true,
            meal: MealBonus::OffSite,
            overtime_night: OvertimeInput {
                hours: "2".to_string(),
                minutes: "15".to_string(),
            },
            ..Default::default()
        };
        session.active_week = 1;
        session.dark_mode = true;
        session
    }

    #[tokio::test]
    async fn save_then_load_round_trips_field_for_field() {
        let store = MemoryStore::new();
        let mut diagnostics = Diagnostics::new(false);
        let session = populated_session();

        session.save(&store).await.unwrap();
        let loaded = Session::load(&store, &mut diagnostics).await;

        assert_eq!(loaded, session);
        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn load_from_empty_store_yields_defaults_and_writes_them() {
        let store = MemoryStore::new();
        let mut diagnostics = Diagnostics::new(false);

        let session = Session::load(&store, &mut diagnostics).await;

        assert_eq!(session, Session::initial());
        assert!(session.show_settings);
        // The defaults were written back under every key.
        for key in [
            keys::PARAMETERS,
            keys::WEEKS,
            keys::ACTIVE_WEEK,
            keys::SHOW_SETTINGS,
            keys::DARK_MODE,
        ] {
            assert!(store.get(key).await.unwrap().is_some(), "missing {key}");
        }
    }

    #[tokio::test]
    async fn malformed_value_is_replaced_and_reported() {
        let store = MemoryStore::new();
        store.put(keys::WEEKS, "{ not json").await.unwrap();
        let mut diagnostics = Diagnostics::new(false);

        let session = Session::load(&store, &mut diagnostics).await;

        assert_eq!(session.schedule, Schedule::default());
        assert_eq!(diagnostics.len(), 1);
        // The report names the offending key in its structured context.
        let entry = diagnostics.entries().next().unwrap();
        let context = entry.context.as_ref().unwrap();
        assert_eq!(context["key"], keys::WEEKS);
        // The broken value was overwritten with the default.
        let raw = store.get(keys::WEEKS).await.unwrap().unwrap();
        assert!(serde_json::from_str::<Schedule>(&raw).is_ok());
    }

    #[tokio::test]
    async fn malformed_value_in_one_key_does_not_affect_others() {
        let store = MemoryStore::new();
        let session = populated_session();
        session.save(&store).await.unwrap();
        store.put(keys::ACTIVE_WEEK, "\"not a number\"").await.unwrap();
        let mut diagnostics = Diagnostics::new(false);

        let loaded = Session::load(&store, &mut diagnostics).await;

        assert_eq!(loaded.active_week, 0);
        assert_eq!(loaded.parameters, session.parameters);
        assert_eq!(loaded.schedule, session.schedule);
    }
}
