use std::collections::BTreeMap;

use payroll_core::models::OvertimeRateTable;

use crate::session::keys;
use crate::store::{SessionStore, StoreError};

/// Reads the custom overtime rate tables from the store, keyed by name.
/// A missing key means no custom tables have been loaded.
pub async fn load_rate_tables(
    store: &dyn SessionStore,
) -> Result<BTreeMap<String, OvertimeRateTable>, StoreError> {
    match store.get(keys::RATE_TABLES).await? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(BTreeMap::new()),
    }
}

/// Replaces the stored custom rate tables wholesale.
pub async fn save_rate_tables(
    store: &dyn SessionStore,
    tables: &BTreeMap<String, OvertimeRateTable>,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(tables)?;
    store.put(keys::RATE_TABLES, &raw).await
}
