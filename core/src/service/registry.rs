//! The week registry: every week this tool has ever seen, in registration
//! order, with cached summaries once analyzed. Persistence is injected via
//! [`WeekStore`] so the registry itself stays a plain in-memory collection.

use anyhow::Result;

use crate::error::RegistryError;
use crate::model::summary::WeekSummary;
use crate::model::week::WeekEntry;
use crate::repository::WeekStore;

#[derive(Debug, Clone, Default)]
pub struct WeekRegistry {
    entries: Vec<WeekEntry>,
}

impl WeekRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry a store persisted earlier. A store that has never
    /// been written reads back as an empty registry, not an error.
    pub fn load_from(store: &impl WeekStore) -> Result<Self> {
        Ok(Self {
            entries: store.load()?,
        })
    }

    pub fn save_to(&self, store: &impl WeekStore) -> Result<()> {
        store.save(&self.entries)
    }

    /// Add a new week. Registering an identifier twice is an error; the
    /// deliberate replace-on-reanalysis path is [`WeekRegistry::update`].
    pub fn register(&mut self, entry: WeekEntry) -> Result<(), RegistryError> {
        if self.get(&entry.week_id).is_some() {
            return Err(RegistryError::DuplicateWeek(entry.week_id));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Replace an existing week's metadata in place, keeping its position in
    /// registration order. Any previously cached summary is stale for the
    /// new metadata and is dropped with it.
    pub fn update(&mut self, entry: WeekEntry) -> Result<(), RegistryError> {
        match self.entries.iter().position(|e| e.week_id == entry.week_id) {
            Some(pos) => {
                self.entries[pos] = entry;
                Ok(())
            }
            None => Err(RegistryError::UnknownWeek(entry.week_id)),
        }
    }

    /// Cache the computed summary on an already registered week.
    pub fn attach_summary(
        &mut self,
        week_id: &str,
        summary: WeekSummary,
    ) -> Result<(), RegistryError> {
        match self.entries.iter_mut().find(|e| e.week_id == week_id) {
            Some(entry) => {
                entry.summary = Some(summary);
                Ok(())
            }
            None => Err(RegistryError::UnknownWeek(week_id.to_string())),
        }
    }

    pub fn get(&self, week_id: &str) -> Option<&WeekEntry> {
        self.entries.iter().find(|e| e.week_id == week_id)
    }

    /// All entries in registration order, for listing and persistence.
    pub fn entries(&self) -> &[WeekEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::summary::WeekSummary;

    fn entry(week_id: &str) -> WeekEntry {
        WeekEntry::new(week_id, "31-Aug", "4-Sep", "attendance.xlsx", "")
    }

    fn summary(total: usize) -> WeekSummary {
        WeekSummary {
            total_students: total,
            full_week: total,
            partial: 0,
            never: 0,
            average_attendance: 100.0,
            groups: 1,
        }
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = WeekRegistry::new();
        registry.register(entry("week_31Aug-4Sep")).unwrap();

        let err = registry.register(entry("week_31Aug-4Sep")).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateWeek("week_31Aug-4Sep".to_string())
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_replaces_and_drops_stale_summary() {
        let mut registry = WeekRegistry::new();
        registry.register(entry("week_31Aug-4Sep")).unwrap();
        registry.register(entry("week_7Sep-11Sep")).unwrap();
        registry
            .attach_summary("week_31Aug-4Sep", summary(10))
            .unwrap();

        let mut replacement = entry("week_31Aug-4Sep");
        replacement.source_file = "attendance_v2.xlsx".to_string();
        registry.update(replacement).unwrap();

        let updated = registry.get("week_31Aug-4Sep").unwrap();
        assert_eq!(updated.source_file, "attendance_v2.xlsx");
        assert!(updated.summary.is_none());
        // Position in registration order is preserved.
        assert_eq!(registry.entries()[0].week_id, "week_31Aug-4Sep");
    }

    #[test]
    fn test_update_unknown_week_is_an_error() {
        let mut registry = WeekRegistry::new();
        let err = registry.update(entry("week_31Aug-4Sep")).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownWeek("week_31Aug-4Sep".to_string())
        );
    }

    #[test]
    fn test_attach_summary_requires_registration() {
        let mut registry = WeekRegistry::new();
        let err = registry
            .attach_summary("week_7Sep-11Sep", summary(5))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownWeek("week_7Sep-11Sep".to_string())
        );

        registry.register(entry("week_7Sep-11Sep")).unwrap();
        registry.attach_summary("week_7Sep-11Sep", summary(5)).unwrap();
        assert_eq!(
            registry
                .get("week_7Sep-11Sep")
                .unwrap()
                .summary
                .as_ref()
                .unwrap()
                .total_students,
            5
        );
    }

    #[test]
    fn test_entries_keep_registration_order() {
        let mut registry = WeekRegistry::new();
        registry.register(entry("week_31Aug-4Sep")).unwrap();
        registry.register(entry("week_7Sep-11Sep")).unwrap();
        registry.register(entry("week_14Sep-18Sep")).unwrap();

        let ids: Vec<&str> = registry.entries().iter().map(|e| e.week_id.as_str()).collect();
        assert_eq!(ids, vec!["week_31Aug-4Sep", "week_7Sep-11Sep", "week_14Sep-18Sep"]);
    }
}
