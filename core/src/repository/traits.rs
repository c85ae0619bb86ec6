use crate::model::week::WeekEntry;
use anyhow::Result;

/// Load/save capability for the week registry. The registry is read once at
/// process start and written once at the end of a run; separate invocations
/// are last-writer-wins, which is fine for a single-user batch tool.
pub trait WeekStore {
    fn load(&self) -> Result<Vec<WeekEntry>>;
    fn save(&self, entries: &[WeekEntry]) -> Result<()>;
}
