use crate::domain::PickerSession;
use anyhow::Result;

pub trait SessionRepository {
    fn load(&self) -> Result<Option<PickerSession>>;
    fn save(&self, session: &PickerSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}
