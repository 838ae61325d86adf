use crate::config::LeavePolicy;
use crate::leave::Validation;
use crate::model::{LeaveBalance, LeaveRequestDraft, LeaveType, Notification};
use crate::notification::{list_from_payload, NotificationFeed, NotificationState};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Brouillon de demande au format JSON (clés camelCase).
pub fn load_draft_json<P: AsRef<Path>>(path: P) -> anyhow::Result<LeaveRequestDraft> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let draft = serde_json::from_slice(&data)
        .with_context(|| format!("parsing leave draft {}", path.display()))?;
    Ok(draft)
}

/// Politique partielle au format JSON ; les champs absents gardent leur défaut.
pub fn load_policy_json<P: AsRef<Path>>(path: P) -> anyhow::Result<LeavePolicy> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let policy = serde_json::from_slice(&data)
        .with_context(|| format!("parsing policy {}", path.display()))?;
    Ok(policy)
}

/// Import des soldes depuis CSV: header `leave_type,days`
pub fn import_balance_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<LeaveBalance> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut balance = LeaveBalance::new();
    for rec in rdr.records() {
        let rec = rec?;
        let raw_type = rec.get(0).context("missing leave_type")?.trim();
        let raw_days = rec.get(1).context("missing days")?.trim();
        let leave_type: LeaveType = raw_type.parse()?;
        let days: f64 = raw_days
            .parse()
            .with_context(|| format!("invalid days value for {leave_type}"))?;
        if !days.is_finite() || days < 0.0 {
            bail!("balance for {leave_type} must be a non-negative number");
        }
        balance.set(leave_type, days);
    }
    Ok(balance)
}

/// Notifications au format JSON ; tout ce qui n'est pas un tableau donne une liste vide.
pub fn load_notifications_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Notification>> {
    let payload = read_json_value(path.as_ref())?;
    Ok(list_from_payload(&payload))
}

fn read_json_value(path: &Path) -> anyhow::Result<Value> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let value = serde_json::from_slice(&data)
        .with_context(|| format!("parsing JSON {}", path.display()))?;
    Ok(value)
}

/// Export CSV des erreurs de validation: header `field,message`
pub fn export_validation_csv<P: AsRef<Path>>(path: P, validation: &Validation) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["field", "message"])?;
    for (field, message) in &validation.errors {
        w.write_record([field.as_str(), message.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON de l'état des notifications (jolie mise en forme)
pub fn export_notifications_json<P: AsRef<Path>>(
    path: P,
    state: &NotificationState,
) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(state)?;
    fs::write(path, s)?;
    Ok(())
}

/// Source de notifications lue depuis un fichier JSON.
#[derive(Debug, Clone)]
pub struct JsonFileFeed {
    path: PathBuf,
}

impl JsonFileFeed {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NotificationFeed for JsonFileFeed {
    fn fetch(&self) -> anyhow::Result<Value> {
        read_json_value(&self.path)
    }
}
