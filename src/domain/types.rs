// ==========================================
// LPA Audit System - Domain type definitions
// ==========================================
// Wire format: lowercase snake strings, matching the persisted
// collections (status = "pending" / "completed" / "missed" etc.)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// Schedule entry status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Pending,   // generated, audit not yet performed
    Completed, // an audit record was filed against the entry
    Missed,    // audit window passed without a record
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "pending",
            ScheduleStatus::Completed => "completed",
            ScheduleStatus::Missed => "missed",
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScheduleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ScheduleStatus::Pending),
            "completed" => Ok(ScheduleStatus::Completed),
            "missed" => Ok(ScheduleStatus::Missed),
            other => Err(format!("unknown schedule status: {}", other)),
        }
    }
}

// ==========================================
// Checklist item type
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    OkNok,  // conformity check
    Text,   // free text
    Number, // numeric reading
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::OkNok => "ok_nok",
            ItemType::Text => "text",
            ItemType::Number => "number",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok_nok" => Ok(ItemType::OkNok),
            "text" => Ok(ItemType::Text),
            "number" => Ok(ItemType::Number),
            other => Err(format!("unknown checklist item type: {}", other)),
        }
    }
}

// ==========================================
// Conformity of a single answer
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conformity {
    Ok,
    Nok,
    Na,
}

impl Conformity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conformity::Ok => "ok",
            Conformity::Nok => "nok",
            Conformity::Na => "na",
        }
    }
}

impl fmt::Display for Conformity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Conformity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Conformity::Ok),
            "nok" => Ok(Conformity::Nok),
            "na" => Ok(Conformity::Na),
            other => Err(format!("unknown conformity: {}", other)),
        }
    }
}

// ==========================================
// Overall result of an audit record
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditResult {
    Conforme,
    NaoConforme,
    Parcial,
}

impl AuditResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditResult::Conforme => "conforme",
            AuditResult::NaoConforme => "nao_conforme",
            AuditResult::Parcial => "parcial",
        }
    }
}

impl fmt::Display for AuditResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conforme" => Ok(AuditResult::Conforme),
            "nao_conforme" => Ok(AuditResult::NaoConforme),
            "parcial" => Ok(AuditResult::Parcial),
            other => Err(format!("unknown audit result: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ScheduleStatus::Pending,
            ScheduleStatus::Completed,
            ScheduleStatus::Missed,
        ] {
            assert_eq!(status.as_str().parse::<ScheduleStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_serde_wire_format() {
        let json = serde_json::to_string(&ScheduleStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let json = serde_json::to_string(&AuditResult::NaoConforme).unwrap();
        assert_eq!(json, "\"nao_conforme\"");
        let json = serde_json::to_string(&ItemType::OkNok).unwrap();
        assert_eq!(json, "\"ok_nok\"");
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!("done".parse::<ScheduleStatus>().is_err());
        assert!("maybe".parse::<Conformity>().is_err());
    }
}
