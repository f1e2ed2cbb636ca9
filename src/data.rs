use crate::models::{PromiseRecord, StatColor, StatRecord, Status};
use serde::{Deserialize, Serialize};

/// Records and statistics served for the whole lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub promises: Vec<PromiseRecord>,
    pub stats: Vec<StatRecord>,
}

impl Dataset {
    pub fn builtin() -> Self {
        Self {
            promises: vec![
                promise(
                    1,
                    "CM of Maharashtra",
                    "Create 2 million jobs in the tech sector by 2025",
                    "Employment",
                    Status::InProgress,
                    45,
                    ("Jan 2024", "Oct 2024"),
                    "1.2M jobs created via MAITRI scheme; 800K target remaining",
                    "Maharashtra",
                ),
                promise(
                    2,
                    "UP Government",
                    "Provide free tablets to 10 lakh students",
                    "Education",
                    Status::Fulfilled,
                    100,
                    ("Feb 2024", "Sep 2024"),
                    "11.2 lakh tablets distributed across 75 districts",
                    "Uttar Pradesh",
                ),
                promise(
                    3,
                    "Karnataka CM",
                    "Launch 500 new milk collection centers in rural areas",
                    "Agriculture",
                    Status::Delayed,
                    20,
                    ("Mar 2024", "Nov 2024"),
                    "Only 98 centers operational; budget allocation pending",
                    "Karnataka",
                ),
                promise(
                    4,
                    "Tamil Nadu Government",
                    "Establish universal free bus travel for women",
                    "Transport",
                    Status::Fulfilled,
                    100,
                    ("Jan 2024", "Aug 2024"),
                    "Scheme operational across all 38 districts since August",
                    "Tamil Nadu",
                ),
            ],
            stats: vec![
                stat("Promises Tracked", "1,247", "file-text", StatColor::Blue),
                stat("Fulfilled", "389", "check-circle", StatColor::Green),
                stat("In Progress", "624", "clock", StatColor::Yellow),
                stat("Active Users", "87K+", "users", StatColor::Purple),
            ],
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn promise(
    id: u32,
    politician: &str,
    text: &str,
    category: &str,
    status: Status,
    progress: u8,
    (date_promised, last_update): (&str, &str),
    evidence: &str,
    region: &str,
) -> PromiseRecord {
    PromiseRecord {
        id,
        politician: politician.to_string(),
        promise: text.to_string(),
        category: category.to_string(),
        status,
        progress,
        date_promised: date_promised.to_string(),
        last_update: last_update.to_string(),
        evidence: evidence.to_string(),
        region: region.to_string(),
    }
}

fn stat(label: &str, value: &str, icon: &str, color: StatColor) -> StatRecord {
    StatRecord {
        label: label.to_string(),
        value: value.to_string(),
        icon: icon.to_string(),
        color,
    }
}
