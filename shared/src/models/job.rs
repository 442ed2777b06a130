//! Brew Job Model (制作任务)

use serde::{Deserialize, Serialize};

/// One unit of preparation work, one per requested cup
///
/// Created together with its order. Everything after `received_at` is
/// written by the preparation workforce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Job {
    #[serde(rename = "jobID")]
    pub id: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "coffeeProduct")]
    pub product: String,
    /// Copied from the parent order
    #[serde(rename = "orderReceived")]
    pub received_at: i64,
    /// Machine the job was assigned to
    pub machine: Option<String>,
    #[serde(rename = "jobStarted")]
    pub started_at: Option<i64>,
    #[serde(rename = "jobReady")]
    pub ready_at: Option<i64>,
    #[serde(rename = "jobRetrieved")]
    pub retrieved_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_wire_format() {
        let job = Job {
            id: "j-1".to_string(),
            order_id: "o-1".to_string(),
            product: "latte".to_string(),
            received_at: 42,
            machine: None,
            started_at: None,
            ready_at: None,
            retrieved_at: None,
        };

        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["jobID"], "j-1");
        assert_eq!(json["orderId"], "o-1");
        assert_eq!(json["coffeeProduct"], "latte");
        assert_eq!(json["orderReceived"], 42);
        assert!(json["machine"].is_null());
        assert!(json["jobRetrieved"].is_null());
    }
}
