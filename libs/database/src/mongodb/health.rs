use mongodb::Client;

use super::connector::ping;

/// Lightweight reachability check, suitable for readiness probes.
pub async fn check_health(client: &Client) -> bool {
    ping(client).await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mongodb::{MongoConfig, client_from_config};

    #[tokio::test]
    async fn test_check_health_false_when_unreachable() {
        // Keep the probe fast: nobody is listening on port 1.
        let mut config = MongoConfig::new("mongodb://127.0.0.1:1").with_app_name("health-test");
        config.server_selection_timeout_secs = 1;

        let client = client_from_config(&config).await.unwrap();
        assert!(!check_health(&client).await);
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health() {
        let uri = std::env::var("MONGO_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let client = client_from_config(&MongoConfig::new(uri)).await.unwrap();
        assert!(check_health(&client).await);
    }
}
