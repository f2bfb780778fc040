// The monitored resource a dashboard is generated for

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTarget {
    pub region: String,
    pub namespace: String,
    pub resource_name: String,
}

impl ResourceTarget {
    pub fn new(region: String, namespace: String, resource_name: String) -> Self {
        Self {
            region,
            namespace,
            resource_name,
        }
    }

    /// `{namespace without "AWS/"}_{region}_{resource without "/"}_{timestamp}`
    pub fn dashboard_name(&self, unix_timestamp: i64) -> String {
        format!(
            "{}_{}_{}_{}",
            self.short_namespace(),
            self.region,
            self.resource_name.replace('/', ""),
            unix_timestamp
        )
    }

    /// Namespace with the `AWS/` prefix removed, e.g. `Kafka` for `AWS/Kafka`.
    pub fn short_namespace(&self) -> String {
        self.namespace.replace("AWS/", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_name() {
        let target = ResourceTarget::new(
            "us-east-1".to_string(),
            "AWS/Kafka".to_string(),
            "cluster-01".to_string(),
        );
        assert_eq!(target.dashboard_name(1700000000), "Kafka_us-east-1_cluster-01_1700000000");
    }

    #[test]
    fn test_dashboard_name_strips_slashes() {
        let target = ResourceTarget::new(
            "ap-east-1".to_string(),
            "AWS/ApplicationELB".to_string(),
            "app/my-alb/50dc6c495c0c9188".to_string(),
        );
        assert_eq!(
            target.dashboard_name(42),
            "ApplicationELB_ap-east-1_appmy-alb50dc6c495c0c9188_42"
        );
    }

    #[test]
    fn test_custom_namespace_is_kept() {
        let target = ResourceTarget::new("eu-west-1".into(), "Custom/App".into(), "svc".into());
        assert_eq!(target.short_namespace(), "Custom/App");
    }
}
