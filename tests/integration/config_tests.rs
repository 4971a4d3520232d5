//! Configuration integration tests

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;
    use tenant_authz::{Config, Role, SessionIdentity, SessionMonitor, SessionState};

    const SAMPLE: &str = r#"
rbac:
  enabled: true
  default_role: farmer
domain_router:
  base_domain: "agri.example.com"
  reserved_subdomains: ["www", "status"]
session:
  inactivity_timeout_secs: 600
  warning_before_secs: 60
  max_lifetime_secs: 3600
  check_interval_secs: 10
"#;

    #[tokio::test]
    async fn test_file_config_drives_services() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        let rbac = tenant_authz::RbacService::new(&config.rbac);

        // No role in the session: the configured default applies
        let ctx = rbac
            .context_for_session(&SessionIdentity::new("u1"))
            .unwrap();
        assert_eq!(ctx.system_role(), Role::Farmer);

        let monitor = Arc::new(SessionMonitor::new(&config.session));
        assert_eq!(monitor.refresh(), SessionState::Active);
    }

    #[test]
    fn test_example_config_is_valid() {
        let content = include_str!("../../config/tenant-authz.yaml.example");
        let config = Config::from_yaml(content).unwrap();
        assert!(config.rbac.enabled);
    }

    #[test]
    fn test_oversized_session_lifetime_is_rejected() {
        let yaml = "session:\n  max_lifetime_secs: 18446744073709551615\n";
        let err = Config::from_yaml(yaml).unwrap_err().to_string();
        assert!(err.contains("Session config error"));
    }

    #[test]
    fn test_warning_window_must_fit_timeout() {
        let yaml = "session:\n  inactivity_timeout_secs: 60\n  warning_before_secs: 120\n";
        assert!(Config::from_yaml(yaml).is_err());
    }
}
