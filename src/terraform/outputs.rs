use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use super::error::TerraformError;
use crate::compose::ServiceRunner;

// Output names the instance commands rely on.
const OUTPUT_INSTANCE_ZONE: &str = "instance_zone";
const OUTPUT_PROJECT_ID: &str = "project_id";
const OUTPUT_INSTANCE_NAME: &str = "instance_name";

/// One top-level entry of `terraform output -json`. Terraform normally wraps
/// each output in an object carrying the value plus metadata (`sensitive`,
/// `type`); bare values are accepted as-is.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OutputEntry {
    Wrapped { value: Value },
    Bare(Value),
}

impl OutputEntry {
    fn value(&self) -> &Value {
        match self {
            OutputEntry::Wrapped { value } => value,
            OutputEntry::Bare(value) => value,
        }
    }
}

/// Decoded set of terraform outputs.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct Outputs {
    entries: HashMap<String, OutputEntry>,
}

/// Instance coordinates resolved from the terraform outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceTarget {
    pub name: String,
    pub project: String,
    pub zone: String,
}

/// Fetch and decode the current terraform outputs through the compose
/// wrapper. Blocks until `terraform output -json` terminates.
pub async fn fetch_outputs<R: ServiceRunner>(runner: &R) -> Result<Outputs, TerraformError> {
    let args = ["output".to_string(), "-json".to_string()];
    let result = runner.run_captured("terraform", &args).await?;
    debug!(duration = ?result.duration, "terraform output finished");

    if !result.is_success() {
        return Err(TerraformError::CommandFailed {
            code: result.exit_code().unwrap_or(1),
        });
    }

    Ok(result.parse_json()?)
}

impl Outputs {
    /// Look up a single output value, unwrapping the `{ "value": ... }`
    /// shape when present. Absent, null, and empty values are all fatal.
    pub fn require(&self, key: &str) -> Result<String, TerraformError> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| TerraformError::MissingOutput(key.to_string()))?;

        let text = match entry.value() {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => return Err(TerraformError::MissingOutput(key.to_string())),
            Value::Array(_) | Value::Object(_) => {
                return Err(TerraformError::NonScalarOutput(key.to_string()))
            }
        };

        if text.is_empty() {
            return Err(TerraformError::EmptyOutput(key.to_string()));
        }

        Ok(text)
    }

    /// Resolve the three outputs every instance command needs. Fails on the
    /// first missing value; later keys are not checked.
    pub fn instance_target(&self) -> Result<InstanceTarget, TerraformError> {
        let zone = self.require(OUTPUT_INSTANCE_ZONE)?;
        let project = self.require(OUTPUT_PROJECT_ID)?;
        let name = self.require(OUTPUT_INSTANCE_NAME)?;
        Ok(InstanceTarget {
            name,
            project,
            zone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{CommandOutput, ComposeError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;
    use std::time::Duration;

    fn outputs(value: Value) -> Outputs {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_require_unwraps_wrapped_value() {
        let outputs = outputs(json!({
            "project_id": { "sensitive": false, "type": "string", "value": "my-proj" }
        }));
        assert_eq!(outputs.require("project_id").unwrap(), "my-proj");
    }

    #[test]
    fn test_require_returns_bare_value_unchanged() {
        let outputs = outputs(json!({ "project_id": "my-proj" }));
        assert_eq!(outputs.require("project_id").unwrap(), "my-proj");
    }

    #[test]
    fn test_require_renders_numeric_outputs() {
        let outputs = outputs(json!({ "disk_size": { "value": 50 } }));
        assert_eq!(outputs.require("disk_size").unwrap(), "50");
    }

    #[test]
    fn test_missing_output_names_key_and_hints_apply() {
        let outputs = outputs(json!({ "project_id": "my-proj" }));
        let err = outputs.require("instance_zone").unwrap_err();
        assert!(matches!(err, TerraformError::MissingOutput(_)));
        let message = err.to_string();
        assert!(message.contains("instance_zone"));
        assert!(message.contains("terraform apply"));
    }

    #[test]
    fn test_null_output_is_missing() {
        let outputs = outputs(json!({ "instance_name": { "value": null } }));
        let err = outputs.require("instance_name").unwrap_err();
        assert!(matches!(err, TerraformError::MissingOutput(_)));
    }

    #[test]
    fn test_empty_output_is_rejected() {
        let outputs = outputs(json!({ "instance_name": { "value": "" } }));
        let err = outputs.require("instance_name").unwrap_err();
        assert!(matches!(err, TerraformError::EmptyOutput(_)));
    }

    #[test]
    fn test_non_scalar_output_is_rejected() {
        let outputs = outputs(json!({ "instance_name": { "value": ["vm1"] } }));
        let err = outputs.require("instance_name").unwrap_err();
        assert!(matches!(err, TerraformError::NonScalarOutput(_)));
    }

    #[test]
    fn test_instance_target_resolves_mixed_shapes() {
        let outputs = outputs(json!({
            "instance_zone": { "sensitive": false, "type": "string", "value": "us-central1-a" },
            "project_id": { "value": "proj1" },
            "instance_name": "vm1"
        }));
        let target = outputs.instance_target().unwrap();
        assert_eq!(
            target,
            InstanceTarget {
                name: "vm1".to_string(),
                project: "proj1".to_string(),
                zone: "us-central1-a".to_string(),
            }
        );
    }

    #[test]
    fn test_instance_target_fails_on_first_missing_key() {
        let outputs = outputs(json!({ "project_id": "proj1", "instance_name": "vm1" }));
        let err = outputs.instance_target().unwrap_err();
        assert!(err.to_string().contains("instance_zone"));
    }

    /// Runner returning a canned capture result.
    struct StaticRunner {
        stdout: &'static str,
        raw_status: i32,
    }

    #[async_trait]
    impl ServiceRunner for StaticRunner {
        async fn run_captured(
            &self,
            _service: &str,
            _args: &[String],
        ) -> Result<CommandOutput, ComposeError> {
            Ok(CommandOutput {
                stdout: self.stdout.as_bytes().to_vec(),
                status: ExitStatus::from_raw(self.raw_status),
                duration: Duration::default(),
            })
        }

        async fn run_attached(
            &self,
            _service: &str,
            _args: &[String],
        ) -> Result<ExitStatus, ComposeError> {
            unreachable!("fetch never attaches")
        }
    }

    #[tokio::test]
    async fn test_fetch_outputs_decodes_document() {
        let runner = StaticRunner {
            stdout: r#"{"instance_zone":{"value":"us-central1-a"}}"#,
            raw_status: 0,
        };
        let outputs = fetch_outputs(&runner).await.unwrap();
        assert_eq!(outputs.require("instance_zone").unwrap(), "us-central1-a");
    }

    #[tokio::test]
    async fn test_fetch_outputs_forwards_exit_code() {
        let runner = StaticRunner {
            stdout: "",
            // raw wait status: exited with code 3
            raw_status: 3 << 8,
        };
        let err = fetch_outputs(&runner).await.unwrap_err();
        assert!(matches!(err, TerraformError::CommandFailed { code: 3 }));
    }

    #[tokio::test]
    async fn test_fetch_outputs_signal_death_defaults_to_one() {
        let runner = StaticRunner {
            stdout: "",
            // raw wait status: killed by SIGKILL, no exit code
            raw_status: 9,
        };
        let err = fetch_outputs(&runner).await.unwrap_err();
        assert!(matches!(err, TerraformError::CommandFailed { code: 1 }));
    }

    #[tokio::test]
    async fn test_fetch_outputs_rejects_malformed_json() {
        let runner = StaticRunner {
            stdout: "terraform exploded",
            raw_status: 0,
        };
        let err = fetch_outputs(&runner).await.unwrap_err();
        assert!(matches!(err, TerraformError::ParseError(_)));
    }
}
