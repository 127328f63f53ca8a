//! JSON Schema compilation and validation for bundled schemas.
//!
//! Schemas ship inside the binary; callers compile one, confirm its
//! `schema_version` const matches what the Rust side expects, and validate
//! documents against it with every violation reported at once.

use anyhow::{Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

/// A compiled schema plus the version marker it pins.
pub(crate) struct LoadedSchema {
    pub compiled: JSONSchema,
    pub schema_version: String,
}

/// Parse and compile a schema, requiring `/properties/schema_version/const`
/// to equal `expected_version`.
pub(crate) fn load_json_schema(
    raw: &str,
    label: &str,
    expected_version: &str,
) -> Result<LoadedSchema> {
    let schema: Value =
        serde_json::from_str(raw).map_err(|err| anyhow!("parsing schema {label}: {err}"))?;

    let schema_version = extract_schema_version(&schema, "/properties/schema_version/const")
        .ok_or_else(|| anyhow!("schema {label} missing schema_version const"))?;
    if schema_version != expected_version {
        bail!(
            "schema {label} pins schema_version '{}', expected {}",
            schema_version,
            expected_version
        );
    }

    let compiled =
        JSONSchema::compile(&schema).map_err(|err| anyhow!("compiling schema {label}: {err}"))?;

    Ok(LoadedSchema {
        compiled,
        schema_version,
    })
}

/// Validate `instance`, joining every violation into one error.
pub(crate) fn validate(schema: &LoadedSchema, instance: &Value, what: &str) -> Result<()> {
    if let Err(errors) = schema.compiled.validate(instance) {
        let details = errors
            .map(|err| format!("{}: {}", err.instance_path, err))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("{what} failed schema validation:\n{details}");
    }
    Ok(())
}

fn extract_schema_version(schema: &Value, pointer: &str) -> Option<String> {
    let version = schema.pointer(pointer).and_then(Value::as_str)?;
    if version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}
