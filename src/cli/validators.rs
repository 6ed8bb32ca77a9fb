use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};

/// Path parser that, unlike clap's default for `PathBuf`, accepts an empty value.
pub fn any_path() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}

/// Parse an environment assignment `KEY=VALUE`. The value may be empty and may contain `=`.
pub fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got: {}", s))?;

    if key.is_empty() {
        return Err(format!("environment variable name cannot be empty: {}", s));
    }

    if key.contains('\0') || value.contains('\0') {
        return Err("environment entries cannot contain NUL bytes".to_string());
    }

    Ok((key.to_string(), value.to_string()))
}
