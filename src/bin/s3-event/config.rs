use anyhow::{anyhow, bail, Result};
use std::env;
use tracing::Level;

pub struct Config {
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_log_level(env::var("LOG_LEVEL").ok().as_deref())
    }

    pub fn from_log_level(value: Option<&str>) -> Result<Self> {
        Ok(Self {
            log_level: parse_log_level(value)?,
        })
    }
}

// Events are logged at info, so anything quieter than that is refused.
fn parse_log_level(value: Option<&str>) -> Result<Level> {
    let v = match value.map(str::trim) {
        None | Some("") => return Ok(Level::INFO),
        Some(v) => v,
    };

    let level: Level = v
        .parse()
        .map_err(|e| anyhow!("invalid LOG_LEVEL {:?}: {}", v, e))?;

    if level < Level::INFO {
        bail!("invalid LOG_LEVEL {:?}: must be info or more verbose", v);
    }

    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_log_level_default() {
        assert_eq!(parse_log_level(None).unwrap(), Level::INFO);
        assert_eq!(parse_log_level(Some("")).unwrap(), Level::INFO);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(Some("debug")).unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level(Some("TRACE")).unwrap(), Level::TRACE);
        assert_eq!(parse_log_level(Some(" Info ")).unwrap(), Level::INFO);
    }

    #[test]
    fn test_parse_log_level_too_quiet() {
        for v in ["warn", "ERROR", " error "] {
            let err = parse_log_level(Some(v)).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("invalid LOG_LEVEL {:?}: must be info or more verbose", v.trim()),
            );
        }
    }

    #[test]
    fn test_parse_log_level_invalid() {
        let err = parse_log_level(Some("loud")).unwrap_err();
        assert!(err.to_string().starts_with(r#"invalid LOG_LEVEL "loud""#), "{}", err);
    }
}
