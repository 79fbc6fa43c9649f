use std::fmt::Write;

use anyhow::{Context, Result};

use crate::loader::LoadedConfig;

/// Human readable report for `showroomctl check`.
pub fn render(loaded: &LoadedConfig) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "source: {}", loaded.source)?;
    writeln!(out)?;
    out.push_str(
        &toml::to_string_pretty(&loaded.config)
            .context("failed to render effective configuration")?,
    );

    if loaded.warnings.is_empty() {
        writeln!(out, "\nno warnings")?;
    } else {
        writeln!(out, "\nwarnings:")?;
        for warning in &loaded.warnings.items {
            writeln!(out, "  - {}", warning.message)?;
            if let Some(hint) = &warning.hint {
                writeln!(out, "    hint: {hint}")?;
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::ConfigSource;
    use crate::models::ShowroomConfig;
    use crate::validation::ConfigWarnings;

    #[test]
    fn lists_source_values_and_warnings() {
        let mut warnings = ConfigWarnings::default();
        warnings.push_with_hint("too fast", "slow down");
        let loaded = LoadedConfig {
            config: ShowroomConfig::default(),
            source: ConfigSource::EnvInline,
            warnings,
        };

        let text = render(&loaded).expect("render");
        assert!(text.starts_with("source: $SHOWROOM_CONFIG_TOML"));
        assert!(text.contains("[gallery]"));
        assert!(text.contains("  - too fast"));
        assert!(text.contains("    hint: slow down"));
    }
}
