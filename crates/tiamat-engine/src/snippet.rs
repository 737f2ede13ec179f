//! Human-readable usage snippet.
//!
//! Renders a configuration as the builder-call source that would produce it,
//! omitting fields still at their defaults. Presentation convenience for the
//! playground; not part of the geometry contract.

use std::fmt::Write;

use crate::wave::{PathVariant, WaveLoaderConfig, WaveOverride};

/// Renders `config` as a copy-pasteable construction expression.
pub fn usage_snippet(config: &WaveLoaderConfig) -> String {
    let defaults = WaveLoaderConfig::default();
    let mut calls = Vec::new();

    if config.width != defaults.width || config.height != defaults.height {
        calls.push(format!(".size({:?}, {:?})", config.width, config.height));
    }
    if config.waves != defaults.waves {
        calls.push(format!(".waves({:?})", config.waves));
    }
    if config.color != defaults.color {
        calls.push(format!(".color({:?})", config.color));
    }
    if config.period_ms != defaults.period_ms {
        calls.push(format!(".period_ms({:?})", config.period_ms));
    }
    if config.opacity != defaults.opacity {
        calls.push(format!(".opacity({:?})", config.opacity));
    }
    if config.path_variant != defaults.path_variant {
        calls.push(format!(".path_variant({})", variant_expr(config.path_variant)));
    }
    if config.fade_out != defaults.fade_out {
        calls.push(format!(".fade_out({:?})", config.fade_out));
    }
    if !config.wave_overrides.is_empty() {
        calls.push(overrides_call(&config.wave_overrides));
    }

    if calls.is_empty() {
        return "WaveLoaderConfig::default()".to_string();
    }

    let mut out = String::from("WaveLoaderConfig::new()");
    for call in calls {
        for line in call.lines() {
            let _ = write!(out, "\n    {line}");
        }
    }
    out
}

fn variant_expr(variant: PathVariant) -> String {
    format!("PathVariant::{variant:?}")
}

fn overrides_call(overrides: &[WaveOverride]) -> String {
    let mut out = String::from(".wave_overrides([\n");
    for ov in overrides {
        let mut expr = String::from("    WaveOverride::default()");
        if let Some(color) = &ov.color {
            let _ = write!(expr, ".color({color:?})");
        }
        if let Some(period) = ov.period_ms {
            let _ = write!(expr, ".period_ms({period:?})");
        }
        if let Some(variant) = ov.path_variant {
            let _ = write!(expr, ".path_variant({})", variant_expr(variant));
        }
        out.push_str(&expr);
        out.push_str(",\n");
    }
    out.push_str("])");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_renders_as_default() {
        assert_eq!(
            usage_snippet(&WaveLoaderConfig::default()),
            "WaveLoaderConfig::default()"
        );
    }

    #[test]
    fn only_changed_fields_appear() {
        let config = WaveLoaderConfig::new().waves(5.0).color("#2B3A4A");
        let snippet = usage_snippet(&config);
        assert_eq!(
            snippet,
            "WaveLoaderConfig::new()\n    .waves(5.0)\n    .color(\"#2B3A4A\")"
        );
        assert!(!snippet.contains("period_ms"));
        assert!(!snippet.contains("opacity"));
    }

    #[test]
    fn overrides_render_one_per_line() {
        let config = WaveLoaderConfig::new().waves(2.0).wave_overrides([
            WaveOverride::default().color("#9EFF00"),
            WaveOverride::default()
                .period_ms(2300.0)
                .path_variant(PathVariant::Square),
        ]);
        let snippet = usage_snippet(&config);
        assert!(snippet.contains(".wave_overrides(["));
        assert!(snippet.contains("WaveOverride::default().color(\"#9EFF00\"),"));
        assert!(
            snippet.contains(
                "WaveOverride::default().period_ms(2300.0).path_variant(PathVariant::Square),"
            )
        );
        assert!(snippet.trim_end().ends_with("])"));
    }

    #[test]
    fn presets_render_as_builder_chains() {
        // The mahalo preset IS the default configuration; every other preset
        // should produce a multi-line builder chain.
        for (name, config) in crate::presets::all() {
            let snippet = usage_snippet(&config);
            if name == "mahalo" {
                assert_eq!(snippet, "WaveLoaderConfig::default()");
            } else {
                assert!(snippet.starts_with("WaveLoaderConfig::new()"), "{name}");
                assert!(snippet.lines().count() >= 2, "{name}");
            }
        }
    }
}
