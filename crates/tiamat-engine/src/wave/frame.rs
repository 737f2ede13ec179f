//! Frame orchestration.
//!
//! `WaveLoader` owns one persistent path buffer per slot plus the memoized
//! derived state (layouts, resolved configs, paint styles). Each tick
//! rewrites the active buffers in place; derived state is recomputed only
//! when its declared inputs change by value.

use crate::paint::{LinearGradient, Rgba8, fade_mask, gradient_end_color};
use crate::path::WavePath;
use crate::time::AnimationPhase;

use super::builder::WavePathBuilder;
use super::config::{
    DEFAULT_OPACITY, MAX_WAVES, WaveLoaderConfig, WaveResolvedConfig, build_wave_configs,
    clamp_unit, resolve_fade_out, resolve_opacity,
};
use super::layout::{WaveLayout, build_layouts, layout_at};

/// Per-slot render output for one frame: the rewritten outline plus its
/// paint parameters.
#[derive(Debug, Copy, Clone)]
pub struct WaveRender<'a> {
    pub path: &'a WavePath,
    /// Final translucency, already globally scaled and clamped to [0, 1].
    pub opacity: f32,
    /// Vertical fill: solid base color at stop 0, derived transparent color
    /// at the layout's gradient stop.
    pub gradient: &'a LinearGradient,
    /// Fraction of canvas height where the fill becomes fully transparent.
    pub gradient_stop: f32,
}

/// Precomputed paint parameters for one slot; changes only with config.
#[derive(Debug, Clone, PartialEq)]
struct WaveStyle {
    opacity: f32,
    gradient: LinearGradient,
    gradient_stop: f32,
}

/// The wave-loader engine instance.
///
/// Single-threaded and frame-driven: `advance` runs synchronously on the
/// render callback, touching at most 5 waves × 7 crest points, and owns
/// every buffer it writes.
#[derive(Debug)]
pub struct WaveLoader {
    config: WaveLoaderConfig,

    layouts: Vec<WaveLayout>,
    configs: Vec<WaveResolvedConfig>,
    styles: Vec<WaveStyle>,
    fade: LinearGradient,

    builder: WavePathBuilder,
    paths: Vec<WavePath>,

    layout_rebuilds: u64,
    config_rebuilds: u64,
}

impl WaveLoader {
    pub fn new(config: WaveLoaderConfig) -> Self {
        let layouts = build_layouts(config.wave_count());
        let configs = build_wave_configs(&config);
        let styles = build_styles(&config, &layouts, &configs);
        let fade = build_fade(&config);

        Self {
            config,
            layouts,
            configs,
            styles,
            fade,
            builder: WavePathBuilder::new(),
            paths: (0..MAX_WAVES).map(|_| WavePath::new()).collect(),
            layout_rebuilds: 0,
            config_rebuilds: 0,
        }
    }

    pub fn config(&self) -> &WaveLoaderConfig {
        &self.config
    }

    /// Active slot count after clamping.
    pub fn wave_count(&self) -> usize {
        self.layouts.len()
    }

    /// Replaces the configuration, recomputing only the derived state whose
    /// inputs actually changed. Path buffers are kept; slot buffers beyond
    /// the new wave count simply stop being rewritten.
    pub fn set_config(&mut self, next: WaveLoaderConfig) {
        if next == self.config {
            return;
        }

        let layouts_dirty = next.wave_count() != self.config.wave_count();
        let configs_dirty = layouts_dirty
            || next.color != self.config.color
            || next.period_ms != self.config.period_ms
            || next.path_variant != self.config.path_variant
            || next.wave_overrides != self.config.wave_overrides;
        let fade_dirty = next.width != self.config.width
            || next.height != self.config.height
            || next.fade_out != self.config.fade_out;
        let styles_dirty =
            configs_dirty || next.height != self.config.height || next.opacity != self.config.opacity;

        self.config = next;

        if layouts_dirty {
            self.layouts = build_layouts(self.config.wave_count());
            self.layout_rebuilds += 1;
        }
        if configs_dirty {
            self.configs = build_wave_configs(&self.config);
            self.config_rebuilds += 1;
        }
        if styles_dirty {
            self.styles = build_styles(&self.config, &self.layouts, &self.configs);
        }
        if fade_dirty {
            self.fade = build_fade(&self.config);
        }
    }

    /// Rebuilds every active slot's outline for the given clock sample.
    ///
    /// Pure arithmetic plus in-place buffer mutation; no allocation once the
    /// buffers are warm.
    pub fn advance(&mut self, clock_ms: f64) {
        let width = self.config.width;
        let height = self.config.height;

        for index in 0..self.wave_count() {
            let layout = layout_at(&self.layouts, index);
            let resolved = &self.configs[index.min(self.configs.len() - 1)];
            let phase = AnimationPhase::at(clock_ms, resolved.period_ms);

            self.builder.build(
                resolved.path_variant,
                &mut self.paths[index],
                width,
                height,
                height as f64 * layout.base_y_ratio,
                height as f64 * layout.amplitude_ratio,
                &phase,
                layout.phase_offset_rad,
            );
        }
    }

    /// Render output for one active slot. Call after [`advance`](Self::advance).
    pub fn wave(&self, index: usize) -> WaveRender<'_> {
        let style = &self.styles[index.min(self.styles.len() - 1)];
        WaveRender {
            path: &self.paths[index.min(self.paths.len() - 1)],
            opacity: style.opacity,
            gradient: &style.gradient,
            gradient_stop: style.gradient_stop,
        }
    }

    /// Iterates the active slots in stacking order.
    pub fn waves(&self) -> impl Iterator<Item = WaveRender<'_>> {
        (0..self.wave_count()).map(|i| self.wave(i))
    }

    /// The global horizontal edge-fade mask (destination-in).
    pub fn fade_mask(&self) -> &LinearGradient {
        &self.fade
    }

    /// Resolved per-slot configs, mostly for inspection and tests.
    pub fn resolved_configs(&self) -> &[WaveResolvedConfig] {
        &self.configs
    }

    pub fn layouts(&self) -> &[WaveLayout] {
        &self.layouts
    }

    #[cfg(test)]
    fn rebuild_counters(&self) -> (u64, u64) {
        (self.layout_rebuilds, self.config_rebuilds)
    }
}

impl Default for WaveLoader {
    fn default() -> Self {
        Self::new(WaveLoaderConfig::default())
    }
}

fn build_styles(
    config: &WaveLoaderConfig,
    layouts: &[WaveLayout],
    configs: &[WaveResolvedConfig],
) -> Vec<WaveStyle> {
    // Global opacity scales every slot proportionally against the default.
    let opacity_scale = resolve_opacity(config.opacity) / DEFAULT_OPACITY;

    layouts
        .iter()
        .zip(configs)
        .map(|(layout, resolved)| {
            let base = Rgba8::from_hex_lossy(&resolved.color);
            let end = gradient_end_color(&resolved.color);
            let stop = layout.gradient_stop as f32;
            WaveStyle {
                opacity: clamp_unit(layout.opacity * opacity_scale) as f32,
                gradient: LinearGradient::wave_fill(config.height, base, end, stop),
                gradient_stop: stop,
            }
        })
        .collect()
}

fn build_fade(config: &WaveLoaderConfig) -> LinearGradient {
    fade_mask(
        config.width,
        config.height,
        resolve_fade_out(config.fade_out) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathVerb;
    use crate::wave::config::WaveOverride;
    use crate::wave::variant::PathVariant;

    // ── end-to-end scenario ───────────────────────────────────────────────

    #[test]
    fn default_three_wave_scene_at_clock_zero() {
        let mut loader = WaveLoader::new(
            WaveLoaderConfig::new()
                .size(240.0, 80.0)
                .waves(3.0)
                .color("#012D53")
                .period_ms(4000.0)
                .path_variant(PathVariant::Rounded),
        );
        loader.advance(0.0);

        assert_eq!(loader.wave_count(), 3);

        let ratios: Vec<f64> = loader.layouts().iter().map(|l| l.base_y_ratio).collect();
        assert!((ratios[0] - 0.35).abs() < 1e-9);
        assert!((ratios[1] - 0.5).abs() < 1e-9);
        assert!((ratios[2] - 0.65).abs() < 1e-9);

        let offsets: Vec<f64> = loader.layouts().iter().map(|l| l.phase_offset_rad).collect();
        assert!(offsets.windows(2).all(|w| w[1] > w[0]));

        for render in loader.waves() {
            assert_eq!(render.path.verbs().first(), Some(&PathVerb::MoveTo));
            assert_eq!(render.path.verbs().last(), Some(&PathVerb::Close));
            let bounds = render.path.bounds().unwrap();
            assert_eq!(bounds.min.x, 0.0);
            assert_eq!(bounds.max.x, 240.0);
            assert!(render.opacity > 0.0 && render.opacity <= 1.0);
            assert_eq!(render.gradient.stops[1].color.a, 0);
        }
    }

    #[test]
    fn advance_is_idempotent_for_a_fixed_clock() {
        let mut loader = WaveLoader::default();
        loader.advance(1234.5);
        let first: Vec<WavePath> = loader.waves().map(|w| w.path.clone()).collect();

        loader.advance(9999.0);
        loader.advance(1234.5);
        let second: Vec<WavePath> = loader.waves().map(|w| w.path.clone()).collect();

        assert_eq!(first, second);
    }

    // ── opacity & fade composition ────────────────────────────────────────

    #[test]
    fn global_opacity_scales_proportionally() {
        let loader = WaveLoader::new(WaveLoaderConfig::new().waves(3.0).opacity(0.25));
        // Scale = 0.25 / 0.5; base layout opacities are 0.2 / 0.35 / 0.5.
        let expected = [0.1_f32, 0.175, 0.25];
        for (render, want) in loader.waves().zip(expected) {
            assert!((render.opacity - want).abs() < 1e-6);
        }
    }

    #[test]
    fn excessive_opacity_clamps_to_one() {
        let loader = WaveLoader::new(WaveLoaderConfig::new().waves(1.0).opacity(100.0));
        // resolve_opacity clamps the global to 1.0 before scaling.
        assert!(loader.wave(0).opacity <= 1.0);
    }

    #[test]
    fn fade_mask_follows_config() {
        let loader = WaveLoader::new(WaveLoaderConfig::new().size(100.0, 40.0).fade_out(150.0));
        let mask = loader.fade_mask();
        // 150 clamps to 100: fade reaches the center.
        assert_eq!(mask.stops[1].t, 0.5);
        assert_eq!(mask.stops[2].t, 0.5);
        assert_eq!(mask.end.x, 100.0);
    }

    // ── memoization ───────────────────────────────────────────────────────

    #[test]
    fn identical_config_does_not_rebuild() {
        let mut loader = WaveLoader::default();
        loader.set_config(WaveLoaderConfig::default());
        assert_eq!(loader.rebuild_counters(), (0, 0));
    }

    #[test]
    fn color_change_rebuilds_configs_but_not_layouts() {
        let mut loader = WaveLoader::default();
        loader.set_config(WaveLoaderConfig::default().color("#FF0000"));
        assert_eq!(loader.rebuild_counters(), (0, 1));
        assert_eq!(loader.resolved_configs()[0].color, "#FF0000");
    }

    #[test]
    fn wave_count_change_rebuilds_both() {
        let mut loader = WaveLoader::default();
        loader.set_config(WaveLoaderConfig::default().waves(5.0));
        assert_eq!(loader.rebuild_counters(), (1, 1));
        assert_eq!(loader.wave_count(), 5);
    }

    #[test]
    fn opacity_change_leaves_layouts_and_configs_alone() {
        let mut loader = WaveLoader::default();
        let before = loader.wave(0).opacity;
        loader.set_config(WaveLoaderConfig::default().opacity(1.0));
        assert_eq!(loader.rebuild_counters(), (0, 0));
        assert!(loader.wave(0).opacity > before);
    }

    // ── overrides flowing through ─────────────────────────────────────────

    #[test]
    fn per_wave_override_drives_its_slot() {
        let mut loader = WaveLoader::new(
            WaveLoaderConfig::new()
                .waves(2.0)
                .path_variant(PathVariant::Smooth)
                .wave_overrides([WaveOverride::default()
                    .color("#FF0000")
                    .path_variant(PathVariant::Square)]),
        );
        loader.advance(0.0);

        let resolved = loader.resolved_configs();
        assert_eq!(resolved[0].path_variant, PathVariant::Square);
        assert_eq!(resolved[1].path_variant, PathVariant::Smooth);

        // Square slot is all line segments; smooth slot carries cubics.
        assert!(
            loader
                .wave(0)
                .path
                .verbs()
                .iter()
                .all(|v| !matches!(v, PathVerb::CubicTo | PathVerb::QuadTo))
        );
        assert!(
            loader
                .wave(1)
                .path
                .verbs()
                .iter()
                .any(|v| matches!(v, PathVerb::CubicTo))
        );

        assert_eq!(
            loader.wave(0).gradient.stops[0].color,
            Rgba8::opaque(0xFF, 0, 0)
        );
    }

    #[test]
    fn shrinking_wave_count_keeps_buffers_but_hides_slots() {
        let mut loader = WaveLoader::new(WaveLoaderConfig::new().waves(5.0));
        loader.advance(100.0);
        loader.set_config(WaveLoaderConfig::new().waves(2.0));
        loader.advance(200.0);
        assert_eq!(loader.wave_count(), 2);
        assert_eq!(loader.waves().count(), 2);
    }
}
