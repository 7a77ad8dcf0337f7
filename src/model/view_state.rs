use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{
    ColorMap, CursorLocation, DrawMode, PropertyKind, PropertyValue, SliceDisplayType,
    TracingLayer, Vec2,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: 0.05,
            max: 3.0,
        }
    }
}

impl ScaleLimits {
    /// Clamps into `[min, max]`. NaN maps to `min`; inverted limits never panic.
    pub fn clamp(&self, scale: f32) -> f32 {
        scale.max(self.min).min(self.max)
    }
}

/// Initial display parameters of a freshly opened view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewDefaults {
    pub brightness: f32,
    pub brightness_threshold: f32,
    pub contrast: f32,
    pub primary_color_map: ColorMap,
    pub secondary_color_map: ColorMap,
    pub primary_opacity: f32,
    pub secondary_opacity: f32,
    pub display_type: SliceDisplayType,
    pub tracing_layer: TracingLayer,
    pub visible_layers: BTreeSet<TracingLayer>,
    pub draw_mode: DrawMode,
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            brightness_threshold: 0.0,
            contrast: 1.0,
            primary_color_map: ColorMap::Gray,
            secondary_color_map: ColorMap::Hot,
            primary_opacity: 1.0,
            secondary_opacity: 0.5,
            display_type: SliceDisplayType::FatOnly,
            tracing_layer: TracingLayer::Eat,
            visible_layers: TracingLayer::ALL.into_iter().collect(),
            draw_mode: DrawMode::Points,
        }
    }
}

/// Mutable display state of one slice view.
///
/// Setters only store values. Requesting a redraw is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    translation: Vec2,
    scale: f32,
    scale_limits: ScaleLimits,
    brightness: f32,
    brightness_threshold: f32,
    contrast: f32,
    primary_color_map: ColorMap,
    secondary_color_map: ColorMap,
    primary_opacity: f32,
    secondary_opacity: f32,
    display_type: SliceDisplayType,
    tracing_layer: TracingLayer,
    visible_layers: BTreeSet<TracingLayer>,
    draw_mode: DrawMode,
    location: CursorLocation,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&ViewDefaults::default(), ScaleLimits::default())
    }
}

impl ViewState {
    pub fn new(defaults: &ViewDefaults, scale_limits: ScaleLimits) -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: scale_limits.clamp(1.0),
            scale_limits,
            brightness: defaults.brightness,
            brightness_threshold: defaults.brightness_threshold,
            contrast: defaults.contrast,
            primary_color_map: defaults.primary_color_map,
            secondary_color_map: defaults.secondary_color_map,
            primary_opacity: defaults.primary_opacity,
            secondary_opacity: defaults.secondary_opacity,
            display_type: defaults.display_type,
            tracing_layer: defaults.tracing_layer,
            visible_layers: defaults.visible_layers.clone(),
            draw_mode: defaults.draw_mode,
            location: CursorLocation::default(),
        }
    }

    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Vec2) {
        self.translation = translation;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Stores `scale` clamped into the view's scale limits. NaN keeps the current scale.
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_nan() {
            return;
        }
        self.scale = self.scale_limits.clamp(scale);
    }

    pub fn scale_limits(&self) -> ScaleLimits {
        self.scale_limits
    }

    /// Centers the slice and returns to 100% zoom.
    pub fn reset_view(&mut self) {
        self.translation = Vec2::ZERO;
        self.set_scale(1.0);
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    pub fn brightness_threshold(&self) -> f32 {
        self.brightness_threshold
    }

    pub fn set_brightness_threshold(&mut self, threshold: f32) {
        self.brightness_threshold = threshold;
    }

    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    pub fn set_contrast(&mut self, contrast: f32) {
        self.contrast = contrast;
    }

    pub fn primary_color_map(&self) -> ColorMap {
        self.primary_color_map
    }

    pub fn set_primary_color_map(&mut self, map: ColorMap) {
        self.primary_color_map = map;
    }

    pub fn secondary_color_map(&self) -> ColorMap {
        self.secondary_color_map
    }

    pub fn set_secondary_color_map(&mut self, map: ColorMap) {
        self.secondary_color_map = map;
    }

    pub fn primary_opacity(&self) -> f32 {
        self.primary_opacity
    }

    pub fn set_primary_opacity(&mut self, opacity: f32) {
        self.primary_opacity = opacity;
    }

    pub fn secondary_opacity(&self) -> f32 {
        self.secondary_opacity
    }

    pub fn set_secondary_opacity(&mut self, opacity: f32) {
        self.secondary_opacity = opacity;
    }

    pub fn display_type(&self) -> SliceDisplayType {
        self.display_type
    }

    pub fn set_display_type(&mut self, display_type: SliceDisplayType) {
        self.display_type = display_type;
    }

    pub fn tracing_layer(&self) -> TracingLayer {
        self.tracing_layer
    }

    pub fn set_tracing_layer(&mut self, layer: TracingLayer) {
        self.tracing_layer = layer;
    }

    pub fn is_layer_visible(&self, layer: TracingLayer) -> bool {
        self.visible_layers.contains(&layer)
    }

    pub fn set_layer_visible(&mut self, layer: TracingLayer, visible: bool) {
        if visible {
            self.visible_layers.insert(layer);
        } else {
            self.visible_layers.remove(&layer);
        }
    }

    pub fn visible_layers(&self) -> &BTreeSet<TracingLayer> {
        &self.visible_layers
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.draw_mode = mode;
    }

    pub fn location(&self) -> CursorLocation {
        self.location
    }

    pub fn set_location(&mut self, location: CursorLocation) {
        self.location = location;
    }

    pub fn property(&self, kind: PropertyKind) -> PropertyValue {
        match kind {
            PropertyKind::Brightness => PropertyValue::Brightness(self.brightness),
            PropertyKind::BrightnessThreshold => {
                PropertyValue::BrightnessThreshold(self.brightness_threshold)
            }
            PropertyKind::Contrast => PropertyValue::Contrast(self.contrast),
            PropertyKind::PrimaryColorMap => PropertyValue::PrimaryColorMap(self.primary_color_map),
            PropertyKind::SecondaryColorMap => {
                PropertyValue::SecondaryColorMap(self.secondary_color_map)
            }
            PropertyKind::PrimaryOpacity => PropertyValue::PrimaryOpacity(self.primary_opacity),
            PropertyKind::SecondaryOpacity => {
                PropertyValue::SecondaryOpacity(self.secondary_opacity)
            }
            PropertyKind::DisplayType => PropertyValue::DisplayType(self.display_type),
            PropertyKind::TracingLayer => PropertyValue::TracingLayer(self.tracing_layer),
            PropertyKind::LayerVisible(layer) => {
                PropertyValue::LayerVisible(layer, self.is_layer_visible(layer))
            }
            PropertyKind::DrawMode => PropertyValue::DrawMode(self.draw_mode),
        }
    }

    pub fn set_property(&mut self, value: PropertyValue) {
        match value {
            PropertyValue::Brightness(v) => self.set_brightness(v),
            PropertyValue::BrightnessThreshold(v) => self.set_brightness_threshold(v),
            PropertyValue::Contrast(v) => self.set_contrast(v),
            PropertyValue::PrimaryColorMap(map) => self.set_primary_color_map(map),
            PropertyValue::SecondaryColorMap(map) => self.set_secondary_color_map(map),
            PropertyValue::PrimaryOpacity(v) => self.set_primary_opacity(v),
            PropertyValue::SecondaryOpacity(v) => self.set_secondary_opacity(v),
            PropertyValue::DisplayType(display_type) => self.set_display_type(display_type),
            PropertyValue::TracingLayer(layer) => self.set_tracing_layer(layer),
            PropertyValue::LayerVisible(layer, visible) => self.set_layer_visible(layer, visible),
            PropertyValue::DrawMode(mode) => self.set_draw_mode(mode),
        }
    }
}
