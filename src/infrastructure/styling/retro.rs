//! Retro terminal styling
//!
//! Monochrome-green palette with a few accent colors. Type tags follow the
//! `<category>_<kind>_<variant>` naming of the source data, e.g.
//! `erzaehlung_route_tram` or `kontext_poi_bank`.

use crate::domain::ports::FeatureStyler;
use crate::domain::value_objects::{IconSpec, MarkerShape, StyleSpec};

const TERMINAL_GREEN: &str = "#00ff41";
const TERMINAL_DARK_GREEN: &str = "#00cc33";
const TERMINAL_GREY: &str = "#808080";
const RETRO_BLUE: &str = "#0080ff";
const AMBER: &str = "#ffaa00";
const CYAN: &str = "#00ffff";
const WHITE: &str = "#ffffff";

const GLYPH_SIZE: u32 = 24;

/// Fill color for a feature type tag, terminal green when unknown.
pub fn palette_color(type_tag: Option<&str>) -> &'static str {
    match type_tag.unwrap_or_default() {
        "anker_polygon" => RETRO_BLUE,
        "erzaehlung_route_fahrrad" | "erzaehlung_startpunkt" => TERMINAL_GREEN,
        "erzaehlung_route_tram" => AMBER,
        "erzaehlung_route_fuss" => CYAN,
        "kontext_flaeche_gruen" => TERMINAL_DARK_GREEN,
        "kontext_flaeche_platz" => TERMINAL_GREY,
        _ => TERMINAL_GREEN,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RetroStyler;

impl RetroStyler {
    pub fn new() -> Self {
        Self
    }
}

impl FeatureStyler for RetroStyler {
    fn style_for(&self, type_tag: Option<&str>) -> StyleSpec {
        let color = palette_color(type_tag);
        let mut style = StyleSpec {
            stroke_color: TERMINAL_GREEN.to_string(),
            fill_color: color.to_string(),
            weight: 2,
            opacity: 1.0,
            fill_opacity: 0.4,
            dash_array: None,
        };

        let Some(tag) = type_tag else {
            return style;
        };
        match tag {
            "anker_polygon" => {
                style.fill_opacity = 0.5;
                style.stroke_color = WHITE.to_string();
            }
            "kontext_flaeche_gruen" => {
                style.dash_array = Some("5, 5".to_string());
            }
            "kontext_flaeche_platz" => {
                style.fill_opacity = 0.5;
                style.dash_array = Some("3, 3".to_string());
            }
            "erzaehlung_route_fahrrad" => {
                style.stroke_color = color.to_string();
                style.weight = 4;
                style.opacity = 0.9;
                style.fill_opacity = 0.0;
            }
            "erzaehlung_route_tram" => {
                style.stroke_color = color.to_string();
                style.weight = 6;
                style.dash_array = Some("12, 8".to_string());
                style.opacity = 0.9;
                style.fill_opacity = 0.0;
            }
            "erzaehlung_route_fuss" => {
                style.stroke_color = color.to_string();
                style.weight = 3;
                style.dash_array = Some("3, 6".to_string());
                style.opacity = 0.8;
                style.fill_opacity = 0.0;
            }
            _ => {
                style.dash_array = Some("3, 3".to_string());
            }
        }
        style
    }

    fn icon_for(&self, type_tag: Option<&str>) -> IconSpec {
        let tag = type_tag.unwrap_or_default();
        let glyph = |glyph: &str, class: &str| IconSpec {
            class_name: format!("retro-marker {}", class),
            shape: MarkerShape::Glyph {
                glyph: glyph.to_string(),
                size: GLYPH_SIZE,
            },
            fill_color: TERMINAL_GREEN.to_string(),
        };

        match tag {
            "kontext_poi_bank" => glyph("bench", "poi-bench"),
            "kontext_poi_gastro" => glyph("food", "poi-food"),
            "kontext_poi_tram" => glyph("tram", "poi-tram"),
            "kontext_poi_shop" => glyph("shop", "poi-shop"),
            "erzaehlung_startpunkt" => glyph("home", "story-start"),
            t if t.contains("poi") || t.contains("startpunkt") => glyph("pin", "default"),
            _ => IconSpec {
                class_name: "retro-marker circle".to_string(),
                shape: MarkerShape::Circle {
                    radius: if tag == "anker_polygon" { 12 } else { 8 },
                },
                fill_color: palette_color(type_tag).to_string(),
            },
        }
    }
}
