//! Parsed geographic document entity
//!
//! Layer sources are GeoJSON `FeatureCollection`s. Only the parts the engine and the
//! styling collaborator read are modelled; everything else in `properties` is kept
//! as opaque JSON.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::value_objects::{GeoBounds, GeometryKind, LatLng};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("document is not valid GeoJSON: {message}")]
    Malformed { message: String },

    #[error("document root must be a FeatureCollection (found {found})")]
    NotFeatureCollection { found: String },
}

type Position = Vec<f64>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

impl Geometry {
    /// Drawable kind, or `None` for heterogeneous collections.
    pub fn kind(&self) -> Option<GeometryKind> {
        match self {
            Geometry::Point { .. } | Geometry::MultiPoint { .. } => Some(GeometryKind::Point),
            Geometry::LineString { .. } | Geometry::MultiLineString { .. } => {
                Some(GeometryKind::Line)
            }
            Geometry::Polygon { .. } | Geometry::MultiPolygon { .. } => {
                Some(GeometryKind::Polygon)
            }
            Geometry::GeometryCollection { geometries } => {
                let mut kinds = geometries.iter().map(Geometry::kind);
                let first = kinds.next()??;
                kinds.all(|k| k == Some(first)).then_some(first)
            }
        }
    }

    pub fn bounds(&self) -> Option<GeoBounds> {
        let mut bounds: Option<GeoBounds> = None;
        self.visit_positions(&mut |position: &[f64]| {
            if let Some(point) = LatLng::from_position(position) {
                match bounds.as_mut() {
                    Some(b) => b.extend(point),
                    None => bounds = Some(GeoBounds::from_point(point)),
                }
            }
        });
        bounds
    }

    fn visit_positions(&self, f: &mut dyn FnMut(&[f64])) {
        match self {
            Geometry::Point { coordinates } => f(coordinates.as_slice()),
            Geometry::MultiPoint { coordinates } | Geometry::LineString { coordinates } => {
                coordinates.iter().for_each(|p| f(p.as_slice()))
            }
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                coordinates.iter().flatten().for_each(|p| f(p.as_slice()))
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flatten()
                .flatten()
                .for_each(|p| f(p.as_slice())),
            Geometry::GeometryCollection { geometries } => {
                for g in geometries {
                    g.visit_positions(f);
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    fn property(&self, key: &str) -> Option<&str> {
        self.properties.as_ref()?.get(key)?.as_str()
    }

    pub fn name(&self) -> Option<&str> {
        self.property("name")
    }

    pub fn description(&self) -> Option<&str> {
        self.property("beschreibung")
    }

    /// Feature-level type tag (`typ`), the key for the styling collaborator.
    pub fn type_tag(&self) -> Option<&str> {
        self.property("typ")
    }

    pub fn bounds(&self) -> Option<GeoBounds> {
        self.geometry.as_ref()?.bounds()
    }
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeoDocument {
    features: Vec<Feature>,
}

impl GeoDocument {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DocumentError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| DocumentError::Malformed {
                message: e.to_string(),
            })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let root_type = value.get("type").and_then(Value::as_str);
        if root_type != Some("FeatureCollection") {
            let found = match (&value, root_type) {
                (_, Some(t)) => format!("'{}'", t),
                (Value::Object(_), None) => "an object without a type".to_string(),
                _ => "a non-object value".to_string(),
            };
            return Err(DocumentError::NotFeatureCollection { found });
        }

        let raw: RawCollection =
            serde_json::from_value(value).map_err(|e| DocumentError::Malformed {
                message: e.to_string(),
            })?;
        Ok(Self {
            features: raw.features,
        })
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Union of all feature bounds, `None` when no feature has coordinates.
    pub fn bounds(&self) -> Option<GeoBounds> {
        self.features
            .iter()
            .filter_map(Feature::bounds)
            .reduce(|acc, b| acc.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature",
             "properties": {"name": "Hasselbachplatz", "typ": "kontext_flaeche_platz"},
             "geometry": {"type": "Polygon", "coordinates": [[[11.62, 52.12], [11.63, 52.12], [11.63, 52.13], [11.62, 52.12]]]}},
            {"type": "Feature",
             "properties": {"name": "Bank", "typ": "kontext_poi_bank"},
             "geometry": {"type": "Point", "coordinates": [11.60, 52.14]}},
            {"type": "Feature", "properties": null, "geometry": null}
        ]
    }"#;

    #[test]
    fn parses_feature_collection() {
        let doc = GeoDocument::from_slice(MIXED.as_bytes()).unwrap();
        assert_eq!(doc.features().len(), 3);
        assert_eq!(doc.features()[0].name(), Some("Hasselbachplatz"));
        assert_eq!(doc.features()[1].type_tag(), Some("kontext_poi_bank"));
        assert_eq!(doc.features()[2].name(), None);
    }

    #[test]
    fn bounds_cover_every_feature_and_skip_null_geometry() {
        let doc = GeoDocument::from_slice(MIXED.as_bytes()).unwrap();
        let b = doc.bounds().unwrap();
        assert_eq!(b.south, 52.12);
        assert_eq!(b.north, 52.14);
        assert_eq!(b.west, 11.60);
        assert_eq!(b.east, 11.63);
    }

    #[test]
    fn empty_collection_has_no_bounds() {
        let doc =
            GeoDocument::from_slice(br#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(doc.bounds().is_none());
    }

    #[test]
    fn bare_feature_root_is_rejected() {
        let err = GeoDocument::from_slice(
            br#"{"type": "Feature", "geometry": {"type": "Point", "coordinates": [1, 2]}}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DocumentError::NotFeatureCollection {
                found: "'Feature'".to_string()
            }
        );
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = GeoDocument::from_slice(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DocumentError::NotFeatureCollection { .. }));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = GeoDocument::from_slice(b"{not json").unwrap_err();
        assert!(matches!(err, DocumentError::Malformed { .. }));
    }

    #[test]
    fn geometry_collection_kind_is_uniform_or_none() {
        let uniform = Geometry::GeometryCollection {
            geometries: vec![
                Geometry::Point {
                    coordinates: vec![1.0, 2.0],
                },
                Geometry::MultiPoint {
                    coordinates: vec![vec![3.0, 4.0]],
                },
            ],
        };
        assert_eq!(uniform.kind(), Some(GeometryKind::Point));

        let mixed = Geometry::GeometryCollection {
            geometries: vec![
                Geometry::Point {
                    coordinates: vec![1.0, 2.0],
                },
                Geometry::LineString {
                    coordinates: vec![vec![3.0, 4.0], vec![5.0, 6.0]],
                },
            ],
        };
        assert_eq!(mixed.kind(), None);
        assert_eq!(
            Geometry::GeometryCollection { geometries: vec![] }.kind(),
            None
        );
    }
}
