use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Colección GeoJSON de `GET /api/v1/pets`, también la que recibe la capa del mapa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "FeatureCollection::kind")]
    kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    fn kind() -> String {
        "FeatureCollection".to_string()
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self {
            kind: Self::kind(),
            features: Vec::new(),
        }
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "Feature::kind")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
}

impl Feature {
    fn kind() -> String {
        "Feature".to_string()
    }

    /// Trae id propio, como miembro `id` o como propiedad `id`
    pub fn has_own_id(&self) -> bool {
        self.id.is_some() || self.properties.contains_key("id")
    }
}

impl From<Geometry> for Feature {
    fn from(geometry: Geometry) -> Self {
        Self {
            kind: Self::kind(),
            id: None,
            geometry,
            properties: HashMap::new(),
        }
    }
}

/// Coordenadas en orden `[longitud, latitud]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
    MultiPoint { coordinates: Vec<[f64; 2]> },
    MultiLineString { coordinates: Vec<Vec<[f64; 2]>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<[f64; 2]>>> },
}
