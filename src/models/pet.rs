use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::models::geojson::{Feature, Geometry};

/// Posición geográfica de una mascota
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Edad tal como la reportaron: años o texto libre ("puppy")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PetAge {
    Years(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: u64,
    pub location: Location,
    pub name: Option<String>,
    pub age: Option<PetAge>,
    pub sex: Option<String>,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    #[serde(rename = "image-url")]
    pub image_url: Option<String>,
}

impl Pet {
    /// Mascota con solo los campos obligatorios
    pub fn new(id: u64, location: Location) -> Self {
        Self {
            id,
            location,
            name: None,
            age: None,
            sex: None,
            breed: None,
            color: None,
            size: None,
            image_url: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parsea un payload sin tipo. `id` y `location` son obligatorios; el resto
    /// queda en `None` si falta, es null o es falsy.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

        let id = parse_id(object)?;
        let location = parse_location(object)?;

        Ok(Self {
            id,
            location,
            name: optional_text(object, "name")?,
            age: optional_age(object)?,
            sex: optional_text(object, "sex")?,
            breed: optional_text(object, "breed")?,
            color: optional_text(object, "color")?,
            size: optional_text(object, "size")?,
            image_url: optional_text(object, "image-url")?,
        })
    }

    /// Convierte un feature de la colección `/pets`. Las coordenadas llegan
    /// como `[lng, lat]`; `fallback_id` solo se usa si el feature no trae id.
    pub fn from_feature(fallback_id: u64, feature: &Feature) -> Result<Self, ValidationError> {
        let [lng, lat] = match &feature.geometry {
            Geometry::Point { coordinates } => *coordinates,
            _ => return Err(ValidationError::invalid("geometry", "expected a Point")),
        };

        let mut payload: Map<String, Value> = feature
            .properties
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        if !payload.contains_key("id") {
            let id = feature.id.clone().unwrap_or_else(|| Value::from(fallback_id));
            payload.insert("id".to_string(), id);
        }
        payload.insert(
            "location".to_string(),
            serde_json::json!({ "lat": lat, "lng": lng }),
        );

        Self::from_payload(&Value::Object(payload))
    }

    /// Etiqueta para listas y popups de marcadores
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Unnamed pet #{}", self.id))
    }
}

fn parse_id(object: &Map<String, Value>) -> Result<u64, ValidationError> {
    match object.get("id") {
        None | Some(Value::Null) => Err(ValidationError::MissingField("id")),
        Some(value) => value.as_u64().ok_or_else(|| {
            let reason = format!("expected a non-negative integer, got {}", value);
            ValidationError::invalid("id", reason)
        }),
    }
}

fn parse_location(object: &Map<String, Value>) -> Result<Location, ValidationError> {
    let location = match object.get("location") {
        None | Some(Value::Null) => return Err(ValidationError::MissingField("location")),
        Some(Value::Object(location)) => location,
        Some(_) => return Err(ValidationError::invalid("location", "expected an object")),
    };

    let coordinate = |key: &'static str| -> Result<f64, ValidationError> {
        match location.get(key) {
            None | Some(Value::Null) => Err(ValidationError::MissingField(key)),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| ValidationError::invalid(key, "expected a number")),
        }
    };

    let parsed = Location::new(coordinate("lat")?, coordinate("lng")?);
    if !parsed.is_valid() {
        return Err(ValidationError::invalid(
            "location",
            format!("({}, {}) is out of range", parsed.lat, parsed.lng),
        ));
    }
    Ok(parsed)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().map_or(false, |n| n == 0.0 || n.is_nan()),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn optional_text(
    object: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<String>, ValidationError> {
    match object.get(key) {
        None => Ok(None),
        Some(value) if is_falsy(value) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(ValidationError::invalid(key, "expected text")),
    }
}

fn optional_age(object: &Map<String, Value>) -> Result<Option<PetAge>, ValidationError> {
    match object.get("age") {
        None => Ok(None),
        Some(value) if is_falsy(value) => Ok(None),
        Some(Value::String(text)) => Ok(Some(PetAge::Text(text.clone()))),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(|years| Some(PetAge::Years(years)))
            .ok_or_else(|| ValidationError::invalid("age", "number out of range")),
        Some(_) => Err(ValidationError::invalid("age", "expected a number or text")),
    }
}
