//! Rendering of an [`Availability`] for the terminal or for scripts.
//!
//! What to print and how is decided once, up front, in a [`ReportConfig`].

use serde_json::{Map, Value};

use crate::estimator::Availability;
use crate::fmt::Unit;

/// One of the four estimated figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Total,
    Free,
    Available,
    Unavailable,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Total,
        Field::Free,
        Field::Available,
        Field::Unavailable,
    ];

    fn value(self, result: &Availability) -> i64 {
        match self {
            Field::Total => result.total,
            Field::Free => result.free,
            Field::Available => result.available,
            Field::Unavailable => result.unavailable,
        }
    }
}

/// Display labels for each [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub total: String,
    pub free: String,
    pub available: String,
    pub unavailable: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            total: "total".to_string(),
            free: "free".to_string(),
            available: "available".to_string(),
            unavailable: "unavailable".to_string(),
        }
    }
}

impl Labels {
    /// Labels where unavailable memory is called "used".
    pub fn used() -> Self {
        Self {
            unavailable: "used".to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Total => &self.total,
            Field::Free => &self.free,
            Field::Available => &self.available,
            Field::Unavailable => &self.unavailable,
        }
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything that decides what [`render`] prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub unit: Unit,
    pub fields: Vec<Field>,
    pub labels: Labels,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            unit: Unit::default(),
            fields: Field::ALL.to_vec(),
            labels: Labels::default(),
            format: OutputFormat::default(),
        }
    }
}

impl ReportConfig {
    /// Builds the config from the command-line selection flags.
    ///
    /// `--available` and `--used` each narrow the output to one figure; with
    /// both set both are printed, with neither all four are.
    pub fn from_flags(available: bool, used: bool, unit: Unit, json: bool) -> Self {
        let mut fields = Vec::new();
        if available {
            fields.push(Field::Available);
        }
        if used {
            fields.push(Field::Unavailable);
        }
        if fields.is_empty() {
            fields = Field::ALL.to_vec();
        }

        Self {
            unit,
            fields,
            labels: if used { Labels::used() } else { Labels::default() },
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}

/// Renders the configured figures, converted to the configured unit.
///
/// A single text figure is printed bare so shell scripts can capture it.
pub fn render(result: &Availability, config: &ReportConfig) -> String {
    match config.format {
        OutputFormat::Text => render_text(result, config),
        OutputFormat::Json => render_json(result, config),
    }
}

fn render_text(result: &Availability, config: &ReportConfig) -> String {
    if let [field] = config.fields.as_slice() {
        return format!("{}\n", config.unit.convert(field.value(result)));
    }

    let width = config
        .fields
        .iter()
        .map(|f| config.labels.get(*f).len() + 1)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for field in &config.fields {
        let label = format!("{}:", config.labels.get(*field));
        out.push_str(&format!(
            "{:<width$} {} {}\n",
            label,
            config.unit.convert(field.value(result)),
            config.unit.suffix(),
        ));
    }
    out
}

fn render_json(result: &Availability, config: &ReportConfig) -> String {
    let mut map = Map::new();
    for field in &config.fields {
        map.insert(
            config.labels.get(*field).to_string(),
            Value::from(config.unit.convert(field.value(result))),
        );
    }
    map.insert(
        "unit".to_string(),
        Value::from(config.unit.suffix().to_string()),
    );
    format!("{}\n", Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Availability {
        Availability {
            total: 16384000,
            free: 8192000,
            available: 11972000,
            unavailable: 4412000,
        }
    }

    #[test]
    fn test_render_all_fields_text() {
        let out = render(&sample(), &ReportConfig::default());
        assert_eq!(
            out,
            "\
total:       16384000 kB
free:        8192000 kB
available:   11972000 kB
unavailable: 4412000 kB
"
        );
    }

    #[test]
    fn test_render_single_field_is_bare_number() {
        let config = ReportConfig::from_flags(true, false, Unit::Megabytes, false);
        assert_eq!(render(&sample(), &config), "11691\n");

        let config = ReportConfig::from_flags(false, true, Unit::Gigabytes, false);
        assert_eq!(render(&sample(), &config), "4\n");
    }

    #[test]
    fn test_render_available_and_used() {
        let config = ReportConfig::from_flags(true, true, Unit::Megabytes, false);
        assert_eq!(
            render(&sample(), &config),
            "available: 11691 MB\nused:      4308 MB\n"
        );
    }

    #[test]
    fn test_render_json() {
        let config = ReportConfig::from_flags(false, true, Unit::Kilobytes, true);
        let out = render(&sample(), &config);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["used"], 4412000);
        assert_eq!(value["unit"], "kB");
        assert!(value.get("total").is_none());
    }

    #[test]
    fn test_render_json_all_fields() {
        let config = ReportConfig {
            format: OutputFormat::Json,
            unit: Unit::Megabytes,
            ..ReportConfig::default()
        };
        let value: Value = serde_json::from_str(&render(&sample(), &config)).unwrap();
        assert_eq!(value["total"], 16000);
        assert_eq!(value["free"], 8000);
        assert_eq!(value["available"], 11691);
        assert_eq!(value["unavailable"], 4308);
    }

    #[test]
    fn test_from_flags_defaults_to_all_fields() {
        let config = ReportConfig::from_flags(false, false, Unit::Kilobytes, false);
        assert_eq!(config, ReportConfig::default());
    }
}
