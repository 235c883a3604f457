//! Vocabulary — the recognized device names per category.
//!
//! Names are matched literally and case-sensitively. A name may belong to
//! more than one category (`oven` is both an appliance and a thermal
//! device); which category applies is decided by the verb addressing it.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// A family of devices addressed by the same verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCategory {
    LightSource,
    Barrier,
    Appliance,
    ThermalDevice,
}

impl DeviceCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::LightSource,
        Self::Barrier,
        Self::Appliance,
        Self::ThermalDevice,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LightSource => "light_source",
            Self::Barrier => "barrier",
            Self::Appliance => "appliance",
            Self::ThermalDevice => "thermal_device",
        }
    }
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const LIGHT_SOURCES: &[&str] = &["lamp", "bulb", "neon", "sconce", "brazier"];

const BARRIERS: &[&str] = &[
    "gate",
    "curtains",
    "garage-door",
    "blinds",
    "window",
    "shutter",
    "trapdoor",
    "portcullis",
    "drawbridge",
    "blast-door",
    "airlock",
];

const APPLIANCES: &[&str] = &[
    "coffee-maker",
    "oven",
    "air-conditioner",
    "centrifuge",
    "synchrotron",
    "laser-cannon",
];

const THERMAL_DEVICES: &[&str] = &[
    "oven",
    "thermostat",
    "electric-blanket",
    "incinerator",
    "reactor-core",
];

/// Read-only table mapping each [`DeviceCategory`] to its device names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    devices: HashMap<DeviceCategory, BTreeSet<String>>,
}

impl Vocabulary {
    /// The built-in device vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        let table = [
            (DeviceCategory::LightSource, LIGHT_SOURCES),
            (DeviceCategory::Barrier, BARRIERS),
            (DeviceCategory::Appliance, APPLIANCES),
            (DeviceCategory::ThermalDevice, THERMAL_DEVICES),
        ];

        table
            .into_iter()
            .flat_map(|(category, names)| names.iter().map(move |name| (category, *name)))
            .fold(Self::empty(), |vocab, (category, name)| {
                vocab.with_device(category, name)
            })
    }

    /// A vocabulary that recognizes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add `name` to `category`.
    #[must_use]
    pub fn with_device(mut self, category: DeviceCategory, name: impl Into<String>) -> Self {
        self.devices.entry(category).or_default().insert(name.into());
        self
    }

    /// Whether `name` is a known device of `category`.
    #[must_use]
    pub fn contains(&self, category: DeviceCategory, name: &str) -> bool {
        self.devices
            .get(&category)
            .is_some_and(|names| names.contains(name))
    }

    /// Device names of `category`, sorted.
    pub fn names(&self, category: DeviceCategory) -> impl Iterator<Item = &str> {
        self.devices
            .get(&category)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_recognize_every_standard_light_source() {
        let vocab = Vocabulary::standard();
        for name in LIGHT_SOURCES {
            assert!(vocab.contains(DeviceCategory::LightSource, name));
        }
    }

    #[test]
    fn should_list_oven_as_appliance_and_thermal_device() {
        let vocab = Vocabulary::standard();
        assert!(vocab.contains(DeviceCategory::Appliance, "oven"));
        assert!(vocab.contains(DeviceCategory::ThermalDevice, "oven"));
        assert!(!vocab.contains(DeviceCategory::LightSource, "oven"));
    }

    #[test]
    fn should_match_names_case_sensitively() {
        let vocab = Vocabulary::standard();
        assert!(vocab.contains(DeviceCategory::LightSource, "lamp"));
        assert!(!vocab.contains(DeviceCategory::LightSource, "Lamp"));
    }

    #[test]
    fn should_reject_unknown_device() {
        let vocab = Vocabulary::standard();
        assert!(
            DeviceCategory::ALL
                .iter()
                .all(|category| !vocab.contains(*category, "door"))
        );
    }

    #[test]
    fn should_recognize_nothing_when_empty() {
        let vocab = Vocabulary::empty();
        assert!(!vocab.contains(DeviceCategory::LightSource, "lamp"));
        assert_eq!(vocab.names(DeviceCategory::Barrier).count(), 0);
    }

    #[test]
    fn should_extend_vocabulary_with_custom_device() {
        let vocab = Vocabulary::empty().with_device(DeviceCategory::Barrier, "hatch");
        assert!(vocab.contains(DeviceCategory::Barrier, "hatch"));
        assert!(!vocab.contains(DeviceCategory::Appliance, "hatch"));
    }

    #[test]
    fn should_list_standard_barriers_sorted() {
        let vocab = Vocabulary::standard();
        let names: Vec<_> = vocab.names(DeviceCategory::Barrier).collect();
        assert_eq!(names.len(), BARRIERS.len());
        assert_eq!(names.first(), Some(&"airlock"));
    }

    #[test]
    fn should_serialize_category_as_snake_case() {
        let json = serde_json::to_string(&DeviceCategory::ThermalDevice).unwrap();
        assert_eq!(json, "\"thermal_device\"");
        assert_eq!(DeviceCategory::LightSource.to_string(), "light_source");
    }
}
