//! Static per-category projections of items into summary cards and detail views.
//!
//! Both projections are total: any field that is missing, null, empty or the
//! literal `"unknown"` SWAPI uses renders as [`UNKNOWN`]. Unit suffixes are
//! appended only to known values, and list fields render as counts.
//!
//! # Public API
//! - [`project_card`]: Title plus four summary lines for the list view
//! - [`project_detail`]: Sectioned field list for the detail overlay

use crate::core::{category::Category, page::Item};
use serde_json::Value;

/// Sentinel shown for missing values
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy)]
enum FieldKind {
    Text,
    /// Known values get this suffix appended
    Measure(&'static str),
    /// Length of a list field followed by this word
    Count(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct FieldSpec {
    label: &'static str,
    key: &'static str,
    kind: FieldKind,
}

#[derive(Debug, Clone, Copy)]
struct SectionSpec {
    heading: &'static str,
    fields: &'static [FieldSpec],
}

const fn text(label: &'static str, key: &'static str) -> FieldSpec {
    FieldSpec { label, key, kind: FieldKind::Text }
}

const fn measure(label: &'static str, key: &'static str, suffix: &'static str) -> FieldSpec {
    FieldSpec { label, key, kind: FieldKind::Measure(suffix) }
}

const fn count(label: &'static str, key: &'static str, word: &'static str) -> FieldSpec {
    FieldSpec { label, key, kind: FieldKind::Count(word) }
}

const CHARACTER_CARD: &[FieldSpec] = &[
    text("Height", "height"),
    text("Mass", "mass"),
    text("Gender", "gender"),
    text("Year of birth", "birth_year"),
];

const PLANET_CARD: &[FieldSpec] = &[
    text("Rotation period", "rotation_period"),
    text("Orbital period", "orbital_period"),
    text("Gravity", "gravity"),
    text("Population", "population"),
];

const STARSHIP_CARD: &[FieldSpec] = &[
    text("Model", "model"),
    text("Manufacturer", "manufacturer"),
    text("Length", "length"),
    text("Cost (in credits)", "cost_in_credits"),
];

const CHARACTER_DETAIL: &[SectionSpec] = &[
    SectionSpec {
        heading: "Physical Characteristics",
        fields: &[
            measure("Height", "height", " cm"),
            measure("Mass", "mass", " kg"),
            text("Hair Color", "hair_color"),
            text("Skin Color", "skin_color"),
            text("Eye Color", "eye_color"),
        ],
    },
    SectionSpec {
        heading: "Personal Information",
        fields: &[text("Birth Year", "birth_year"), text("Gender", "gender")],
    },
    SectionSpec {
        heading: "Star Wars Universe",
        fields: &[
            count("Films Appeared", "films", "film(s)"),
            count("Vehicles", "vehicles", "vehicle(s)"),
            count("Starships", "starships", "starship(s)"),
            count("Species", "species", "species"),
        ],
    },
];

const PLANET_DETAIL: &[SectionSpec] = &[
    SectionSpec {
        heading: "Planetary Data",
        fields: &[
            measure("Rotation Period", "rotation_period", " hours"),
            measure("Orbital Period", "orbital_period", " days"),
            measure("Diameter", "diameter", " km"),
            text("Gravity", "gravity"),
        ],
    },
    SectionSpec {
        heading: "Environment",
        fields: &[
            text("Climate", "climate"),
            text("Terrain", "terrain"),
            measure("Surface Water", "surface_water", "%"),
        ],
    },
    SectionSpec {
        heading: "Population & Culture",
        fields: &[
            text("Population", "population"),
            count("Films Featured", "films", "film(s)"),
            count("Residents", "residents", "known character(s)"),
        ],
    },
];

const STARSHIP_DETAIL: &[SectionSpec] = &[
    SectionSpec {
        heading: "Ship Specifications",
        fields: &[
            text("Model", "model"),
            text("Manufacturer", "manufacturer"),
            measure("Length", "length", " meters"),
            text("Class", "starship_class"),
        ],
    },
    SectionSpec {
        heading: "Economics & Crew",
        fields: &[
            measure("Cost", "cost_in_credits", " credits"),
            text("Crew", "crew"),
            text("Passengers", "passengers"),
            measure("Cargo Capacity", "cargo_capacity", " kg"),
        ],
    },
    SectionSpec {
        heading: "Performance",
        fields: &[
            measure("Max Speed", "max_atmosphering_speed", " km/h"),
            text("Hyperdrive Rating", "hyperdrive_rating"),
            text("MGLT", "MGLT"),
            text("Consumables", "consumables"),
        ],
    },
    SectionSpec {
        heading: "Star Wars Universe",
        fields: &[
            count("Films Featured", "films", "film(s)"),
            count("Pilots", "pilots", "known pilot(s)"),
        ],
    },
];

fn card_fields(category: Category) -> &'static [FieldSpec] {
    match category {
        Category::Characters => CHARACTER_CARD,
        Category::Planets => PLANET_CARD,
        Category::Starships => STARSHIP_CARD,
    }
}

fn detail_sections(category: Category) -> &'static [SectionSpec] {
    match category {
        Category::Characters => CHARACTER_DETAIL,
        Category::Planets => PLANET_DETAIL,
        Category::Starships => STARSHIP_DETAIL,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

/// Summary card shown in the list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub lines: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: String,
    pub fields: Vec<Field>,
}

/// Read-only detail overlay for one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub category: Category,
    pub sections: Vec<DetailSection>,
}

impl DetailView {
    /// Look up a rendered value by label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|section| section.fields.iter())
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

pub fn project_card(item: &Item, category: Category) -> Card {
    Card {
        title: title_of(item),
        lines: card_fields(category)
            .iter()
            .map(|spec| project_field(item, spec))
            .collect(),
    }
}

pub fn project_detail(item: &Item, category: Category) -> DetailView {
    DetailView {
        title: title_of(item),
        category,
        sections: detail_sections(category)
            .iter()
            .map(|section| DetailSection {
                heading: section.heading.to_string(),
                fields: section
                    .fields
                    .iter()
                    .map(|spec| project_field(item, spec))
                    .collect(),
            })
            .collect(),
    }
}

fn title_of(item: &Item) -> String {
    match item.name() {
        "" => UNKNOWN.to_string(),
        name => name.to_string(),
    }
}

fn project_field(item: &Item, spec: &FieldSpec) -> Field {
    let raw = item.get(spec.key);
    let value = match spec.kind {
        FieldKind::Text => known_text(raw).unwrap_or_else(|| UNKNOWN.to_string()),
        FieldKind::Measure(suffix) => known_text(raw)
            .map(|value| format!("{value}{suffix}"))
            .unwrap_or_else(|| UNKNOWN.to_string()),
        FieldKind::Count(word) => {
            let n = raw.and_then(Value::as_array).map_or(0, Vec::len);
            format!("{n} {word}")
        }
    };
    Field {
        label: spec.label.to_string(),
        value,
    }
}

fn known_text(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Array(values) => values
            .iter()
            .filter_map(|v| known_text(Some(v)))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    };
    if text.is_empty() || text.eq_ignore_ascii_case("unknown") {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn luke() -> Item {
        Item::from(json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "films": ["f1", "f2", "f3", "f4"],
            "species": [],
            "vehicles": ["v1", "v2"],
            "starships": ["s1", "s2"]
        }))
    }

    #[test]
    fn test_character_card() {
        let card = project_card(&luke(), Category::Characters);
        assert_eq!(card.title, "Luke Skywalker");
        let labels: Vec<&str> = card.lines.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Height", "Mass", "Gender", "Year of birth"]);
        assert_eq!(card.lines[0].value, "172");
        assert_eq!(card.lines[3].value, "19BBY");
    }

    #[test]
    fn test_character_detail_units_and_counts() {
        let view = project_detail(&luke(), Category::Characters);
        assert_eq!(view.sections.len(), 3);
        assert_eq!(view.value_of("Height"), Some("172 cm"));
        assert_eq!(view.value_of("Mass"), Some("77 kg"));
        assert_eq!(view.value_of("Films Appeared"), Some("4 film(s)"));
        assert_eq!(view.value_of("Species"), Some("0 species"));
    }

    #[test]
    fn test_unknown_sentinel_for_missing_values() {
        let item = Item::from(json!({
            "name": "Yavin IV",
            "rotation_period": "unknown",
            "climate": "",
            "terrain": null
        }));
        let view = project_detail(&item, Category::Planets);
        assert_eq!(view.value_of("Rotation Period"), Some(UNKNOWN));
        assert_eq!(view.value_of("Climate"), Some(UNKNOWN));
        assert_eq!(view.value_of("Terrain"), Some(UNKNOWN));
        assert_eq!(view.value_of("Diameter"), Some(UNKNOWN));
        assert_eq!(view.value_of("Residents"), Some("0 known character(s)"));
    }

    #[test]
    fn test_planet_surface_water_percent() {
        let item = Item::from(json!({"name": "Tatooine", "surface_water": "1"}));
        let view = project_detail(&item, Category::Planets);
        assert_eq!(view.value_of("Surface Water"), Some("1%"));
    }

    #[test]
    fn test_starship_detail_sections() {
        let item = Item::from(json!({
            "name": "Death Star",
            "model": "DS-1 Orbital Battle Station",
            "cost_in_credits": "1000000000000",
            "max_atmosphering_speed": "n/a",
            "MGLT": "10",
            "pilots": []
        }));
        let view = project_detail(&item, Category::Starships);
        let headings: Vec<&str> = view.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec!["Ship Specifications", "Economics & Crew", "Performance", "Star Wars Universe"]
        );
        assert_eq!(view.value_of("Cost"), Some("1000000000000 credits"));
        assert_eq!(view.value_of("Max Speed"), Some("n/a km/h"));
        assert_eq!(view.value_of("MGLT"), Some("10"));
        assert_eq!(view.value_of("Class"), Some(UNKNOWN));
        assert_eq!(view.value_of("Pilots"), Some("0 known pilot(s)"));
    }

    #[test]
    fn test_numeric_values_are_rendered() {
        let item = Item::from(json!({"name": "X-wing", "length": 12.5}));
        let card = project_card(&item, Category::Starships);
        assert_eq!(card.lines[2].value, "12.5");
    }

    #[test]
    fn test_nameless_item_title() {
        let card = project_card(&Item::default(), Category::Planets);
        assert_eq!(card.title, UNKNOWN);
        assert!(card.lines.iter().all(|f| f.value == UNKNOWN));
    }
}
