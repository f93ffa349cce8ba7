//! Test data and predefined scenarios
//!
//! A small SWAPI-shaped catalog: three pages of people, two of planets and a
//! single page of starships, with a few fully populated records for the
//! detail panels.

#![allow(dead_code)]

use super::server::{Catalog, FixtureServer};
use serde_json::{json, Value};

fn named(name: &str) -> Value {
    json!({ "name": name })
}

pub fn luke() -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "films": ["https://swapi.dev/api/films/1/", "https://swapi.dev/api/films/2/"],
        "vehicles": [],
        "starships": ["https://swapi.dev/api/starships/12/"],
        "species": []
    })
}

pub fn tatooine() -> Value {
    json!({
        "name": "Tatooine",
        "rotation_period": "23",
        "orbital_period": "304",
        "diameter": "10465",
        "climate": "arid",
        "gravity": "1 standard",
        "terrain": "desert",
        "surface_water": "1",
        "population": "200000",
        "residents": ["https://swapi.dev/api/people/1/"],
        "films": ["https://swapi.dev/api/films/1/"]
    })
}

pub fn death_star() -> Value {
    json!({
        "name": "Death Star",
        "model": "DS-1 Orbital Battle Station",
        "manufacturer": "Imperial Department of Military Research",
        "cost_in_credits": "1000000000000",
        "length": "120000",
        "max_atmosphering_speed": "n/a",
        "crew": "342,953",
        "passengers": "843,342",
        "cargo_capacity": "1000000000000",
        "consumables": "3 years",
        "hyperdrive_rating": "4.0",
        "MGLT": "10",
        "starship_class": "Deep Space Mobile Battlestation",
        "pilots": [],
        "films": ["https://swapi.dev/api/films/1/"]
    })
}

/// Catalog used by most scenarios
pub fn swapi_catalog() -> Catalog {
    Catalog::default()
        .with_pages(
            "people",
            vec![
                vec![luke(), named("C-3PO"), named("R2-D2")],
                vec![named("Darth Vader"), named("Leia Organa"), named("Owen Lars")],
                vec![named("Anakin Skywalker"), named("Shmi Skywalker")],
            ],
        )
        .with_pages(
            "planets",
            vec![vec![tatooine(), named("Alderaan")], vec![named("Hoth")]],
        )
        .with_pages("starships", vec![vec![death_star(), named("X-wing")]])
}

pub fn start_swapi() -> anyhow::Result<FixtureServer> {
    FixtureServer::start(swapi_catalog())
}
