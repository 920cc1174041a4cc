//! The burger catalog
//!
//! Eight burgers, one per planet, in a fixed order. The carousel index
//! points into [`CATALOG`]; nothing is loaded at runtime.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Planet a burger is named after. Ids are kept from the brand's menu codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    #[strum(serialize = "neptun")]
    #[serde(rename = "neptun")]
    Neptune,
    #[strum(serialize = "uranus")]
    Uranus,
    #[strum(serialize = "saturn")]
    Saturn,
    #[strum(serialize = "jupiter")]
    Jupiter,
    #[strum(serialize = "erde")]
    #[serde(rename = "erde")]
    Earth,
    #[strum(serialize = "venus")]
    Venus,
    #[strum(serialize = "mars")]
    Mars,
    #[strum(serialize = "merkur")]
    #[serde(rename = "merkur")]
    Mercury,
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Burger {
    pub id: Planet,
    pub name: &'static str,
    pub tagline: &'static str,
}

/// Number of burgers in the catalog
pub const CATALOG_LEN: usize = 8;

/// Index highlighted when the experience mounts (Jupiter)
pub const DEFAULT_INDEX: usize = 3;

/// The fixed menu, in carousel order
pub const CATALOG: [Burger; CATALOG_LEN] = [
    Burger {
        id: Planet::Neptune,
        name: "Neptune",
        tagline: "The Mysterious Deep Blue",
    },
    Burger {
        id: Planet::Uranus,
        name: "Uranus",
        tagline: "Cool & Uniquely Tilted",
    },
    Burger {
        id: Planet::Saturn,
        name: "Saturn",
        tagline: "Ringed Perfection",
    },
    Burger {
        id: Planet::Jupiter,
        name: "Jupiter",
        tagline: "The Mighty Giant",
    },
    Burger {
        id: Planet::Earth,
        name: "Earth",
        tagline: "The Home Classic",
    },
    Burger {
        id: Planet::Venus,
        name: "Venus",
        tagline: "Hot & Spicy Inferno",
    },
    Burger {
        id: Planet::Mars,
        name: "Mars",
        tagline: "The Red Pioneer",
    },
    Burger {
        id: Planet::Mercury,
        name: "Mercury",
        tagline: "Small but Mighty",
    },
];

/// Look up a burger by its planet id (`"jupiter"`, `"erde"`, ...)
pub fn find(id: &str) -> Option<(usize, &'static Burger)> {
    let planet: Planet = id.parse().ok()?;
    CATALOG
        .iter()
        .enumerate()
        .find(|(_, burger)| burger.id == planet)
}

/// All planet ids in carousel order
pub fn planet_ids() -> Vec<String> {
    Planet::iter().map(|p| p.to_string()).collect()
}

/// Pretty JSON for a list of burgers
pub fn menu_json(burgers: &[&Burger]) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(burgers)?)
}
