// src/config/regions.rs
//! Region names as they appear in the `<h2>` headers of the listing page.

/// Regions accepted on the command line. The listing page is matched on the
/// exact spelling below.
pub const VALID_REGIONS: &[&str] = &[
    "Auvergne-Rhône-Alpes",
    "Bourgogne-Franche-Comté",
    "Bretagne",
    "Centre-Val de Loire",
    "Corse",
    "Grand Est",
    "Hauts-de-France",
    "Ile-de-France",
    "Normandie",
    "Nouvelle-Aquitaine",
    "Occitanie",
    "Pays de la Loire",
    "Provence-Alpes-Côte d'Azur",
    "Réunion",
];

/// Used when no `--region` is given.
pub const DEFAULT_REGIONS: &[&str] = &["Ile-de-France", "Provence-Alpes-Côte d'Azur"];

/// Map user input onto the canonical spelling: surrounding whitespace is
/// ignored and the comparison is case-insensitive.
pub fn normalize_region(input: &str) -> Option<&'static str> {
    let wanted = input.trim().to_lowercase();
    VALID_REGIONS
        .iter()
        .copied()
        .find(|r| r.to_lowercase() == wanted)
}
