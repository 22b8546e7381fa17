//! Polygon naming
//!
//! Resolves the proper name of a polygon from its attribute fields and the
//! generic noun used to refer back to it ("the forest", "the mountains").
//!
//! The generic noun comes from a static table of name patterns matched
//! against the lowercased name. Patterns with surrounding spaces only match
//! whole words; the name is padded with a space on both sides before matching
//! so that a word at either end of the name still counts.

use serde_json::{Map, Value};

/// Name used when no attribute carries one.
pub const DEFAULT_NAME: &str = "study area";

/// Attribute-name tokens that mark a name field (compared uppercase).
static NAME_FIELD_TOKENS: &[&str] = &["NAM", "NOM", "NAAM"];

/// One row of the generic noun table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameForm {
    pub pattern: &'static str,
    pub noun: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
}

const DEFAULT_FORM: NameForm = NameForm {
    pattern: "",
    noun: "study area",
    singular: "study area is",
    plural: "study area are",
};

// ============================================================================
// Generic noun table
// ============================================================================

// Specific patterns precede the general ones they contain; first match wins.

static NAME_FORMS: &[NameForm] = &[
    NameForm { pattern: "recreation area", noun: "recreation area", singular: "recreation area is", plural: "recreation area are" },
    NameForm { pattern: "conservation area", noun: "conservation area", singular: "conservation area is", plural: "conservation area are" },
    NameForm { pattern: "preserves", noun: "preserves", singular: "preserves are", plural: "preserves are" },
    NameForm { pattern: "preserve", noun: "preserve", singular: "preserve is", plural: "preserve are" },
    NameForm { pattern: "reserves", noun: "reserves", singular: "reserves are", plural: "reserves are" },
    NameForm { pattern: "reserve", noun: "reserve", singular: "reserve is", plural: "reserve are" },
    NameForm { pattern: "reservations", noun: "reservations", singular: "reservations are", plural: "reservations are" },
    NameForm { pattern: "watershed", noun: "watershed", singular: "watershed is", plural: "watershed are" },
    NameForm { pattern: "parks", noun: "parks", singular: "parks are", plural: "parks are" },
    NameForm { pattern: "park", noun: "park", singular: "park is", plural: "park are" },
    NameForm { pattern: "reservation", noun: "reservation", singular: "reservation is", plural: "reservation are" },
    NameForm { pattern: "anbaugebiet", noun: "anbaugebiet", singular: "anbaugebiet is", plural: "anbaugebiet are" },
    NameForm { pattern: " market", noun: "market", singular: "market is", plural: "market are" },
    NameForm { pattern: "ravine", noun: "ravine", singular: "ravine is", plural: "ravine are" },
    NameForm { pattern: "gorge", noun: "gorge", singular: "gorge is", plural: "gorge are" },
    NameForm { pattern: " dome", noun: "dome", singular: "dome is", plural: "dome are" },
    NameForm { pattern: "parque", noun: "parque", singular: "parque is", plural: "parque are" },
    NameForm { pattern: "pampa", noun: "pampa", singular: "pampa is", plural: "pampa are" },
    NameForm { pattern: "bosque", noun: "bosque", singular: "bosque is", plural: "bosque are" },
    NameForm { pattern: "cordillera", noun: "cordillera", singular: "cordillera are", plural: "cordillera are" },
    NameForm { pattern: "county", noun: "county", singular: "county is", plural: "county are" },
    NameForm { pattern: "sierra", noun: "sierra", singular: "sierra are", plural: "sierra are" },
    NameForm { pattern: "serra", noun: "serra", singular: "serra are", plural: "serra are" },
    NameForm { pattern: "barrens", noun: "barrens", singular: "barrens are", plural: "barrens are" },
    NameForm { pattern: "sanctuary", noun: "sanctuary", singular: "sanctuary is", plural: "sanctuary are" },
    NameForm { pattern: "corridor", noun: "corridor", singular: "corridor is", plural: "corridor are" },
    NameForm { pattern: "easement", noun: "easement", singular: "easement is", plural: "easement are" },
    NameForm { pattern: "jungles", noun: "jungles", singular: "jungles are", plural: "jungles are" },
    NameForm { pattern: "jungle", noun: "jungle", singular: "jungle is", plural: "jungle are" },
    NameForm { pattern: "oases", noun: "oases", singular: "oases are", plural: "oases are" },
    NameForm { pattern: "oasis", noun: "oasis", singular: "oasis is", plural: "oasis are" },
    NameForm { pattern: "battlefield", noun: "battlefield", singular: "battlefield is", plural: "battlefield are" },
    NameForm { pattern: "exclave", noun: "exclave", singular: "exclave is", plural: "exclave are" },
    NameForm { pattern: "enclave", noun: "enclave", singular: "enclave is", plural: "enclave are" },
    NameForm { pattern: "refuge", noun: "refuge", singular: "refuge is", plural: "refuge are" },
    NameForm { pattern: "territories", noun: "territories", singular: "territories are", plural: "territories are" },
    NameForm { pattern: "prefecture", noun: "prefecture", singular: "prefecture is", plural: "prefecture are" },
    NameForm { pattern: "highlands", noun: "highlands", singular: "highlands are", plural: "highlands are" },
    NameForm { pattern: "highland", noun: "highland", singular: "highland is", plural: "highland are" },
    NameForm { pattern: "republic", noun: "republic", singular: "republic is", plural: "republic are" },
    NameForm { pattern: "depression", noun: "depression", singular: "depression is", plural: "depression are" },
    NameForm { pattern: "complex", noun: "complex", singular: "complex is", plural: "complex are" },
    NameForm { pattern: "group", noun: "group", singular: "group is", plural: "group are" },
    NameForm { pattern: "plantations", noun: "plantations", singular: "plantations are", plural: "plantations are" },
    NameForm { pattern: "plantation", noun: "plantation", singular: "plantation is", plural: "plantation are" },
    NameForm { pattern: "farms", noun: "farms", singular: "farms are", plural: "farms are" },
    NameForm { pattern: "farm", noun: "farm", singular: "farm is", plural: "farm are" },
    NameForm { pattern: "territory", noun: "territory", singular: "territory is", plural: "territory are" },
    NameForm { pattern: " mts", noun: "mountains", singular: "mountains are", plural: "mountains are" },
    NameForm { pattern: "reservoir", noun: "reservoir", singular: "reservoir is", plural: "reservoir are" },
    NameForm { pattern: "wilderness", noun: "wilderness", singular: "wilderness is", plural: "wilderness are" },
    NameForm { pattern: "state", noun: "state", singular: "state is", plural: "state are" },
    NameForm { pattern: " downs", noun: "downs", singular: "downs are", plural: "downs are" },
    NameForm { pattern: "tableland", noun: "tableland", singular: "tableland is", plural: "tableland are" },
    NameForm { pattern: "zone", noun: "zone", singular: "zone is", plural: "zone are" },
    NameForm { pattern: "pass", noun: "pass", singular: "pass is", plural: "pass are" },
    NameForm { pattern: " camp ", noun: "camp", singular: "camp is", plural: "camp are" },
    NameForm { pattern: "constituency", noun: "constituency", singular: "constituency is", plural: "constituency are" },
    NameForm { pattern: "riding", noun: "riding", singular: "riding is", plural: "riding are" },
    NameForm { pattern: " ridge ", noun: "ridge", singular: "ridge is", plural: "ridge are" },
    NameForm { pattern: "flood plain", noun: "flood plain", singular: "flood plain is", plural: "flood plain are" },
    NameForm { pattern: "plateau", noun: "plateau", singular: "plateau is", plural: "plateau are" },
    NameForm { pattern: " base ", noun: "base", singular: "base is", plural: "base are" },
    NameForm { pattern: "lagoon", noun: "lagoon", singular: "lagoon is", plural: "lagoon are" },
    NameForm { pattern: "volcano", noun: "volcano", singular: "volcano is", plural: "volcano are" },
    NameForm { pattern: " alps", noun: "alps", singular: "alps are", plural: "alps are" },
    NameForm { pattern: "peninsula", noun: "peninsula", singular: "peninsula is", plural: "peninsula are" },
    NameForm { pattern: " lake ", noun: "lake", singular: "lake is", plural: "lake are" },
    NameForm { pattern: "desert", noun: "desert", singular: "desert is", plural: "desert are" },
    NameForm { pattern: "reef", noun: "reef", singular: "reef is", plural: "reef are" },
    NameForm { pattern: "delta", noun: "delta", singular: "delta is", plural: "delta are" },
    NameForm { pattern: " erg ", noun: "erg", singular: "erg is", plural: "erg are" },
    NameForm { pattern: "district", noun: "district", singular: "district is", plural: "district are" },
    NameForm { pattern: "region", noun: "region", singular: "region is", plural: "region are" },
    NameForm { pattern: "metropolitan area", noun: "metropolitan area", singular: "metropolitan area is", plural: "metropolitan area are" },
    NameForm { pattern: "village", noun: "village", singular: "village is", plural: "village are" },
    NameForm { pattern: " town ", noun: "town", singular: "town is", plural: "town are" },
    NameForm { pattern: " city ", noun: "city", singular: "city is", plural: "city are" },
    NameForm { pattern: "block", noun: "block", singular: "block is", plural: "block are" },
    NameForm { pattern: "tract", noun: "tract", singular: "tract is", plural: "tract are" },
    NameForm { pattern: " woods ", noun: "woods", singular: "woods are", plural: "woods are" },
    NameForm { pattern: " wood ", noun: "wood", singular: "wood is", plural: "wood are" },
    NameForm { pattern: "valleys", noun: "valleys", singular: "valleys are", plural: "valleys are" },
    NameForm { pattern: "valley", noun: "valley", singular: "valley is", plural: "valley are" },
    NameForm { pattern: "swamp", noun: "swamp", singular: "swamp is", plural: "swamp are" },
    NameForm { pattern: " slope", noun: "slope", singular: "slope is", plural: "slope are" },
    NameForm { pattern: "harbour", noun: "harbour", singular: "harbour is", plural: "harbour are" },
    NameForm { pattern: "plains", noun: "plains", singular: "plains are", plural: "plains are" },
    NameForm { pattern: "plain ", noun: "plain", singular: "plain is", plural: "plain are" },
    NameForm { pattern: "ithsmus", noun: "ithsmus", singular: "ithsmus is", plural: "ithsmus are" },
    NameForm { pattern: "islands", noun: "islands", singular: "islands are", plural: "islands are" },
    NameForm { pattern: "island", noun: "island", singular: "island is", plural: "island are" },
    NameForm { pattern: "glacier", noun: "glacier", singular: "glacier is", plural: "glacier are" },
    NameForm { pattern: " gap ", noun: "gap", singular: "gap is", plural: "gap are" },
    NameForm { pattern: "harbor", noun: "harbor", singular: "harbor is", plural: "harbor are" },
    NameForm { pattern: "crater", noun: "crater", singular: "crater is", plural: "crater are" },
    NameForm { pattern: " cape ", noun: "cape", singular: "cape is", plural: "cape are" },
    NameForm { pattern: " beach ", noun: "beach", singular: "beach is", plural: "beach are" },
    NameForm { pattern: "basin", noun: "basin", singular: "basin is", plural: "basin are" },
    NameForm { pattern: "canton", noun: "canton", singular: "canton is", plural: "canton are" },
    NameForm { pattern: "property", noun: "property", singular: "property is", plural: "property are" },
    NameForm { pattern: "monument", noun: "monument", singular: "monument is", plural: "monument are" },
    NameForm { pattern: "forest", noun: "forest", singular: "forest is", plural: "forest are" },
    NameForm { pattern: "krays", noun: "krays", singular: "krays are", plural: "krays are" },
    NameForm { pattern: "kray", noun: "kray", singular: "kray is", plural: "kray are" },
    NameForm { pattern: "oblast", noun: "oblast", singular: "oblast is", plural: "oblast are" },
    NameForm { pattern: " fort ", noun: "fort", singular: "fort is", plural: "fort are" },
    NameForm { pattern: " field ", noun: "field", singular: "field is", plural: "field are" },
    NameForm { pattern: " plain ", noun: "plain", singular: "plain is", plural: "plain are" },
    NameForm { pattern: " range ", noun: "range", singular: "range is", plural: "range are" },
    NameForm { pattern: "viewshed", noun: "viewshed", singular: "viewshed is", plural: "viewshed are" },
    NameForm { pattern: "canyon", noun: "canyon", singular: "canyon is", plural: "canyon are" },
    NameForm { pattern: "grasslands", noun: "grasslands", singular: "grasslands are", plural: "grasslands are" },
    NameForm { pattern: "grassland", noun: "grassland", singular: "grassland is", plural: "grassland are" },
    NameForm { pattern: "icefield", noun: "icefield", singular: "icefield is", plural: "icefield are" },
    NameForm { pattern: "heath", noun: "heath", singular: "heath is", plural: "heath are" },
    NameForm { pattern: "spring", noun: "spring", singular: "spring is", plural: "spring are" },
    NameForm { pattern: "veldt", noun: "veldt", singular: "veldt is", plural: "veldt are" },
    NameForm { pattern: " veld", noun: "veld", singular: "veld is", plural: "veld are" },
    NameForm { pattern: "moors", noun: "moors", singular: "moors are", plural: "moors are" },
    NameForm { pattern: " moor ", noun: "moor", singular: "moor is", plural: "moor are" },
    NameForm { pattern: " ports ", noun: "ports", singular: "ports are", plural: "ports are" },
    NameForm { pattern: " port ", noun: "port", singular: "port is", plural: "port are" },
    NameForm { pattern: " flats ", noun: "flats", singular: "flats are", plural: "flats are" },
    NameForm { pattern: " flat ", noun: "flat", singular: "flat is", plural: "flat are" },
    NameForm { pattern: "marshes", noun: "marshes", singular: "marshes are", plural: "marshes are" },
    NameForm { pattern: "marsh", noun: "marsh", singular: "marsh is", plural: "marsh are" },
    NameForm { pattern: "municipalities", noun: "municipalities", singular: "municipalities are", plural: "municipalities are" },
    NameForm { pattern: "municipality", noun: "municipality", singular: "municipality is", plural: "municipality are" },
    NameForm { pattern: "provinces", noun: "provinces", singular: "provinces are", plural: "provinces are" },
    NameForm { pattern: "province", noun: "province", singular: "province is", plural: "province are" },
    NameForm { pattern: " quarter", noun: "quarter", singular: "quarter is", plural: "quarter are" },
    NameForm { pattern: " gardens ", noun: "gardens", singular: "gardens are", plural: "gardens are" },
    NameForm { pattern: " garden ", noun: "garden", singular: "garden is", plural: "garden are" },
    NameForm { pattern: " greens ", noun: "greens", singular: "greens is", plural: "greens are" },
    NameForm { pattern: " green ", noun: "green", singular: "green is", plural: "green are" },
    NameForm { pattern: " site ", noun: "site", singular: "site is", plural: "site are" },
    NameForm { pattern: "polders", noun: "polders", singular: "polders are", plural: "polders are" },
    NameForm { pattern: " hills ", noun: "hills", singular: "hills are", plural: "hills are" },
    NameForm { pattern: " hill ", noun: "hill", singular: "hill is", plural: "hill are" },
    NameForm { pattern: "polder", noun: "polder", singular: "polder is", plural: "polder are" },
    NameForm { pattern: "neighborhood", noun: "neighborhood", singular: "neighborhood is", plural: "neighborhood are" },
    NameForm { pattern: "habitat", noun: "habitat", singular: "habitat is", plural: "habitat are" },
    NameForm { pattern: "mountains", noun: "mountains", singular: "mountains are", plural: "mountains are" },
    NameForm { pattern: "mountain", noun: "mountain", singular: "mountain is", plural: "mountain are" },
    NameForm { pattern: " mount ", noun: "mountain", singular: "mountain is", plural: "mountain are" },
    NameForm { pattern: " lands", noun: "lands", singular: "lands are", plural: "lands are" },
    NameForm { pattern: " land", noun: "land", singular: "land is", plural: "land are" },
    NameForm { pattern: "study area", noun: "study area", singular: "study area is", plural: "study area are" },
    NameForm { pattern: " area ", noun: "area", singular: "area is", plural: "area are" },
];

/// Resolved name of a polygon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolygonName {
    /// Proper name as written in the attributes.
    pub proper: String,
    /// Generic noun, e.g. "forest".
    pub noun: &'static str,
    /// Noun with singular verb, e.g. "forest is".
    pub singular: &'static str,
    /// Noun with plural verb, e.g. "forest are".
    pub plural: &'static str,
    /// "" for capitalized proper names, otherwise "the ".
    pub article: &'static str,
}

impl PolygonName {
    /// Build a name from a proper name, looking up its generic noun.
    pub fn new(proper: impl Into<String>) -> Self {
        let proper = proper.into();
        let form = generic_form(&proper);
        let article = match proper.chars().next() {
            Some(c) if c.is_uppercase() => "",
            _ => "the ",
        };
        Self {
            proper,
            noun: form.noun,
            singular: form.singular,
            plural: form.plural,
            article,
        }
    }

    /// Article plus proper name: "Sherwood Forest", "the study area".
    pub fn subject(&self) -> String {
        format!("{}{}", self.article, self.proper)
    }

    /// "the " plus the generic noun: "the forest".
    pub fn short_subject(&self) -> String {
        format!("the {}", self.noun)
    }
}

impl Default for PolygonName {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

/// Generic noun row for a proper name.
pub fn generic_form(name: &str) -> NameForm {
    let padded = format!(" {} ", name.to_lowercase());
    NAME_FORMS
        .iter()
        .find(|form| padded.contains(form.pattern))
        .copied()
        .unwrap_or(DEFAULT_FORM)
}

fn is_name_field(field: &str) -> bool {
    let upper = field.to_uppercase();
    NAME_FIELD_TOKENS.iter().any(|token| upper.contains(token))
}

/// Resolve the polygon name from attribute fields.
///
/// The first name field (in attribute order) with a non-empty string value
/// wins. Never fails: without such a field the name is "study area".
pub fn resolve_name(attributes: &Map<String, Value>) -> PolygonName {
    attributes
        .iter()
        .filter(|(field, _)| is_name_field(field))
        .find_map(|(_, value)| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        })
        .map(PolygonName::new)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_sherwood_forest() {
        let name = PolygonName::new("Sherwood Forest");
        assert_eq!(name.noun, "forest");
        assert_eq!(name.singular, "forest is");
        assert_eq!(name.article, "");
        assert_eq!(name.subject(), "Sherwood Forest");
        assert_eq!(name.short_subject(), "the forest");
    }

    #[test]
    fn test_default_name() {
        let name = resolve_name(&Map::new());
        assert_eq!(name.proper, "study area");
        assert_eq!(name.noun, "study area");
        assert_eq!(name.article, "the ");
        assert_eq!(name.subject(), "the study area");
    }

    #[test]
    fn test_name_field_tokens() {
        let name = resolve_name(&attrs(json!({"OBJECTID": 3, "Nom_Zone": "Massif Central"})));
        assert_eq!(name.proper, "Massif Central");
        let name = resolve_name(&attrs(json!({"gebiedsnaam": "Veluwe"})));
        assert_eq!(name.proper, "Veluwe");
    }

    #[test]
    fn test_empty_name_field_skipped() {
        let name = resolve_name(&attrs(json!({"NAME": "  ", "NAME_EN": "Black Hills"})));
        assert_eq!(name.proper, "Black Hills");
        assert_eq!(name.article, "");
    }

    #[test]
    fn test_lowercase_name_takes_article() {
        let name = PolygonName::new("upper river basin");
        assert_eq!(name.article, "the ");
        assert_eq!(name.subject(), "the upper river basin");
    }

    #[test]
    fn test_word_pattern_matches_at_start() {
        let form = generic_form("Mount Hood");
        assert_eq!(form.noun, "mountain");
    }

    #[test]
    fn test_specific_pattern_wins() {
        assert_eq!(generic_form("Rocky Mountains").noun, "mountains");
        assert_eq!(generic_form("Black Hills").singular, "hills are");
        assert_eq!(generic_form("Clear Creek Conservation Area").noun, "conservation area");
        assert_eq!(generic_form("Veluwe").noun, "study area");
    }
}
