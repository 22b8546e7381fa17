//! Label-to-prose dictionaries
//!
//! Maps every class label of the four thematic layers to wording that reads
//! well inside a sentence. Land cover has a second, shorter form used when
//! a land cover is named inside another layer's sentence.
//!
//! Labels are matched exactly; an unknown label is a malformed record.

use crate::error::{DescribeError, Result};
use crate::types::Layer;

// ============================================================================
// EMBEDDED DICTIONARIES
// ============================================================================

static LITHOLOGY_PROSE: &[(&str, &str)] = &[
    ("Acid Plutonics", "acid plutonics"),
    ("Acid Volcanic", "acid volcanics"),
    ("Basic Plutonics", "basic plutonics"),
    ("Basic Volcanics", "basic volcanics"),
    ("Carbonate Sedimentary Rock", "carbonate sedimentary rocks"),
    ("Evaporite", "areas of evaporite"),
    ("Ice and Glaciers", "areas of ice and glaciers"),
    ("Intermediate Plutonics", "intermediate plutonics"),
    ("Intermediate Volcanics", "intermediate volcanics"),
    ("Metamorphics", "metamorphics"),
    ("Mixed Sedimentary Rock", "mixed sedimentary rocks"),
    ("Non-defined", "areas of undefined lithology"),
    ("Pyroclastics", "pyroclastics"),
    ("Siliciclastic Sedimentary Rock", "non-carbonate sedimentary rocks"),
    ("Unconsolidated Sediment", "areas of unconsolidated sediment"),
    ("None", "areas of undefined lithology"),
];

static BIOCLIMATE_PROSE: &[(&str, &str)] = &[
    ("Arctic", "arctic"),
    ("Cold Dry", "cold and dry"),
    ("Cold Moist", "cold and moist"),
    ("Cold Semi-Dry", "cold and semi-dry"),
    ("Cold Very Dry", "cold and very dry"),
    ("Cold Very Wet", "cold and very wet"),
    ("Cold Wet", "cold and wet"),
    ("Cool Dry", "cool and dry"),
    ("Cool Moist", "cool and moist"),
    ("Cool Semi-Dry", "cool and semi-dry"),
    ("Cool Very Dry", "cool and very dry"),
    ("Cool Very Wet", "cool and very wet"),
    ("Cool Wet", "cool and wet"),
    ("Hot Dry", "hot and dry"),
    ("Hot Moist", "hot and moist"),
    ("Hot Semi-Dry", "hot and semi-dry"),
    ("Hot Very Dry", "hot and very dry"),
    ("Hot Very Wet", "hot and very wet"),
    ("Hot Wet", "hot and wet"),
    ("Very Cold Dry", "very cold and dry"),
    ("Very Cold Moist", "very cold and moist"),
    ("Very Cold Semi-Dry", "very cold and semi-dry"),
    ("Very Cold Very Dry", "very cold and very dry"),
    ("Very Cold Very Wet", "very cold and very wet"),
    ("Very Cold Wet", "very cold and wet"),
    ("Very Hot Dry", "very hot and dry"),
    ("Very Hot Moist", "very hot and moist"),
    ("Very Hot Semi-Dry", "very hot semi-dry"),
    ("Very Hot Very Dry", "very hot very dry"),
    ("Very Hot Very Wet", "very hot very wet"),
    ("Very Hot Wet", "very hot and wet"),
    ("Warm Dry", "warm and dry"),
    ("Warm Moist", "warm and moist"),
    ("Warm Semi-Dry", "warm and semi-dry"),
    ("Warm Very Dry", "warm and very dry"),
    ("Warm Very Wet", "warm and very wet"),
    ("Warm Wet", "warm and wet"),
    ("None", "undefined climate"),
];

static LANDCOVER_PROSE: &[(&str, &str)] = &[
    ("Cropland, rainfed", "rainfed cropland"),
    ("Cropland, rainfed - Herbaceous cover", "rainfed herbaceous cropland"),
    ("Cropland, rainfed - Tree or shrub cover", "rainfed tree or shrublike cropland"),
    ("Cropland irrigated or post-flooding", "irrigated or flooded cropland"),
    ("Mosaic cropland (>50%) / natural vegetation (Tree, shrub, herbaceous cover) (<50%)", "a mix of cropland with some natural vegetation"),
    ("Mosaic natural vegetation (Tree, shrub, herbaceous cover) (>50%) / cropland (<50%)", "a mix of natural vegetation with some cropland"),
    ("Tree cover, broadleaved, evergreen, closed to open (>15%)", "broadleaved evergreen forest"),
    ("Tree cover, broadleaved, deciduous, closed to open (>15%)", "broadleaved deciduous forest"),
    ("Tree cover, broadleaved, deciduous, closed (>40%)", "dense broadleaved deciduous forest"),
    ("Tree cover, broadleaved, deciduous, open (15-40%)", "sparse broadleaved deciduous forest"),
    ("Tree cover, needleleaved, evergreen, closed to open (>15%)", "needle-leaved evergreen forest"),
    ("Tree cover, needleleaved, evergreen, closed (>40%)", "dense needle-leaved evergreen forest"),
    ("Tree cover, needleleaved, evergreen, open (15-40%)", "sparse needle-leaved evergreen forest"),
    ("Tree cover, needleleaved, deciduous, closed to open (>15%)", "needle-leaved deciduous forest"),
    ("Tree cover, needleleaved, deciduous, closed (>40%)", "dense needle-leaved deciduous forest"),
    ("Tree cover, needleleaved, deciduous, open (15-40%)", "sparse needle-leaved deciduous forest"),
    ("Tree cover, mixed leaf type (broadleaved and needleleaved)", "mixed forest"),
    ("Mosaic Trees and shrub (>50%) / herbaceous cover (<50%)", "trees or shrubs with some herbaceous cover"),
    ("Mosaic herbaceous cover (>50%) / Trees and shrub (<50%)", "herbaceous cover with some trees or shrubs"),
    ("Shrubland", "shrubland"),
    ("Shrubland evergreen", "evergreen shrubland"),
    ("Shrubland deciduous", "deciduous shrubland"),
    ("Grassland", "grassland"),
    ("Lichens and mosses", "lichens and mosses"),
    ("Sparse vegetation (tree, shrub, herbaceous cover) (<15%)", "sparse vegetation"),
    ("Sparse shrub (<15%)", "sparse shrubland"),
    ("Sparse herbaceous cover (<15%)", "sparse herbaceous cover"),
    ("Tree cover, flooded, fresh or brakish water", "forest flooded by fresh or brackish water"),
    ("Tree cover, flooded, saline water", "forest flooded by salt water"),
    ("Shrub or herbaceous cover, flooded, fresh/saline/brakish water", "flooded herbaceous cover or shrubland"),
    ("Urban areas", "urban areas"),
    ("Bare areas", "bare ground"),
    ("Consolidated bare areas", "consolidated bare ground"),
    ("Unconsolidated bare areas", "unconsolidated bare ground"),
    ("Water bodies", "bodies of water"),
    ("Permanent snow and ice", "permanent ice and snow"),
    ("None", "undefined land cover"),
];

static LANDCOVER_SHORT_PROSE: &[(&str, &str)] = &[
    ("Cropland, rainfed", "cropland"),
    ("Cropland, rainfed - Herbaceous cover", "cropland"),
    ("Cropland, rainfed - Tree or shrub cover", "tree or shrub cropland"),
    ("Cropland irrigated or post-flooding", "cropland"),
    ("Mosaic cropland (>50%) / natural vegetation (Tree, shrub, herbaceous cover) (<50%)", "cropland and natural vegetation"),
    ("Mosaic natural vegetation (Tree, shrub, herbaceous cover) (>50%) / cropland (<50%)", "natural vegetation and cropland"),
    ("Tree cover, broadleaved, evergreen, closed to open (>15%)", "forest"),
    ("Tree cover, broadleaved, deciduous, closed to open (>15%)", "forest"),
    ("Tree cover, broadleaved, deciduous, closed (>40%)", "forest"),
    ("Tree cover, broadleaved, deciduous, open (15-40%)", "forest"),
    ("Tree cover, needleleaved, evergreen, closed to open (>15%)", "forest"),
    ("Tree cover, needleleaved, evergreen, closed (>40%)", "forest"),
    ("Tree cover, needleleaved, evergreen, open (15-40%)", "forest"),
    ("Tree cover, needleleaved, deciduous, closed to open (>15%)", "forest"),
    ("Tree cover, needleleaved, deciduous, closed (>40%)", "forest"),
    ("Tree cover, needleleaved, deciduous, open (15-40%)", "forest"),
    ("Tree cover, mixed leaf type (broadleaved and needleleaved)", "forest"),
    ("Mosaic Trees and shrub (>50%) / herbaceous cover (<50%)", "trees or shrubs and herbaceous cover"),
    ("Mosaic herbaceous cover (>50%) / Trees and shrub (<50%)", "herbaceous cover and trees or shrubs"),
    ("Shrubland", "shrubs"),
    ("Shrubland evergreen", "shrubs"),
    ("Shrubland deciduous", "shrubs"),
    ("Grassland", "grassland"),
    ("Lichens and mosses", "lichens and mosses"),
    ("Sparse vegetation (tree, shrub, herbaceous cover) (<15%)", "sparse vegetation"),
    ("Sparse shrub (<15%)", "sparse shrubs"),
    ("Sparse herbaceous cover (<15%)", "sparse cover"),
    ("Tree cover, flooded, fresh or brakish water", "flooded forest"),
    ("Tree cover, flooded, saline water", "flooded forest"),
    ("Shrub or herbaceous cover, flooded, fresh/saline/brakish water", "flooded herbaceous cover or shrubs"),
    ("Urban areas", "urban areas"),
    ("Bare areas", "bare ground"),
    ("Consolidated bare areas", "bare ground"),
    ("Unconsolidated bare areas", "bare ground"),
    ("Water bodies", "bodies of water"),
    ("Permanent snow and ice", "permanent ice and snow"),
    ("None", "undefined land cover"),
];

static LANDFORM_PROSE: &[(&str, &str)] = &[
    ("Flat or Nearly Flat Plains", "flat or nearly flat plains"),
    ("High Hills", "high hills"),
    ("High Mountains", "high mountains"),
    ("Irregular Plains with Low Hills", "irregular plains with low hills"),
    ("Irregular Plains with Moderate Relief", "irregular plains with moderate relief"),
    ("Low Mountains", "low mountains"),
    ("Moderate Hills", "moderate hills"),
    ("Scattered High Hills", "scattered high hills"),
    ("Scattered High Mountains", "scattered high mountains"),
    ("Scattered Low Mountains", "scattered low mountains"),
    ("Scattered Moderate Hills", "scattered moderate hills"),
    ("Smooth Plains with some local relief", "smooth plains with some local relief"),
    ("Surface Water", "bodies of surface water"),
    ("Tablelands with Considerable Relief", "tablelands with considerable relief"),
    ("Tablelands with High Relief", "tablelands with high relief"),
    ("Tablelands with Moderate Relief", "tablelands with moderate relief"),
    ("Tablelands with Very High Relief", "tablelands with very high relief"),
    ("None", "undefined landforms"),
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

fn table(layer: Layer) -> &'static [(&'static str, &'static str)] {
    match layer {
        Layer::Bioclimate => BIOCLIMATE_PROSE,
        Layer::Landform => LANDFORM_PROSE,
        Layer::Lithology => LITHOLOGY_PROSE,
        Layer::Landcover => LANDCOVER_PROSE,
    }
}

fn find(table: &'static [(&'static str, &'static str)], label: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, prose)| *prose)
}

/// Sentence wording of a class label.
///
/// # Examples
/// ```
/// use geo_describer_rust::narrative::utils::lookup_tables::prose;
/// use geo_describer_rust::Layer;
///
/// assert_eq!(prose(Layer::Bioclimate, "Warm Dry"), Some("warm and dry"));
/// assert_eq!(prose(Layer::Landform, "Surface Water"), Some("bodies of surface water"));
/// assert_eq!(prose(Layer::Lithology, "Granite"), None);
/// ```
pub fn prose(layer: Layer, label: &str) -> Option<&'static str> {
    find(table(layer), label)
}

/// Short land cover wording, e.g. "forest" for any tree cover class.
pub fn short_landcover(label: &str) -> Option<&'static str> {
    find(LANDCOVER_SHORT_PROSE, label)
}

/// Sentence wording of a class label, or a malformed-record error.
pub fn require_prose(layer: Layer, label: &str) -> Result<&'static str> {
    prose(layer, label)
        .ok_or_else(|| DescribeError::malformed(layer, label, "label has no dictionary entry"))
}

/// Short land cover wording, or a malformed-record error.
pub fn require_short_landcover(label: &str) -> Result<&'static str> {
    short_landcover(label).ok_or_else(|| {
        DescribeError::malformed(Layer::Landcover, label, "label has no short dictionary entry")
    })
}
