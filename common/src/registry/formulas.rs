//! Built-in formula schemas. Field ids are the keys the calculation service
//! reads from `inputs`.

use crate::model::field::FieldDescriptor as Field;
use crate::model::formula::FormulaCategory::{
    ChillUnits, Evapotranspiration, GrowingDegreeDays, VegetationIndex,
};
use crate::model::formula::FormulaSchema;

const T_MAX_DAILY: Field = Field::new("TM", "Max Daily Temp (TM)", "°C");
const T_MIN_DAILY: Field = Field::new("Tm", "Min Daily Temp (Tm)", "°C");
const T_BASE: Field = Field::new("Tb", "Base Temperature (Tb)", "°C");
const T_UPPER: Field = Field::new("TB", "Upper Threshold Temperature (TB)", "°C");
const T_HOURLY: Field = Field::new("T_current", "Hourly Temperature (T)", "°C");

const NIR: Field = Field::new("NIR", "Near-Infrared (NIR)", "Reflectance (0-1)");
const RED: Field = Field::new("Red", "Red Band", "Reflectance (0-1)");
const GREEN: Field = Field::new("Green", "Green Band", "Reflectance (0-1)");
const BLUE: Field = Field::new("Blue", "Blue Band", "Reflectance (0-1)");
const SOIL_SLOPE: Field = Field::new("a", "Soil Line Slope (a)", "e.g., 1.2");
const SOIL_INTERCEPT: Field = Field::new("b", "Soil Line Intercept (b)", "e.g., 0.04");

const R531: Field = Field::new("R531", "Reflectance at 531 nm (R531)", "Reflectance (0-1)");
const R550: Field = Field::new("R550", "Reflectance at 550 nm (R550)", "Reflectance (0-1)");
const R570: Field = Field::new("R570", "Reflectance at 570 nm (R570)", "Reflectance (0-1)");
const R670: Field = Field::new("R670", "Reflectance at 670 nm (R670)", "Reflectance (0-1)");
const R681: Field = Field::new("R681", "Reflectance at 681 nm (R681)", "Reflectance (0-1)");
const R700: Field = Field::new("R700", "Reflectance at 700 nm (R700)", "Reflectance (0-1)");
const R708: Field = Field::new("R708", "Reflectance at 708 nm (R708)", "Reflectance (0-1)");
const R720: Field = Field::new("R720", "Reflectance at 720 nm (R720)", "Reflectance (0-1)");
const R750: Field = Field::new("R750", "Reflectance at 750 nm (R750)", "Reflectance (0-1)");
const R753: Field = Field::new("R753", "Reflectance at 753 nm (R753)", "Reflectance (0-1)");
const R790: Field = Field::new("R790", "Reflectance at 790 nm (R790)", "Reflectance (0-1)");
const R800: Field = Field::new("R800", "Reflectance at 800 nm (R800)", "Reflectance (0-1)");

macro_rules! schema {
    ($id:literal, $name:literal, $category:expr, &[$($field:expr),* $(,)?] $(,)?) => {
        FormulaSchema {
            id: $id,
            name: $name,
            category: $category,
            fields: &[$($field),*],
        }
    };
}

pub(super) const ALL: &[FormulaSchema] = &[
    // Evapotranspiration
    schema!(
        "hargreaves",
        "Hargreaves",
        Evapotranspiration,
        &[
            Field::new("T_mean", "Mean Temperature (T_mean) [°C]", "e.g., 25"),
            Field::new("T_max", "Max Temperature (T_max) [°C]", "e.g., 30"),
            Field::new("T_min", "Min Temperature (T_min) [°C]", "e.g., 20"),
            Field::new("Ra", "Extraterrestrial Radiation (Ra)", "MJ m-2 day-1"),
        ],
    ),
    schema!(
        "blaney_criddle",
        "Blaney-Criddle",
        Evapotranspiration,
        &[
            Field::new("Ta", "Mean Air Temperature (Ta) [°F]", "e.g., 70"),
            Field::new("Kc", "Crop Coefficient (Kc)", "e.g., 0.85"),
        ],
    ),
    schema!(
        "fao56",
        "FAO-56 Penman-Monteith",
        Evapotranspiration,
        &[
            Field::new("Rn", "Net Radiation (Rn)", "MJ m-2 day-1"),
            Field::new("G", "Soil Heat Flux (G)", "MJ m-2 day-1"),
            Field::new("T_mean", "Mean Air Temperature (T) [°C]", "e.g., 25"),
            Field::new("u2", "Wind Speed at 2 m (u2)", "m/s"),
            Field::new("es_ea", "Vapour Pressure Deficit (es - ea)", "kPa"),
            Field::new("Delta", "Slope of Vapour Pressure Curve (Δ)", "kPa/°C"),
            Field::new("Gamma", "Psychrometric Constant (γ)", "kPa/°C"),
        ],
    ),
    schema!(
        "stephens_stewart",
        "Stephens-Stewart",
        Evapotranspiration,
        &[
            Field::new("Ta", "Mean Air Temperature (Ta) [°F]", "e.g., 70"),
            Field::new("Rl", "Solar Radiation (Rl)", "Langleys/day"),
        ],
    ),
    schema!(
        "grassi",
        "Grassi",
        Evapotranspiration,
        &[
            Field::new("Ta", "Mean Air Temperature (Ta) [°F]", "e.g., 70"),
            Field::new("Rl", "Solar Radiation (Rl)", "Langleys/day"),
        ],
    ),
    schema!(
        "linarce",
        "Linacre",
        Evapotranspiration,
        &[
            Field::new("Ta", "Mean Air Temperature (Ta) [°C]", "e.g., 25"),
            Field::new("Td", "Mean Dew Point (Td) [°C]", "e.g., 12"),
            Field::new("z", "Elevation (z)", "m"),
            Field::new("lat", "Latitude (lat)", "degrees"),
        ],
    ),
    // Growing degree days
    schema!(
        "gdd_arnold",
        "GDD - Arnold",
        GrowingDegreeDays,
        &[T_MAX_DAILY, T_MIN_DAILY, T_BASE],
    ),
    schema!(
        "gdd_villa_nova",
        "GDD - Villa Nova",
        GrowingDegreeDays,
        &[T_MAX_DAILY, T_MIN_DAILY, T_BASE],
    ),
    schema!(
        "gdd_ometto",
        "GDD - Ometto",
        GrowingDegreeDays,
        &[T_MAX_DAILY, T_MIN_DAILY, T_BASE, T_UPPER],
    ),
    schema!(
        "gdd_snyder",
        "GDD - Snyder (Sine)",
        GrowingDegreeDays,
        &[T_MAX_DAILY, T_MIN_DAILY, T_BASE, T_UPPER],
    ),
    // Chill units
    schema!("chill_utah", "Utah Model", ChillUnits, &[T_HOURLY]),
    schema!("chill_nc", "North Carolina Model", ChillUnits, &[T_HOURLY]),
    // Vegetation indices
    schema!("ndvi", "NDVI", VegetationIndex, &[NIR, RED]),
    schema!("gndvi", "GNDVI", VegetationIndex, &[NIR, GREEN]),
    schema!("pri", "PRI", VegetationIndex, &[R531, R570]),
    schema!("ndre", "NDRE", VegetationIndex, &[R790, R720]),
    schema!(
        "ccci",
        "CCCI",
        VegetationIndex,
        &[
            Field::new("NDRE", "Measured NDRE", "Index"),
            Field::new("NDRE_min", "Minimum NDRE (NDRE_min)", "Index"),
            Field::new("NDRE_max", "Maximum NDRE (NDRE_max)", "Index"),
        ],
    ),
    schema!("rvi", "RVI", VegetationIndex, &[NIR, RED]),
    schema!("evi", "EVI", VegetationIndex, &[NIR, RED, BLUE]),
    schema!("evi2", "EVI2", VegetationIndex, &[NIR, RED]),
    schema!("varigreen", "VARI green", VegetationIndex, &[GREEN, RED, BLUE]),
    schema!("vari700", "VARI 700", VegetationIndex, &[R700, RED, BLUE]),
    schema!("tvi", "TVI", VegetationIndex, &[R750, R550, R670]),
    schema!("mtvi1", "MTVI1", VegetationIndex, &[R800, R550, R670]),
    schema!("mtvi2", "MTVI2", VegetationIndex, &[R800, R550, R670]),
    schema!("mtci", "MTCI", VegetationIndex, &[R753, R708, R681]),
    schema!("car", "CAR", VegetationIndex, &[R700, R670, R550]),
    schema!("cari", "CARI", VegetationIndex, &[R700, R670, R550]),
    schema!("tcari", "TCARI", VegetationIndex, &[R700, R670, R550]),
    schema!("mcari", "MCARI", VegetationIndex, &[R700, R670, R550]),
    schema!("mcari1", "MCARI1", VegetationIndex, &[R800, R670, R550]),
    schema!("mcari2", "MCARI2", VegetationIndex, &[R800, R670, R550]),
    schema!("wdvi", "WDVI", VegetationIndex, &[NIR, RED, SOIL_SLOPE]),
    schema!(
        "pvi",
        "PVI",
        VegetationIndex,
        &[NIR, RED, SOIL_SLOPE, SOIL_INTERCEPT],
    ),
    schema!(
        "savi",
        "SAVI",
        VegetationIndex,
        &[
            Field::new("NIR", "Near-Infrared (NIR)", "Reflectance"),
            Field::new("Red", "Red Band", "Reflectance"),
            Field::new("L", "Soil Adjustment Factor (L)", "Usually 0.5"),
        ],
    ),
    schema!(
        "tsavi",
        "TSAVI",
        VegetationIndex,
        &[R800, R670, SOIL_SLOPE, SOIL_INTERCEPT],
    ),
    schema!("osavi", "OSAVI", VegetationIndex, &[NIR, RED]),
    schema!("msavi", "MSAVI", VegetationIndex, &[NIR, RED]),
    schema!("msavi2", "MSAVI2", VegetationIndex, &[NIR, RED]),
    schema!("sarvi", "SARVI", VegetationIndex, &[R800, RED, BLUE]),
];
