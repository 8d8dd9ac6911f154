//! Property table file loading.
//!
//! The CSV layout matches the tabulated refrigerant data this tool was built
//! around:
//!
//! ```text
//! Temp,p_vap (MPa),hf,hg (kJ/kg),vf (m3/kg),vg (m3/kg),muf (Pa-s),mug (Pa-s)
//! ```
//!
//! Columns are matched by their leading name token, so the parenthesised
//! unit suffix is optional and column order is free. JSON and YAML files hold
//! a list of `RawSaturationRow` values.

use crate::error::{FluidError, FluidResult};
use crate::saturation::{RawSaturationRow, TableUnits};
use crate::table::PropertyTable;
use ct_core::DegC;
use std::path::Path;

/// Supported table file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Json,
    Yaml,
}

impl TableFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> FluidResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(FluidError::UnsupportedFormat { extension: ext }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Temperature,
    Pressure,
    EnthalpyLiquid,
    EnthalpyVapor,
    VolumeLiquid,
    VolumeVapor,
    ViscosityLiquid,
    ViscosityVapor,
}

const COLUMNS: [Column; 8] = [
    Column::Temperature,
    Column::Pressure,
    Column::EnthalpyLiquid,
    Column::EnthalpyVapor,
    Column::VolumeLiquid,
    Column::VolumeVapor,
    Column::ViscosityLiquid,
    Column::ViscosityVapor,
];

const CSV_HEADER: &str = "Temp,p_vap (MPa),hf,hg (kJ/kg),vf (m3/kg),vg (m3/kg),muf (Pa-s),mug (Pa-s)";

impl Column {
    fn from_header(cell: &str) -> Option<Self> {
        let key = cell
            .split(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match key.as_str() {
            "temp" | "temperature" | "t" => Some(Self::Temperature),
            "p_vap" | "p" | "pressure" => Some(Self::Pressure),
            "hf" => Some(Self::EnthalpyLiquid),
            "hg" => Some(Self::EnthalpyVapor),
            "vf" => Some(Self::VolumeLiquid),
            "vg" => Some(Self::VolumeVapor),
            "muf" => Some(Self::ViscosityLiquid),
            "mug" => Some(Self::ViscosityVapor),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Temperature => "Temp",
            Self::Pressure => "p_vap",
            Self::EnthalpyLiquid => "hf",
            Self::EnthalpyVapor => "hg",
            Self::VolumeLiquid => "vf",
            Self::VolumeVapor => "vg",
            Self::ViscosityLiquid => "muf",
            Self::ViscosityVapor => "mug",
        }
    }
}

fn clean_cell(cell: &str) -> &str {
    cell.trim().trim_matches('"').trim()
}

fn field<'a>(cells: &[&'a str], pos: usize, column: Column, line: usize) -> FluidResult<&'a str> {
    cells.get(pos).copied().ok_or_else(|| FluidError::Parse {
        line,
        message: format!("missing value for '{}'", column.name()),
    })
}

fn parse_temperature(text: &str, line: usize) -> FluidResult<DegC> {
    let value: f64 = text.parse().map_err(|_| FluidError::Parse {
        line,
        message: format!("invalid temperature '{text}'"),
    })?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(FluidError::Parse {
            line,
            message: format!("temperature '{text}' is not a whole degree"),
        });
    }
    if value < DegC::MIN as f64 || value > DegC::MAX as f64 {
        return Err(FluidError::Parse {
            line,
            message: format!("temperature '{text}' out of range"),
        });
    }
    Ok(value as DegC)
}

/// Parse CSV text into raw rows.
///
/// Line numbers in errors are 1-based and count blank lines.
pub fn parse_csv(content: &str) -> FluidResult<Vec<RawSaturationRow>> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(FluidError::Parse {
        line: 1,
        message: "empty table".to_string(),
    })?;

    // Spreadsheet exports often lead with a byte-order mark
    let header = header.trim_start_matches('\u{feff}');
    let header_columns: Vec<Option<Column>> =
        header.split(',').map(|c| Column::from_header(clean_cell(c))).collect();

    let mut positions = [0usize; COLUMNS.len()];
    for (slot, column) in positions.iter_mut().zip(COLUMNS) {
        *slot = header_columns
            .iter()
            .position(|c| *c == Some(column))
            .ok_or_else(|| FluidError::Parse {
                line: header_line,
                message: format!("missing column '{}'", column.name()),
            })?;
    }

    let mut rows = Vec::new();
    for (line, text) in lines {
        let cells: Vec<&str> = text.split(',').map(clean_cell).collect();
        let number = |idx: usize| -> FluidResult<f64> {
            let raw = field(&cells, positions[idx], COLUMNS[idx], line)?;
            raw.parse::<f64>().map_err(|_| FluidError::Parse {
                line,
                message: format!("invalid {} value '{}'", COLUMNS[idx].name(), raw),
            })
        };

        rows.push(RawSaturationRow {
            temperature_c: parse_temperature(
                field(&cells, positions[0], Column::Temperature, line)?,
                line,
            )?,
            pressure_mpa: number(1)?,
            enthalpy_liquid: number(2)?,
            enthalpy_vapor_kj_kg: number(3)?,
            specific_volume_liquid: number(4)?,
            specific_volume_vapor: number(5)?,
            viscosity_liquid: number(6)?,
            viscosity_vapor: number(7)?,
        });
    }

    Ok(rows)
}

/// Render raw rows in the CSV layout read by `parse_csv`.
pub fn write_csv(rows: &[RawSaturationRow]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for r in rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            r.temperature_c,
            r.pressure_mpa,
            r.enthalpy_liquid,
            r.enthalpy_vapor_kj_kg,
            r.specific_volume_liquid,
            r.specific_volume_vapor,
            r.viscosity_liquid,
            r.viscosity_vapor
        ));
    }
    csv
}

/// Read raw rows from a CSV, JSON or YAML file.
pub fn load_rows(path: &Path) -> FluidResult<Vec<RawSaturationRow>> {
    let format = TableFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| FluidError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    match format {
        TableFormat::Csv => parse_csv(&content),
        TableFormat::Json => serde_json::from_str(&content).map_err(|e| FluidError::Serde {
            message: e.to_string(),
        }),
        TableFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| FluidError::Serde {
            message: e.to_string(),
        }),
    }
}

/// Load and convert a property table file.
pub fn load_table(path: &Path, units: TableUnits) -> FluidResult<PropertyTable> {
    let rows = load_rows(path)?;
    PropertyTable::from_raw_rows(&rows, units)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Temp,p_vap (MPa),hf,hg (kJ/kg),vf (m3/kg),vg (m3/kg),muf (Pa-s),mug (Pa-s)
18,1.3,140.0,440.0,0.00084,0.024,1.32e-05,9.4e-06
19,1.3525,145.0,445.0,0.00085,0.0245,1.335e-05,9.45e-06
";

    #[test]
    fn parses_original_layout() {
        let rows = parse_csv(SAMPLE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].temperature_c, 18);
        assert_eq!(rows[1].pressure_mpa, 1.3525);
        assert_eq!(rows[1].enthalpy_vapor_kj_kg, 445.0);
        assert_eq!(rows[0].viscosity_vapor, 9.4e-6);
    }

    #[test]
    fn column_order_and_suffixes_are_free() {
        let csv = "mug,muf,vg,vf,hg,hf,p_vap,Temp\n9e-6,1.2e-5,0.02,0.0008,400,100,0.5,10\n";
        let rows = parse_csv(csv).unwrap();
        assert_eq!(rows[0].temperature_c, 10);
        assert_eq!(rows[0].pressure_mpa, 0.5);
        assert_eq!(rows[0].viscosity_vapor, 9e-6);
    }

    #[test]
    fn accepts_float_formatted_whole_degrees() {
        let csv = format!("{CSV_HEADER}\n18.0,1.3,140,440,0.00084,0.024,1.3e-5,9.4e-6\n");
        assert_eq!(parse_csv(&csv).unwrap()[0].temperature_c, 18);
    }

    #[test]
    fn rejects_fractional_temperature() {
        let csv = format!("{CSV_HEADER}\n18.5,1.3,140,440,0.00084,0.024,1.3e-5,9.4e-6\n");
        let err = parse_csv(&csv).unwrap_err();
        assert!(matches!(err, FluidError::Parse { line: 2, .. }));
    }

    #[test]
    fn header_with_byte_order_mark() {
        let csv = format!("\u{feff}{SAMPLE}");
        let rows = parse_csv(&csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].temperature_c, 18);

        let csv = format!("\u{feff}{CSV_HEADER}\n40,2.4,280,580,0.00118,0.038,1.74e-5,1.08e-5\n");
        assert_eq!(parse_csv(&csv).unwrap()[0].temperature_c, 40);
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Temp,p_vap (MPa),hf,hg (kJ/kg),vf (m3/kg),vg (m3/kg),muf (Pa-s)\n";
        let err = parse_csv(csv).unwrap_err();
        assert!(err.to_string().contains("mug"));
    }

    #[test]
    fn bad_number_reports_line() {
        let csv = format!("{CSV_HEADER}\n\n18,abc,140,440,0.00084,0.024,1.3e-5,9.4e-6\n");
        let err = parse_csv(&csv).unwrap_err();
        assert!(matches!(err, FluidError::Parse { line: 3, .. }));
        assert!(err.to_string().contains("p_vap"));
    }

    #[test]
    fn short_row_is_reported() {
        let csv = format!("{CSV_HEADER}\n18,1.3,140\n");
        assert!(matches!(
            parse_csv(&csv).unwrap_err(),
            FluidError::Parse { line: 2, .. }
        ));
    }

    #[test]
    fn written_csv_parses_back() {
        let rows = parse_csv(SAMPLE).unwrap();
        let again = parse_csv(&write_csv(&rows)).unwrap();
        assert_eq!(rows, again);
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            TableFormat::from_path(Path::new("R410.CSV")).unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("r410.yml")).unwrap(),
            TableFormat::Yaml
        );
        assert!(TableFormat::from_path(Path::new("r410.xlsx")).is_err());
    }
}
