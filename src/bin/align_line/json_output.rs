use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use oriflamms_align::UnitAlignment;

pub fn write_units(path: Option<&Path>, units: &[UnitAlignment]) -> Result<(), String> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|err| {
                    format!(
                        "Failed to create output directory '{}': {err}",
                        parent.display()
                    )
                })?;
            }
            let mut file = File::create(path).map_err(|err| {
                format!("Failed to create output file '{}': {err}", path.display())
            })?;
            write_json(&mut file, units)
                .map_err(|err| format!("Failed to write '{}': {err}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_json(&mut lock, units).map_err(|err| format!("Failed to write stdout: {err}"))
        }
    }
}

fn write_json(out: &mut impl Write, units: &[UnitAlignment]) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut *out, units).map_err(|err| err.to_string())?;
    out.write_all(b"\n").map_err(|err| err.to_string())
}
