//! Render card documents from local JSON.
//!
//! `fleetcard render devices -i devices.json`, etc. Lets operators
//! preview a card without standing up the server or an upstream API.

use std::io::Read;

use anyhow::{Context, Result};

use fleetcard_render::{
    Palette, UsageSummary, device_list_card, parse_device_list, summary_card,
};

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input))
    }
}

fn write_output(svg: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, svg).with_context(|| format!("writing {}", path))?,
        None => println!("{}", svg),
    }
    Ok(())
}

fn palette_for(theme: &str) -> Palette {
    Palette::select(theme == "dark")
}

/// Render the device list card from a JSON array.
pub fn devices(input: &str, theme: &str, output: Option<&str>) -> Result<()> {
    let raw = read_input(input)?;
    let payload: serde_json::Value =
        serde_json::from_str(&raw).context("input is not valid JSON")?;
    let devices = parse_device_list(&payload)?;
    let svg = device_list_card(&devices, &palette_for(theme));
    write_output(&svg, output)
}

/// Render the usage summary card from a JSON object.
pub fn summary(input: &str, theme: &str, output: Option<&str>) -> Result<()> {
    let raw = read_input(input)?;
    let payload: serde_json::Value =
        serde_json::from_str(&raw).context("input is not valid JSON")?;
    let summary = UsageSummary::from_json(&payload);
    let svg = summary_card(&summary, &palette_for(theme));
    write_output(&svg, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn renders_devices_to_output_file() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(input, r#"[{{"device": "A1", "running": true}}]"#).unwrap();

        let output = tempfile::NamedTempFile::new().unwrap();
        let out_path = output.path().to_str().unwrap().to_string();

        devices(input.path().to_str().unwrap(), "dark", Some(&out_path)).unwrap();

        let svg = std::fs::read_to_string(&out_path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("A1"));
        assert!(svg.contains("#0f172a"));
    }

    #[test]
    fn renders_summary_to_output_file() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(input, r#"{{"summary": "一切正常", "deviceName": "A1"}}"#).unwrap();

        let output = tempfile::NamedTempFile::new().unwrap();
        let out_path = output.path().to_str().unwrap().to_string();

        summary(input.path().to_str().unwrap(), "light", Some(&out_path)).unwrap();

        let svg = std::fs::read_to_string(&out_path).unwrap();
        assert!(svg.contains("AI 使用总结"));
        assert!(svg.contains("一切正常"));
    }

    #[test]
    fn non_array_devices_input_fails() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        write!(input, r#"{{"devices": []}}"#).unwrap();

        let err = devices(input.path().to_str().unwrap(), "light", None).unwrap_err();
        assert!(err.to_string().contains("期望数组格式"));
    }
}
