pub mod table {
    //! Minimal ASCII table rendering for the `stats` command.

    pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
        let widths = column_widths(headers, rows);
        let rule = separator(&widths);
        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format_row(
            &headers.iter().map(|h| (*h).to_string()).collect::<Vec<_>>(),
            &widths,
        ));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        for row in rows {
            out.push_str(&format_row(row, &widths));
            out.push('\n');
        }
        out.push_str(&rule);
        out
    }

    fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in rows {
            for (i, width) in widths.iter_mut().enumerate() {
                *width = (*width).max(row.get(i).map_or(0, String::len));
            }
        }
        widths
    }

    fn separator(widths: &[usize]) -> String {
        let mut s = String::from("+");
        for w in widths {
            s.push_str(&"-".repeat(w + 2));
            s.push('+');
        }
        s
    }

    fn format_row(cells: &[String], widths: &[usize]) -> String {
        let mut s = String::from("|");
        for (i, w) in widths.iter().copied().enumerate() {
            let cell = cells.get(i).map_or("", String::as_str);
            s.push_str(&format!(" {cell:<w$} |"));
        }
        s
    }

}

pub mod config {
    //! Optional TOML overrides for emitter styling. Load failures are
    //! non-fatal; defaults apply.

    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct DotConfig {
        pub rankdir: Option<String>, // "TB" | "LR"
        pub fontsize: Option<u32>,
        pub highlight: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct Config {
        pub dot: Option<DotConfig>,
    }

    fn default_config_path(input: &Path) -> PathBuf {
        input.parent().unwrap_or_else(|| Path::new(".")).join("gedtree.toml")
    }

    #[must_use]
    pub fn load_config_at(path: &Path) -> Option<Config> {
        let data = fs::read_to_string(path).ok()?;
        toml::from_str::<Config>(&data).ok()
    }

    /// Look for `gedtree.toml` next to the input file.
    #[must_use]
    pub fn load_config_near(input: &Path) -> Option<Config> {
        let path = default_config_path(input);
        if path.exists() {
            load_config_at(&path)
        } else {
            None
        }
    }

}
