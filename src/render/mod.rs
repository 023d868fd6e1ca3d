pub mod chart;
pub mod dashboard;
pub mod pie;
pub mod table;

use serde::Serialize;

use crate::model::Shaped;

/// One chart point; serializes to the `{x, y}` shape Chart.js expects.
#[derive(Serialize)]
struct Point {
    x: f64,
    y: f64,
}

/// JSON array of `{x, y}` points pairing a value series with its strikes.
fn xy_json(shaped: &Shaped, values: &[f64]) -> String {
    let points: Vec<Point> = shaped
        .with_strikes(values)
        .map(|(x, y)| Point { x, y })
        .collect();
    serde_json::to_string(&points).unwrap_or_else(|_| "[]".to_string())
}

fn num_json(v: f64) -> String {
    serde_json::to_string(&v).unwrap_or_else(|_| "0".to_string())
}

/// Escape text destined for HTML element content or attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Substitute every data placeholder a page template may carry. Templates
/// that omit a placeholder are unaffected; call/put series fill as `[]`
/// when the volume sheet was absent.
fn fill_template(template: &str, shaped: &Shaped) -> String {
    let empty: Vec<f64> = Vec::new();
    let call_vol = shaped.call_vol.as_deref().unwrap_or(&empty);
    let put_vol = shaped.put_vol.as_deref().unwrap_or(&empty);

    template
        .replace("__CHART_SCRIPT__", chart::CHART_SCRIPT)
        .replace("__CSS__", PAGE_CSS)
        .replace("__TABLE__", &table::summary_table(&shaped.summary))
        .replace("__POS_GEX_OI__", &xy_json(shaped, &shaped.pos_gex_oi))
        .replace("__NEG_GEX_OI__", &xy_json(shaped, &shaped.neg_gex_oi))
        .replace("__ABS_OI__", &xy_json(shaped, &shaped.abs_oi))
        .replace("__POS_GEX_VOL__", &xy_json(shaped, &shaped.pos_gex_vol))
        .replace("__NEG_GEX_VOL__", &xy_json(shaped, &shaped.neg_gex_vol))
        .replace("__ABS_VOL__", &xy_json(shaped, &shaped.abs_vol))
        .replace("__CALL_VOL__", &xy_json(shaped, call_vol))
        .replace("__PUT_VOL__", &xy_json(shaped, put_vol))
        .replace("__SPOT__", &num_json(shaped.spot))
        .replace("__OI_GAUGE__", &num_json(shaped.gex_oi_gauge))
        .replace("__VOL_GAUGE__", &num_json(shaped.gex_vol_gauge))
        .replace(
            "__GENERATED__",
            &chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        )
}

/// Dark theme shared by every generated page.
const PAGE_CSS: &str = r#"
        body { background-color: black; color: white; font-family: Arial, sans-serif; padding: 20px; margin: 0; }
        .container { display: flex; gap: 20px; height: 90vh; }
        #chartContainer { flex: 1; background-color: #111; position: relative; }
        .table-container { flex: 0 0 300px; background-color: #111; padding: 10px; overflow-y: auto; }
        .side-panel { flex: 0 0 300px; display: flex; flex-direction: column; gap: 10px; }
        table.table-style {
            width: 100%;
            border-collapse: collapse;
            color: white;
            background-color: #111;
            font-size: 16px;
        }
        table.table-style th, table.table-style td {
            border: 1px solid #333;
            padding: 6px 10px;
            text-align: left;
        }
        table.table-style th { background-color: #222; }
        table.table-style tr:hover { background-color: #333; }
        .green-text { color: #00ff00; }
        .red-text { color: #ff0000; }
        .purple-text { color: #9370DB; }
        .footer { color: #888; font-size: 12px; margin-top: 10px; }
        .legend-btn { background: #333; color: white; border: 1px solid #666; padding: 5px 10px; cursor: pointer; font-size: 12px; }
        .legend-btn.active { background: #007bff; border-color: #007bff; }
"#;
