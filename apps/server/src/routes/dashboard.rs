//! # Dashboard Route
//!
//! `GET /` - a server-rendered HTML view of recent scan activity.
//!
//! Every request reads the scan log and the catalogue fresh from the
//! database, so the page always reflects durable state. There is no cached
//! "last result" in the process; concurrent scans cannot corrupt what the
//! dashboard shows.
//!
//! Rendering is a pure function over the fetched rows, which keeps it unit
//! testable without a server or a database.

use axum::extract::State;
use axum::response::Html;

use scanpoint_core::RecentScan;

use crate::error::ApiError;
use crate::AppState;

/// `GET /` - renders the dashboard.
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let scans = state
        .db
        .scans()
        .recent(state.config.dashboard_scan_limit)
        .await?;
    let catalogue_size = state.db.products().count().await?;
    let total_scans = state.db.scans().count().await?;

    Ok(Html(render_dashboard(&scans, catalogue_size, total_scans)))
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the full dashboard page.
fn render_dashboard(scans: &[RecentScan], catalogue_size: i64, total_scans: i64) -> String {
    let mut rows = String::new();
    for scan in scans {
        rows.push_str(&render_scan_row(scan));
    }

    let body = if scans.is_empty() {
        r#"<p class="empty">Waiting for scans…</p>"#.to_string()
    } else {
        format!(
            "<table>\
             <tr><th>Time (UTC)</th><th>Barcode</th><th>Product</th><th>Price</th></tr>\
             {rows}\
             </table>"
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Scanpoint</title>
    <style>
        body {{ font-family: Arial, sans-serif; background: #f4f4f4; margin: 40px auto; max-width: 720px; }}
        h1 {{ color: #333; }}
        .card {{ background: white; padding: 20px 30px; border-radius: 10px; box-shadow: 0 2px 10px #ccc; }}
        .summary {{ color: #666; margin-bottom: 16px; }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ text-align: left; padding: 6px 10px; border-bottom: 1px solid #eee; }}
        .unknown {{ color: #999; font-style: italic; }}
        .empty {{ color: #999; }}
    </style>
</head>
<body>
    <div class="card">
        <h1>Scanpoint</h1>
        <p class="summary">{catalogue_size} products in catalogue · {total_scans} scans recorded · showing {scan_count}</p>
        {body}
    </div>
</body>
</html>
"#,
        catalogue_size = catalogue_size,
        total_scans = total_scans,
        scan_count = scans.len(),
        body = body,
    )
}

/// Renders one scan log row.
///
/// Barcodes and product names are client-supplied or operator-supplied
/// text and are escaped before they reach the page.
fn render_scan_row(scan: &RecentScan) -> String {
    let time = scan.scanned_at.format("%Y-%m-%d %H:%M:%S");
    let barcode = escape_html(&scan.barcode);

    match (&scan.product_name, scan.price()) {
        (Some(name), Some(price)) => format!(
            "<tr><td>{time}</td><td>{barcode}</td><td>{}</td><td>{}</td></tr>",
            escape_html(name),
            price.format_amount(),
        ),
        _ => format!(
            "<tr><td>{time}</td><td>{barcode}</td>\
             <td class=\"unknown\" colspan=\"2\">not in catalogue</td></tr>"
        ),
    }
}

/// Minimal HTML escaping for text nodes and attribute values.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn resolved_scan() -> RecentScan {
        RecentScan {
            barcode: "123".to_string(),
            scanned_at: Utc::now(),
            product_name: Some("Milk".to_string()),
            price_cents: Some(1250),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a&b'c"), "a&amp;b&#39;c");
    }

    #[test]
    fn test_resolved_row_shows_name_and_price() {
        let row = render_scan_row(&resolved_scan());
        assert!(row.contains("Milk"));
        assert!(row.contains("12.50"));
    }

    #[test]
    fn test_unresolved_row_shows_placeholder() {
        let scan = RecentScan {
            barcode: "999".to_string(),
            scanned_at: Utc::now(),
            product_name: None,
            price_cents: None,
        };
        let row = render_scan_row(&scan);
        assert!(row.contains("not in catalogue"));
        assert!(!row.contains("12.50"));
    }

    #[test]
    fn test_scan_row_escapes_hostile_barcode() {
        let scan = RecentScan {
            barcode: "<img src=x>".to_string(),
            scanned_at: Utc::now(),
            product_name: None,
            price_cents: None,
        };
        let row = render_scan_row(&scan);
        assert!(!row.contains("<img"));
        assert!(row.contains("&lt;img"));
    }

    #[test]
    fn test_empty_dashboard_renders_waiting_state() {
        let page = render_dashboard(&[], 0, 0);
        assert!(page.contains("Waiting for scans"));
        assert!(page.contains("0 products in catalogue"));
    }

    #[test]
    fn test_dashboard_renders_scan_table() {
        let page = render_dashboard(&[resolved_scan()], 16, 42);
        assert!(page.contains("<table>"));
        assert!(page.contains("Milk"));
        assert!(page.contains("16 products in catalogue"));
        assert!(page.contains("42 scans recorded"));
    }
}
