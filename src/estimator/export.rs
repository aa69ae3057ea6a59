use gloo_timers::callback::Timeout;
use log::debug;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys::Array, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::aggregates::Aggregates;
use super::model::{Duration, Role};
use crate::config;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no browser window available")]
    NoWindow,
    #[error("no document attached to window")]
    NoDocument,
    #[error("failed to build CSV blob: {0}")]
    Blob(String),
    #[error("failed to create object URL: {0}")]
    ObjectUrl(String),
    #[error("failed to create download link: {0}")]
    Anchor(String),
}

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Renders the estimate as CSV text: a header, one row per role and two
/// trailing total rows. An empty team still yields the header and totals.
pub fn export_csv(roles: &[Role], aggregates: &Aggregates, duration: Duration) -> String {
    let mut rows: Vec<String> = Vec::with_capacity(roles.len() + 3);
    rows.push("Role,Seniority,Quantity,Monthly Rate,Total".to_string());

    for role in roles {
        rows.push(format!(
            "{},{},{},{},{}",
            escape_field(&role.name),
            role.seniority,
            role.quantity,
            role.monthly_rate,
            role.line_total()
        ));
    }

    rows.push(format!(",,,Total Monthly:,{}", aggregates.monthly_cost));
    rows.push(format!(",,,Total {} months:,{}", duration.months(), aggregates.total_cost));
    rows.join("\n")
}

/// Offers `contents` to the visitor as a downloaded CSV file.
pub fn download_csv(file_name: &str, contents: &str) -> Result<(), ExportError> {
    let window = web_sys::window().ok_or(ExportError::NoWindow)?;
    let document = window.document().ok_or(ExportError::NoDocument)?;

    let parts = Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| ExportError::Blob(js_err(e)))?;

    let url = Url::create_object_url_with_blob(&blob).map_err(|e| ExportError::ObjectUrl(js_err(e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Anchor(js_err(e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ExportError::Anchor("element is not an anchor".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // Some engines resolve the blob URL after click() returns, so the URL has
    // to outlive this call.
    Timeout::new(config::EXPORT_URL_REVOKE_DELAY_MS, move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            gloo_console::error!("Failed to revoke export URL:", js_err(e));
        }
    })
    .forget();
    debug!("Exported {} bytes to {}", contents.len(), file_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::aggregates::compute_aggregates;
    use crate::estimator::catalog::preset_by_name;
    use crate::estimator::engine::Estimator;
    use crate::estimator::model::RoleUpdate;

    #[test]
    fn empty_team_exports_header_and_zero_totals() {
        let agg = compute_aggregates(&[], Duration::SixMonths);
        let csv = export_csv(&[], &agg, Duration::SixMonths);
        assert_eq!(
            csv,
            "Role,Seniority,Quantity,Monthly Rate,Total\n,,,Total Monthly:,0\n,,,Total 6 months:,0"
        );
    }

    #[test]
    fn rows_follow_team_order() {
        let mut est = Estimator::new();
        est.apply_preset(preset_by_name("MVP Team").unwrap());
        let id = est.roles()[1].id.clone();
        est.update_role(&id, RoleUpdate::quantity(2));

        let agg = compute_aggregates(est.roles(), Duration::ThreeMonths);
        let csv = export_csv(est.roles(), &agg, Duration::ThreeMonths);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Role,Seniority,Quantity,Monthly Rate,Total",
                "Backend Engineer,Senior,1,1500,1500",
                "Frontend Engineer,Mid,2,800,1600",
                "UI/UX Designer,Mid,1,800,800",
                ",,,Total Monthly:,3900",
                ",,,Total 3 months:,11700",
            ]
        );
    }

    #[test]
    fn object_url_outlives_the_click() {
        assert!(config::EXPORT_URL_REVOKE_DELAY_MS >= 1_000);
    }

    #[test]
    fn custom_names_with_commas_are_quoted() {
        let mut est = Estimator::new();
        est.add_custom_role("Sales, \"Growth\" Lead");
        let agg = compute_aggregates(est.roles(), Duration::OneMonth);
        let csv = export_csv(est.roles(), &agg, Duration::OneMonth);
        assert_eq!(csv.lines().nth(1), Some("\"Sales, \"\"Growth\"\" Lead\",Mid,1,800,800"));
    }
}
