//! Site-specific portal configuration.
//!
//! The crawl engine itself is generic over any portal that works this
//! way; everything tied to one site (where the form lives, which
//! selectors locate its controls, which field names the server expects)
//! is injected through [`PortalConfig`].

/// Selectors, form field names, and extraction rules for one portal.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Path of the form page, relative to the client's base URL.
    pub form_path: String,
    /// Selector for the year `<option>` elements of the form.
    pub year_options: String,
    /// Selector for the month `<option>` elements of the form.
    pub month_options: String,
    /// Selector for the politician `<option>` elements of the form.
    pub politician_options: String,
    /// Selector for the per-politician heading in an all-politicians
    /// result page. The report table follows the heading as a sibling.
    pub politician_heading: String,
    /// Selector for the report link anchors inside a result table.
    pub report_links: String,
    /// Form field carrying the year.
    pub year_field: String,
    /// Form field carrying the month.
    pub month_field: String,
    /// Form field carrying the politician name. Sent empty to request
    /// all politicians at once.
    pub politician_field: String,
    /// Fields sent verbatim with every submission, e.g. the transparency
    /// section code the server dispatches on.
    pub fixed_fields: Vec<(String, String)>,
}

impl Default for PortalConfig {
    /// Configuration for the Tocantins Legislative Assembly portal
    /// ("Transparência → Verbas Indenizatórias").
    fn default() -> Self {
        Self {
            form_path: "/transparencia/verbaIndenizatoria".to_string(),
            year_options: "select#verbaindenizatoria_ano option".to_string(),
            month_options: "select#verbaindenizatoria_mes option".to_string(),
            politician_options: "select#transparencia_parlamentar option".to_string(),
            politician_heading: "h2.my-2".to_string(),
            report_links: "td a".to_string(),
            year_field: "transparencia.ano".to_string(),
            month_field: "transparencia.mes".to_string(),
            politician_field: "transparencia.parlamentar".to_string(),
            fixed_fields: vec![(
                "transparencia.tipoTransparencia.codigo".to_string(),
                "14".to_string(),
            )],
        }
    }
}
