//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart lives in `assets/js/temperature-chart.js` and is evaluated
//! as a global (no ES modules) once D3 has loaded. This module serializes the
//! chart data and calls that global.

use crate::theme::Palette;
use htd_data::style::{rgba, ChartData, ColorSource};

static TEMPERATURE_CHART_JS: &str = include_str!("../assets/js/temperature-chart.js");

/// Where D3 is fetched from when the host page did not load it.
pub const D3_URL: &str = "https://d3js.org/d3.v7.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HTD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The script is evaluated at global scope via indirect eval so its
/// function declarations are not block-scoped inside the interval callback.
/// Safe to call more than once.
pub fn init_charts() {
    let load_d3 = format!(
        r#"
        if (typeof d3 === 'undefined' && !document.getElementById('htd-d3')) {{
            var script = document.createElement('script');
            script.id = 'htd-d3';
            script.src = '{D3_URL}';
            document.head.appendChild(script);
        }}
        "#
    );
    call_js(&load_d3);

    let store_js = format!(
        "if (!window.__htdChartsReady && !window.__htdChartScript) {{ window.__htdChartScript = {}; }}",
        serde_json::to_string(TEMPERATURE_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__htdChartsReady || window.__htdChartsPolling) return;
            window.__htdChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__htdChartScript);
                    delete window.__htdChartScript;
                    if (typeof renderTemperatureChart !== 'undefined') window.renderTemperatureChart = renderTemperatureChart;
                    if (typeof destroyTemperatureChart !== 'undefined') window.destroyTemperatureChart = destroyTemperatureChart;
                    window.__htdChartsReady = true;
                    window.__htdChartsPolling = false;
                    console.log('HTD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Draw `chart` into the element with id `container_id`.
///
/// Polls until D3, the chart script and the container all exist.
pub fn render_temperature_chart(container_id: &str, chart: &ChartData, palette: &Palette) {
    let data_json = match serde_json::to_string(chart) {
        Ok(json) => json,
        Err(e) => {
            log::error!("[HTD] js_bridge: failed to serialize chart: {}", e);
            return;
        }
    };
    let palette_json = serde_json::to_string(palette).unwrap_or_default();
    let escaped_data = escape_for_js(&data_json);
    let escaped_palette = escape_for_js(&palette_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__htdChartsReady &&
                    typeof window.renderTemperatureChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderTemperatureChart('{container_id}', '{escaped_data}', '{escaped_palette}');
                    }} catch(e) {{ console.error('[HTD] renderTemperatureChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Remove any chart drawn into `container_id`.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyTemperatureChart !== 'undefined') {{ window.destroyTemperatureChart('{container_id}'); }}"
    ));
}

/// Random series colors from `Math.random`, for builds without `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsRandomColors;

impl JsRandomColors {
    fn channel() -> u8 {
        (js_sys::Math::random() * 255.0).floor() as u8
    }
}

impl ColorSource for JsRandomColors {
    fn next_color(&mut self) -> String {
        rgba(Self::channel(), Self::channel(), Self::channel())
    }
}
