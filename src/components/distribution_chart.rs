use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::models::DistributionEntry;
use crate::utils::chart_ffi;

const CHART_CANVAS_ID: &str = "distribution-chart";

#[derive(Properties, PartialEq)]
pub struct DistributionChartProps {
    pub distribution: Vec<DistributionEntry>,
}

/// Chart de barras por tipo de equipo. El render real lo hace Chart.js
/// via FFI; este componente solo aporta el canvas y los datos.
#[function_component(DistributionChart)]
pub fn distribution_chart(props: &DistributionChartProps) -> Html {
    {
        let distribution = props.distribution.clone();
        use_effect_with(distribution, move |entries| {
            if entries.is_empty() {
                chart_ffi::destroy_distribution_chart(CHART_CANVAS_ID);
            } else {
                let labels: Vec<String> = entries
                    .iter()
                    .map(|entry| entry.equipment_type.clone())
                    .collect();
                let counts: Vec<i64> = entries.iter().map(|entry| entry.count).collect();
                let labels_json = serde_json::to_string(&labels).unwrap_or_default();
                let counts_json = serde_json::to_string(&counts).unwrap_or_default();

                // El canvas tiene que estar en el DOM antes de tocar Chart.js
                Timeout::new(50, move || {
                    chart_ffi::render_distribution_chart(CHART_CANVAS_ID, &labels_json, &counts_json);
                })
                .forget();
            }

            || chart_ffi::destroy_distribution_chart(CHART_CANVAS_ID)
        });
    }

    if props.distribution.is_empty() {
        return html! {
            <div class="distribution-chart">
                <h3>{"Equipment Type Distribution"}</h3>
                <p class="no-data">{"No data available. Please upload a CSV file."}</p>
            </div>
        };
    }

    html! {
        <div class="distribution-chart">
            <h3>{"Equipment Type Distribution"}</h3>
            <div class="chart-container">
                <canvas id={CHART_CANVAS_ID}></canvas>
            </div>
        </div>
    }
}
