use yew::prelude::*;

use crate::models::Summary;

#[derive(Properties, PartialEq)]
pub struct SummaryTableProps {
    pub summary: Option<Summary>,
}

/// Tabla de estadísticas. Render puro: sin fetching, sin efectos.
#[function_component(SummaryTable)]
pub fn summary_table(props: &SummaryTableProps) -> Html {
    let Some(summary) = &props.summary else {
        return html! {
            <div class="summary-table">
                <h3>{"Summary Statistics"}</h3>
                <p class="no-data">{"No data available. Please upload a CSV file."}</p>
            </div>
        };
    };

    html! {
        <div class="summary-table">
            <h3>{"Summary Statistics"}</h3>
            <table>
                <thead>
                    <tr>
                        <th>{"Metric"}</th>
                        <th>{"Value"}</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td>{"Total Equipment"}</td>
                        <td>{summary.total_equipment}</td>
                    </tr>
                    <tr>
                        <td>{"Average Flowrate"}</td>
                        <td>{format!("{:.2}", summary.average_flowrate)}</td>
                    </tr>
                    <tr>
                        <td>{"Average Pressure"}</td>
                        <td>{format!("{:.2}", summary.average_pressure)}</td>
                    </tr>
                    <tr>
                        <td>{"Average Temperature"}</td>
                        <td>{format!("{:.2}", summary.average_temperature)}</td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
