use yew::prelude::*;

use crate::models::HistoryEntry;

/// El backend ya limita el history a 5; el render nunca muestra más
/// aunque llegue una lista más larga.
const MAX_VISIBLE_ROWS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    pub history: Vec<HistoryEntry>,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    if props.history.is_empty() {
        return html! {
            <div class="history-list">
                <h3>{"Upload History"}</h3>
                <p class="no-data">{"No upload history yet."}</p>
            </div>
        };
    }

    html! {
        <div class="history-list">
            <h3>{"Upload History (Last 5)"}</h3>
            <table>
                <thead>
                    <tr>
                        <th>{"Upload ID"}</th>
                        <th>{"Uploaded At"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for visible_rows(&props.history).iter().map(|entry| html! {
                        <tr key={entry.id.to_string()}>
                            <td>{entry.id.to_string()}</td>
                            <td>{format_timestamp(&entry.uploaded_at)}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn visible_rows(history: &[HistoryEntry]) -> &[HistoryEntry] {
    &history[..history.len().min(MAX_VISIBLE_ROWS)]
}

/// Formatea el ISO-8601 del backend; si no parsea, se muestra tal cual.
fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UploadId;

    fn entry(id: i64) -> HistoryEntry {
        HistoryEntry {
            id: UploadId::Number(id),
            uploaded_at: "2026-08-01T09:30:00Z".to_string(),
        }
    }

    #[test]
    fn shows_all_rows_at_the_boundary_of_five() {
        let history: Vec<_> = (1..=5).map(entry).collect();
        assert_eq!(visible_rows(&history).len(), 5);
    }

    #[test]
    fn caps_longer_lists_at_five_rows() {
        let history: Vec<_> = (1..=8).map(entry).collect();
        let visible = visible_rows(&history);
        assert_eq!(visible.len(), 5);
        // Se conserva el orden del backend (más recientes primero)
        assert_eq!(visible[0].id, UploadId::Number(1));
    }

    #[test]
    fn empty_history_has_no_rows() {
        assert!(visible_rows(&[]).is_empty());
    }

    #[test]
    fn formats_iso_timestamps() {
        assert_eq!(format_timestamp("2026-08-01T09:30:00Z"), "01/08/2026 09:30");
        assert_eq!(
            format_timestamp("2026-08-01T09:30:00.123456+00:00"),
            "01/08/2026 09:30"
        );
    }

    #[test]
    fn keeps_unparseable_timestamps_verbatim() {
        assert_eq!(format_timestamp("hace un rato"), "hace un rato");
    }
}
