use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{
    DistributionChart, HistoryList, LoginScreen, RegisterScreen, SummaryTable, UploadForm,
};
use crate::models::{DashboardSnapshot, Session};
use crate::services::api_error::ApiError;
use crate::services::{session_service, ApiClient};
use crate::utils::download;

/// Controlador del dashboard: dueño del estado de vista
/// (sesión, snapshot, error, loading) y de la secuencia de llamadas.
#[function_component(App)]
pub fn app() -> Html {
    // Estado de autenticación
    let session = use_state(|| None::<Session>);
    let show_register = use_state(|| false);

    // Estado del dashboard
    let snapshot = use_state(DashboardSnapshot::default);
    let error = use_state(String::new);
    let loading = use_state(|| false);

    // Época de sesión: un async que termina después de un login/logout
    // compara su época capturada y descarta la respuesta si ya no coincide.
    let session_epoch = use_mut_ref(|| 0u32);

    // Restaurar la sesión guardada al montar y cargar el dashboard
    {
        let session = session.clone();
        let snapshot = snapshot.clone();
        let session_epoch = session_epoch.clone();

        use_effect_with((), move |_| {
            if let Some(saved) = session_service::load() {
                log::info!("✅ Sesión restaurada: {}", saved.username);
                session.set(Some(saved));
                refresh_dashboard(session_epoch, snapshot);
            }
            || ()
        });
    }

    // Login o registro correcto: marcar logueado y refrescar todo
    let on_login_success = {
        let session = session.clone();
        let snapshot = snapshot.clone();
        let error = error.clone();
        let show_register = show_register.clone();
        let session_epoch = session_epoch.clone();

        Callback::from(move |new_session: Session| {
            *session_epoch.borrow_mut() += 1;
            session.set(Some(new_session));
            error.set(String::new());
            show_register.set(false);
            refresh_dashboard(session_epoch.clone(), snapshot.clone());
        })
    };

    // Logout: invalidar el token en el servidor y limpiar lo local.
    // La limpieza local NUNCA depende del resultado del backend.
    let on_logout = {
        let session = session.clone();
        let snapshot = snapshot.clone();
        let error = error.clone();
        let loading = loading.clone();
        let session_epoch = session_epoch.clone();

        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            let snapshot = snapshot.clone();
            let error = error.clone();
            let loading = loading.clone();
            let session_epoch = session_epoch.clone();

            spawn_local(async move {
                let api = ApiClient::new();
                if let Err(e) = api.logout().await {
                    log::warn!("⚠️ Logout API falló (se ignora): {}", e);
                }

                session_service::clear();
                *session_epoch.borrow_mut() += 1;
                session.set(None);
                snapshot.set(DashboardSnapshot::empty());
                error.set(String::new());
                loading.set(false);
            });
        })
    };

    // Upload: limpiar error, subir, refrescar el snapshot completo.
    // El resultado vuelve al formulario via `finished` para que gestione
    // su propia selección.
    let on_upload = {
        let snapshot = snapshot.clone();
        let error = error.clone();
        let loading = loading.clone();
        let session_epoch = session_epoch.clone();

        Callback::from(move |(file, finished): (web_sys::File, Callback<bool>)| {
            error.set(String::new());
            loading.set(true);

            let snapshot = snapshot.clone();
            let error = error.clone();
            let loading = loading.clone();
            let session_epoch = session_epoch.clone();
            let epoch = *session_epoch.borrow();

            spawn_local(async move {
                let api = ApiClient::new();
                let success = match api.upload_csv(&file).await {
                    Ok(_) => {
                        load_snapshot(&api, epoch, &session_epoch, &snapshot).await;
                        true
                    }
                    Err(e) => {
                        log::error!("❌ Upload fallido: {}", e);
                        if *session_epoch.borrow() == epoch {
                            error.set(e.to_string());
                        }
                        false
                    }
                };

                loading.set(false);
                finished.emit(success);
            });
        })
    };

    // Descargar el reporte PDF del dataset actual
    let on_download_report = {
        let error = error.clone();

        Callback::from(move |_: MouseEvent| {
            let error = error.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match api.download_report().await {
                    Ok(bytes) => {
                        if let Err(e) = download::trigger_download(
                            &bytes,
                            "equipment_analytics_report.pdf",
                            "application/pdf",
                        ) {
                            log::error!("❌ No se pudo entregar el PDF: {}", e);
                        }
                    }
                    // Sin dataset no hay reporte; mismo estado vacío que el dashboard
                    Err(ApiError::NotFound) => {
                        log::info!("ℹ️ Reporte pedido sin dataset subido");
                    }
                    Err(e) => {
                        log::error!("❌ Error descargando el reporte: {}", e);
                        error.set(e.to_string());
                    }
                }
            });
        })
    };

    // Sin sesión: login o registro
    let Some(current) = (*session).clone() else {
        let on_show_register = {
            let show_register = show_register.clone();
            Callback::from(move |_| show_register.set(true))
        };
        let on_back_to_login = {
            let show_register = show_register.clone();
            Callback::from(move |_| show_register.set(false))
        };

        return if *show_register {
            html! {
                <RegisterScreen
                    on_register_success={on_login_success}
                    on_back_to_login={on_back_to_login}
                />
            }
        } else {
            html! {
                <LoginScreen
                    on_login_success={on_login_success}
                    on_show_register={on_show_register}
                />
            }
        };
    };

    html! {
        <div class="app">
            <header class="app-header">
                <div class="header-content">
                    <h1>{"Equipment Analytics Dashboard"}</h1>
                    <div class="user-info">
                        <span>{format!("Welcome, {}", current.username)}</span>
                        <button
                            class="report-btn"
                            onclick={on_download_report}
                            disabled={snapshot.summary.is_none()}
                        >
                            {"Download Report"}
                        </button>
                        <button class="logout-btn" onclick={on_logout}>
                            {"Logout"}
                        </button>
                    </div>
                </div>
            </header>

            <main class="app-main">
                { if !error.is_empty() {
                    html! {
                        <div class="error-banner">
                            <strong>{"Error: "}</strong>{(*error).clone()}
                        </div>
                    }
                } else {
                    html! {}
                } }

                { if *loading {
                    html! { <div class="loading-banner">{"Processing upload..."}</div> }
                } else {
                    html! {}
                } }

                <UploadForm on_upload={on_upload} />

                <div class="dashboard-grid">
                    <div class="dashboard-left">
                        <SummaryTable summary={snapshot.summary.clone()} />
                        <HistoryList history={snapshot.history.clone()} />
                    </div>
                    <div class="dashboard-right">
                        <DistributionChart distribution={snapshot.distribution.clone()} />
                    </div>
                </div>
            </main>
        </div>
    }
}

/// Lanza un refresh con la época de sesión actual.
fn refresh_dashboard(session_epoch: Rc<RefCell<u32>>, snapshot: UseStateHandle<DashboardSnapshot>) {
    let epoch = *session_epoch.borrow();
    spawn_local(async move {
        let api = ApiClient::new();
        load_snapshot(&api, epoch, &session_epoch, &snapshot).await;
    });
}

async fn load_snapshot(
    api: &ApiClient,
    epoch: u32,
    session_epoch: &Rc<RefCell<u32>>,
    snapshot: &UseStateHandle<DashboardSnapshot>,
) {
    match load_dashboard_data(api).await {
        Ok(fresh) => {
            if *session_epoch.borrow() != epoch {
                log::warn!("⚠️ Respuesta de una sesión anterior, descartada");
                return;
            }
            snapshot.set(fresh);
        }
        Err(e) => {
            // Fallo que no es 404: se deja el snapshot como estaba
            log::error!("❌ Error cargando el dashboard: {}", e);
        }
    }
}

async fn load_dashboard_data(api: &ApiClient) -> Result<DashboardSnapshot, ApiError> {
    snapshot_or_empty(fetch_snapshot(api).await)
}

/// Los tres fetch SIEMPRE en el mismo orden: summary, distribution, history.
/// El snapshot se arma entero o no se arma: nunca se mezclan datos frescos
/// con datos viejos.
async fn fetch_snapshot(api: &ApiClient) -> Result<DashboardSnapshot, ApiError> {
    let summary = api.get_summary().await?;
    let distribution = api.get_distribution().await?;
    let history = api.get_history().await?;

    Ok(DashboardSnapshot {
        summary: Some(summary),
        distribution,
        history,
    })
}

/// 404 en cualquiera de los tres fetch = cuenta sin datasets todavía:
/// el snapshot entero pasa a vacío y no se muestra ningún error.
fn snapshot_or_empty(
    result: Result<DashboardSnapshot, ApiError>,
) -> Result<DashboardSnapshot, ApiError> {
    match result {
        Err(ApiError::NotFound) => Ok(DashboardSnapshot::empty()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DistributionEntry, Summary};

    fn populated_snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            summary: Some(Summary {
                total_equipment: 10,
                average_flowrate: 101.5,
                average_pressure: 6.2,
                average_temperature: 88.0,
            }),
            distribution: vec![DistributionEntry {
                equipment_type: "Pump".to_string(),
                count: 4,
            }],
            history: vec![],
        }
    }

    #[test]
    fn not_found_collapses_to_the_empty_snapshot() {
        let result = snapshot_or_empty(Err(ApiError::NotFound));
        assert_eq!(result, Ok(DashboardSnapshot::empty()));
    }

    #[test]
    fn successful_snapshot_passes_through_unchanged() {
        let result = snapshot_or_empty(Ok(populated_snapshot()));
        assert_eq!(result, Ok(populated_snapshot()));
    }

    #[test]
    fn other_errors_are_not_swallowed() {
        let error = ApiError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        let result = snapshot_or_empty(Err(error.clone()));
        assert_eq!(result, Err(error));
    }
}
